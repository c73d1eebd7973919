use std::path::Path;
use std::process::{Command, Output};

const DATASET: &str = r#"{
  "types": { "shadow": "inset? && <length>{2,4} && <color>?" },
  "properties": { "display": "block | inline" },
  "atrules": {}
}"#;

fn css_syntax(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_css-syntax"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_dataset_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = css_syntax(dir.path(), &["generate", "--source", "absent.json"]);

    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    assert!(message.contains("Error: failed to load grammar dataset: io error reading absent.json"));
    assert_eq!(message.matches("(os error").count(), 1, "{message}");
    assert!(!dir.path().join("syntax").exists());
}

#[test]
fn duplicate_rules_exit_with_one() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("css.json"), DATASET).unwrap();
    std::fs::write(
        dir.path().join("css-syntax.toml"),
        "source = \"css.json\"\n\
         [[rules]]\ntoken = \"<color>\"\nreplacement = \"<a>\"\n\
         [[rules]]\ntoken = \"<color>\"\nreplacement = \"<b>\"\n",
    )
    .unwrap();

    let output = css_syntax(dir.path(), &["check"]);

    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    assert!(message.contains(
        "Error: invalid replacement rules: duplicate token '<color>' in replacement rule set\n"
    ));
    assert_eq!(message.matches("duplicate token").count(), 1, "{message}");
}

#[test]
fn generate_writes_documents() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("css.json"), DATASET).unwrap();

    let output = css_syntax(dir.path(), &["generate", "-s", "css.json", "-o", "out"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let types = std::fs::read_to_string(dir.path().join("out/types.json")).unwrap();
    assert_eq!(
        types,
        "{\n  \"shadow\": \"inset? && <tailwindcss-length>{2,4} && <tailwindcss-color>?\"\n}\n"
    );
    let properties = std::fs::read_to_string(dir.path().join("out/properties.json")).unwrap();
    assert_eq!(properties, "{}\n");
    assert!(dir.path().join("out/at-rules.json").is_file());
}
