use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use css_syntax_core::upgrade_source;
use css_syntax_gen::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when `--config` is not given
const DEFAULT_CONFIG: &str = "css-syntax.toml";

fn cli() -> Command {
    let common = [
        Arg::new("source")
            .long("source")
            .short('s')
            .value_parser(value_parser!(PathBuf))
            .help("Grammar dataset JSON (types, properties, atrules)"),
        Arg::new("config")
            .long("config")
            .short('c')
            .value_parser(value_parser!(PathBuf))
            .help("Configuration file [default: ./css-syntax.toml if present]"),
        Arg::new("out-dir")
            .long("out-dir")
            .short('o')
            .value_parser(value_parser!(PathBuf))
            .help("Directory for the generated documents [default: syntax]"),
    ];

    Command::new("css-syntax")
        .version(css_syntax_gen::VERSION)
        .about("Generate upgraded CSS syntax dictionaries for linter syntax extensions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log replacement rules and upgrade candidates, print full error chains"),
        )
        .subcommand(
            Command::new("generate")
                .about("Upgrade the dataset and write types, properties and at-rules documents")
                .args(common.clone()),
        )
        .subcommand(
            Command::new("check")
                .about("Validate configuration and count upgrade candidates without writing")
                .args(common),
        )
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

async fn load_config(args: &ArgMatches) -> anyhow::Result<GeneratorConfig> {
    let explicit = args.get_one::<PathBuf>("config");
    let path = match explicit {
        Some(path) => Some(path.clone()),
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            tokio::fs::try_exists(default)
                .await
                .unwrap_or(false)
                .then(|| default.to_path_buf())
        }
    };

    let mut config = match path {
        Some(path) => GeneratorConfig::load(&path)
            .await
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => GeneratorConfig::new(),
    };

    if let Some(source) = args.get_one::<PathBuf>("source") {
        config = config.with_source(source);
    }
    if let Some(dir) = args.get_one::<PathBuf>("out-dir") {
        config = config.with_output_dir(dir);
    }
    Ok(config)
}

async fn prepare(args: &ArgMatches) -> anyhow::Result<(GeneratorConfig, RuleSet, SyntaxSource)> {
    let config = load_config(args).await?;
    // Rules are validated before the dataset is touched
    let rules = config.rule_set()?;
    let source_path = config.source_path()?;

    tracing::info!(
        "Using {} replacement rules on {}",
        rules.len(),
        source_path.display()
    );
    let source = load_source(source_path)
        .await
        .context("failed to load grammar dataset")?;

    Ok((config, rules, source))
}

async fn generate(args: &ArgMatches) -> anyhow::Result<()> {
    let (config, rules, source) = prepare(args).await?;

    let generator = SyntaxGenerator::new(rules, FsSink::new(config.output));
    let report = generator
        .generate(&source)
        .await
        .context("failed to generate syntax documents")?;

    println!();
    println!("Generated successfully");
    for document in &report.documents {
        println!(
            "  {:<11} {:>5} entries → {}",
            document.document.to_string(),
            document.entries.len(),
            document.path.display()
        );
    }
    Ok(())
}

async fn check(args: &ArgMatches) -> anyhow::Result<()> {
    let (_, rules, source) = prepare(args).await?;
    let upgraded = upgrade_source(&source, &rules);

    println!("Configuration OK ({} rules)", rules.len());
    println!("  types       {:>5} of {:>5}", upgraded.types.len(), source.types.len());
    println!(
        "  properties  {:>5} of {:>5}",
        upgraded.properties.len(),
        source.properties.len()
    );
    println!(
        "  at-rules    {:>5} of {:>5}",
        upgraded.at_rules.len(),
        source.atrules.len()
    );
    Ok(())
}

async fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("generate", args)) => generate(args).await,
        Some(("check", args)) => check(args).await,
        _ => Ok(()),
    }
}

/// Operator-facing error text
///
/// Library errors already embed their source in their own message, so links
/// whose text the previous link contains are skipped. Verbose mode keeps
/// anyhow's full report.
fn render_error(error: &anyhow::Error, verbose: bool) -> String {
    if verbose {
        return format!("{error:?}");
    }

    let mut message = String::new();
    let mut previous = String::new();
    for cause in error.chain() {
        let text = cause.to_string();
        if !previous.contains(&text) {
            if !message.is_empty() {
                message.push_str(": ");
            }
            message.push_str(&text);
        }
        previous = text;
    }
    message
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    let verbose = matches
        .subcommand()
        .is_some_and(|(_, args)| args.get_flag("verbose"));
    init_tracing(verbose);

    match run(&matches).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("\nError: {}\n", render_error(&error, verbose));
            ExitCode::FAILURE
        }
    }
}
