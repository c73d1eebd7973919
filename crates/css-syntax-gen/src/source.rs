//! Grammar dataset loading
//!
//! Reads a css-tree `definition-syntax-data` style JSON document
//! (`types`, `properties`, `atrules`) into a [`SyntaxSource`] snapshot.

use crate::error::SourceError;
use css_syntax_core::SyntaxSource;
use std::path::Path;

/// Load a grammar dataset from a UTF-8 JSON file
///
/// # Errors
/// - `SourceError::Io` if the file cannot be read
/// - `SourceError::Json` if the contents are not a dataset document
pub async fn load_source(path: impl AsRef<Path>) -> Result<SyntaxSource, SourceError> {
    let path = path.as_ref();

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SourceError::io_error(path, e))?;

    let source = SyntaxSource::from_json_str(&content)
        .map_err(|e| SourceError::json_error(path, e))?;

    tracing::debug!(
        "Loaded {} types, {} properties, {} at-rules from {}",
        source.types.len(),
        source.properties.len(),
        source.atrules.len(),
        path.display()
    );

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_valid_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("syntax.json");
        tokio::fs::write(
            &path,
            r#"{ "types": { "a": "<color>" }, "properties": {}, "atrules": {} }"#,
        )
        .await
        .unwrap();

        let source = load_source(&path).await.unwrap();
        assert_eq!(source.types["a"], "<color>");
    }

    #[tokio::test]
    async fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_source(dir.path().join("missing.json")).await.unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[tokio::test]
    async fn load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, r#"{ "types": { "a": 1 } }"#).await.unwrap();

        let err = load_source(&path).await.unwrap_err();
        assert!(matches!(err, SourceError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
