//! Generator configuration
//!
//! Read from an optional TOML file; command-line flags override it.
//!
//! ```toml
//! source = "data/css-syntax.json"
//!
//! [output]
//! dir = "syntax"
//!
//! [[rules]]
//! token = "<color>"
//! replacement = "<tailwindcss-color>"
//! ```
//!
//! An empty or missing `rules` list selects [`RuleSet::tailwind`].

use crate::error::ConfigError;
use crate::sink::OutputPaths;
use css_syntax_core::{ReplacementRule, RuleSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete generator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Grammar dataset JSON
    pub source: Option<PathBuf>,
    /// Output layout
    pub output: OutputPaths,
    /// Replacement rules, in application order
    pub rules: Vec<ReplacementRule>,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` on malformed input or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::Toml` if the contents are malformed
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::io_error(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// With grammar dataset path
    #[inline]
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// With output directory, keeping configured file names
    #[inline]
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.dir = dir.into();
        self
    }

    /// With replacement rules
    #[inline]
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<ReplacementRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Validated rule set
    ///
    /// # Errors
    /// Returns `ConfigError::Rules` if the configured rules are rejected.
    pub fn rule_set(&self) -> Result<RuleSet, ConfigError> {
        if self.rules.is_empty() {
            return Ok(RuleSet::tailwind());
        }
        Ok(RuleSet::new(self.rules.clone())?)
    }

    /// Configured dataset path
    ///
    /// # Errors
    /// Returns `ConfigError::MissingSource` if none was configured.
    pub fn source_path(&self) -> Result<&Path, ConfigError> {
        self.source.as_deref().ok_or(ConfigError::MissingSource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_syntax_core::RuleError;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.output, OutputPaths::in_dir("syntax"));
        assert_eq!(config.rule_set().unwrap(), RuleSet::tailwind());
        assert!(matches!(config.source_path(), Err(ConfigError::MissingSource)));
    }

    #[test]
    fn full_config() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            source = "data/css.json"

            [output]
            dir = "dist/syntax"
            at_rules = "atrules.json"

            [[rules]]
            token = "<color>"
            replacement = "[<color>|<--alpha()>]"

            [[rules]]
            token = "<length>"
            replacement = "[<length>|<--spacing()>]"
            "#,
        )
        .unwrap();

        assert_eq!(config.source_path().unwrap(), Path::new("data/css.json"));
        assert_eq!(config.output.dir, Path::new("dist/syntax"));
        assert_eq!(config.output.types, Path::new("types.json"));
        assert_eq!(config.output.at_rules, Path::new("atrules.json"));

        let rules = config.rule_set().unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[1].replacement, "[<length>|<--spacing()>]");
    }

    #[test]
    fn invalid_rules_rejected() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            [[rules]]
            token = "color"
            replacement = "<c>"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.rule_set(),
            Err(ConfigError::Rules(RuleError::MalformedToken { .. }))
        ));
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = GeneratorConfig::from_toml_str("sauce = \"x.json\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn unknown_output_keys_rejected() {
        let err = GeneratorConfig::from_toml_str("[output]\ndri = \"out\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().contains("dri"));
    }

    #[test]
    fn overrides_win() {
        let config = GeneratorConfig::from_toml_str("source = \"a.json\"")
            .unwrap()
            .with_source("b.json")
            .with_output_dir("out");
        assert_eq!(config.source_path().unwrap(), Path::new("b.json"));
        assert_eq!(config.output.path_of(crate::SyntaxDocument::Types), Path::new("out/types.json"));
    }

    #[tokio::test]
    async fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("css-syntax.toml");
        tokio::fs::write(&path, "source = \"syntax.json\"\n").await.unwrap();

        let config = GeneratorConfig::load(&path).await.unwrap();
        assert_eq!(config.source, Some(PathBuf::from("syntax.json")));

        let missing = GeneratorConfig::load(dir.path().join("nope.toml")).await;
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
