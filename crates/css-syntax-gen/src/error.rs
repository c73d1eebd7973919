//! Error types for syntax generation
//!
//! Provides error handling for:
//! - Loading the grammar dataset (source)
//! - Reading generator configuration
//! - Writing syntax documents (sink)

use css_syntax_core::RuleError;
use std::path::PathBuf;

/// Errors while loading the grammar dataset
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// IO error during dataset read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not valid JSON of the expected shape
    #[error("invalid grammar dataset {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create JSON error for path
    pub fn json_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Errors while writing syntax documents
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Output directory could not be created
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document could not be written
    #[error("io error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document could not be serialized
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SinkError {
    /// Create write error for path
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create directory error for path
    pub fn create_dir_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }
}

/// Errors while reading generator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during config read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML of the expected shape
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Replacement rules were rejected
    #[error("invalid replacement rules: {0}")]
    Rules(#[from] RuleError),

    /// No grammar dataset was configured
    #[error("no grammar dataset configured; pass --source or set `source` in the config file")]
    MissingSource,
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Combined generation error
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;
