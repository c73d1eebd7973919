//! Persistence of upgraded syntax documents
//!
//! The generator hands each rendered document to a [`SyntaxSink`]. The
//! filesystem implementation, [`FsSink`], writes to the layout the linter
//! configuration imports:
//!
//! ```text
//! syntax/
//! ├── types.json
//! ├── properties.json
//! └── at-rules.json
//! ```

use crate::error::SinkError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// One of the three generated documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxDocument {
    /// Upgraded value types
    Types,
    /// Upgraded properties
    Properties,
    /// Upgraded at-rules
    AtRules,
}

impl SyntaxDocument {
    /// All documents in write order
    pub const ALL: [Self; 3] = [Self::Types, Self::Properties, Self::AtRules];

    /// Default file name
    #[inline]
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Types => "types.json",
            Self::Properties => "properties.json",
            Self::AtRules => "at-rules.json",
        }
    }

    /// Human-readable label, singular
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Types => "type",
            Self::Properties => "property",
            Self::AtRules => "at-rule",
        }
    }
}

impl Display for SyntaxDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Types => "types",
            Self::Properties => "properties",
            Self::AtRules => "at-rules",
        };
        f.write_str(name)
    }
}

/// Where each document is written
///
/// File names are relative to `dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputPaths {
    /// Output directory
    pub dir: PathBuf,
    /// Types document file name
    pub types: PathBuf,
    /// Properties document file name
    pub properties: PathBuf,
    /// At-rules document file name
    pub at_rules: PathBuf,
}

impl OutputPaths {
    /// Default file names inside `dir`
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            types: PathBuf::from(SyntaxDocument::Types.file_name()),
            properties: PathBuf::from(SyntaxDocument::Properties.file_name()),
            at_rules: PathBuf::from(SyntaxDocument::AtRules.file_name()),
        }
    }

    /// Full path of a document
    #[must_use]
    pub fn path_of(&self, document: SyntaxDocument) -> PathBuf {
        let file = match document {
            SyntaxDocument::Types => &self.types,
            SyntaxDocument::Properties => &self.properties,
            SyntaxDocument::AtRules => &self.at_rules,
        };
        self.dir.join(file)
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::in_dir("syntax")
    }
}

/// Destination for generated documents
#[async_trait]
pub trait SyntaxSink: Send + Sync {
    /// Make the destination ready, e.g. create the output directory
    async fn prepare(&self) -> Result<(), SinkError>;

    /// Store a rendered document, replacing any previous version
    ///
    /// Returns the location the document was written to.
    async fn write(&self, document: SyntaxDocument, contents: &str) -> Result<PathBuf, SinkError>;
}

/// Filesystem sink
#[derive(Debug, Clone, Default)]
pub struct FsSink {
    paths: OutputPaths,
}

impl FsSink {
    /// Create sink for output paths
    #[inline]
    #[must_use]
    pub fn new(paths: OutputPaths) -> Self {
        Self { paths }
    }

    /// Output paths
    #[inline]
    #[must_use]
    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }
}

#[async_trait]
impl SyntaxSink for FsSink {
    async fn prepare(&self) -> Result<(), SinkError> {
        let dir = &self.paths.dir;
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| SinkError::create_dir_error(dir, e))?;
        tracing::debug!("Output directory ready: {}", dir.display());
        Ok(())
    }

    async fn write(&self, document: SyntaxDocument, contents: &str) -> Result<PathBuf, SinkError> {
        let path = self.paths.path_of(document);
        tokio::fs::write(&path, contents.as_bytes())
            .await
            .map_err(|e| SinkError::write_error(&path, e))?;
        Ok(path)
    }
}

/// Render a dictionary as a diffable JSON document
///
/// Two-space indentation, key order preserved, trailing newline.
///
/// # Errors
/// Returns `SinkError::Serialize` if the value cannot be represented as JSON.
pub fn render_document<T: Serialize + ?Sized>(value: &T) -> Result<String, SinkError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
