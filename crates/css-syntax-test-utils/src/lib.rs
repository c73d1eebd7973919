//! Testing utilities for the CSS syntax workspace
//!
//! Shared fixtures, sinks and rule sets.

#![allow(missing_docs)]

use async_trait::async_trait;
use css_syntax_core::{ReplacementRule, RuleSet, SyntaxSource};
use css_syntax_gen::{SinkError, SyntaxDocument, SyntaxSink};
use parking_lot::Mutex;
use std::path::PathBuf;

/// Small dataset in the css-tree `definition-syntax-data` shape
pub const SAMPLE_DATASET: &str = r#"{
    "types": {
        "shadow": "inset? && <length>{2,4} && <color>?",
        "line-width": "<length> | thin | medium | thick",
        "bg-size": "[ <length-percentage [0,∞]> | auto ]{1,2} | cover | contain",
        "hue": "<number> | <angle>"
    },
    "properties": {
        "color": "<color>",
        "width": "auto | <length> | <percentage>",
        "display": "block | inline",
        "border-top": "<line-width> || <line-style> || <color>"
    },
    "atrules": {
        "font-face": {
            "prelude": null,
            "descriptors": {
                "src": "<url> | <length>",
                "font-style": "normal | italic"
            }
        },
        "property": {
            "prelude": "<custom-property-name>",
            "descriptors": {
                "syntax": "<string>",
                "initial-value": "<color>"
            }
        },
        "media": {
            "prelude": "<media-query-list>",
            "descriptors": null
        }
    }
}"#;

pub fn sample_source() -> SyntaxSource {
    SyntaxSource::from_json_str(SAMPLE_DATASET).unwrap()
}

/// Rules that inline the alternative grammar instead of naming a custom type
pub fn inline_rules() -> RuleSet {
    RuleSet::new(vec![
        ReplacementRule::new("<color>", "[<color>|<--alpha()>]"),
        ReplacementRule::new("<length>", "[<length>|<--spacing()>]"),
    ])
    .unwrap()
}

/// Sink that keeps documents in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    prepared: Mutex<usize>,
    writes: Mutex<Vec<(SyntaxDocument, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare_calls(&self) -> usize {
        *self.prepared.lock()
    }

    pub fn writes(&self) -> Vec<(SyntaxDocument, String)> {
        self.writes.lock().clone()
    }

    /// Most recent contents of a document
    pub fn contents(&self, document: SyntaxDocument) -> Option<String> {
        self.writes
            .lock()
            .iter()
            .rev()
            .find(|(d, _)| *d == document)
            .map(|(_, c)| c.clone())
    }
}

#[async_trait]
impl SyntaxSink for MemorySink {
    async fn prepare(&self) -> Result<(), SinkError> {
        *self.prepared.lock() += 1;
        Ok(())
    }

    async fn write(&self, document: SyntaxDocument, contents: &str) -> Result<PathBuf, SinkError> {
        self.writes.lock().push((document, contents.to_string()));
        Ok(PathBuf::from("memory").join(document.file_name()))
    }
}

/// Sink whose write fails for one document
#[derive(Debug)]
pub struct FailingSink {
    pub fail_on: SyntaxDocument,
    pub inner: MemorySink,
}

impl FailingSink {
    pub fn new(fail_on: SyntaxDocument) -> Self {
        Self {
            fail_on,
            inner: MemorySink::new(),
        }
    }
}

#[async_trait]
impl SyntaxSink for FailingSink {
    async fn prepare(&self) -> Result<(), SinkError> {
        self.inner.prepare().await
    }

    async fn write(&self, document: SyntaxDocument, contents: &str) -> Result<PathBuf, SinkError> {
        if document == self.fail_on {
            return Err(SinkError::write_error(
                document.file_name(),
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ));
        }
        self.inner.write(document, contents).await
    }
}
