//! Grammar dictionaries
//!
//! Mirrors the css-tree `definition-syntax-data` layout:
//! - `types`: value-type name → grammar string
//! - `properties`: property name → grammar string
//! - `atrules`: at-rule name → prelude grammar plus descriptor grammars

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier → grammar string, in dataset order
pub type GrammarMapping = IndexMap<String, String>;

/// At-rule name → at-rule grammar record
pub type AtRuleMapping = IndexMap<String, AtRuleEntry>;

/// Grammar record for a single at-rule (e.g. `font-face`)
///
/// Fields other than `prelude` and `descriptors` are kept verbatim in
/// [`extra`](Self::extra) so an upgraded entry can be emitted whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtRuleEntry {
    /// Prelude grammar, `null` when the at-rule takes no prelude
    #[serde(default)]
    pub prelude: Option<String>,

    /// Descriptor name → grammar string, `null` when the at-rule has none
    #[serde(default)]
    pub descriptors: Option<GrammarMapping>,

    /// Any further dataset fields
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl AtRuleEntry {
    /// Create entry with a prelude and no descriptors
    #[inline]
    #[must_use]
    pub fn with_prelude(prelude: impl Into<String>) -> Self {
        Self {
            prelude: Some(prelude.into()),
            ..Self::default()
        }
    }

    /// Create entry from descriptors only
    #[inline]
    #[must_use]
    pub fn with_descriptors(descriptors: GrammarMapping) -> Self {
        Self {
            descriptors: Some(descriptors),
            ..Self::default()
        }
    }
}

/// Snapshot of the baseline grammar dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntaxSource {
    /// Value-type grammars
    #[serde(default)]
    pub types: GrammarMapping,

    /// Property grammars
    #[serde(default)]
    pub properties: GrammarMapping,

    /// At-rule grammars
    #[serde(default)]
    pub atrules: AtRuleMapping,
}

impl SyntaxSource {
    /// Parse a dataset from JSON text
    ///
    /// # Errors
    /// Returns the `serde_json` error if the text is not a dataset document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total number of definitions across all three sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len() + self.properties.len() + self.atrules.len()
    }

    /// Whether the dataset holds no definitions at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The three upgraded dictionaries produced by one upgrade pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpgradedSyntax {
    /// Upgraded value types
    pub types: GrammarMapping,
    /// Upgraded properties
    pub properties: GrammarMapping,
    /// Upgraded at-rules
    pub at_rules: AtRuleMapping,
}
