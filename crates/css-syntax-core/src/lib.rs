//! CSS Syntax Core
//!
//! Upgrades dictionaries of CSS value-syntax definitions by substituting
//! selected grammar placeholders with broader grammar fragments.
//!
//! # Core Operations
//!
//! - **Select**: find definitions that reference a token slated for replacement
//! - **Rewrite**: substitute every occurrence of every rule's token, in rule order
//! - **Filter**: emit only the definitions that actually changed
//!
//! # Architecture
//!
//! ```text
//! SyntaxSource ─┬─ types ──────► upgrade_mapping ──┐
//!               ├─ properties ─► upgrade_mapping ──┼─► UpgradedSyntax
//!               └─ atrules ────► upgrade_at_rules ─┘
//!                                   ↑
//!                                RuleSet
//! ```
//!
//! # Example
//!
//! ```rust
//! use css_syntax_core::{upgrade_mapping, GrammarMapping, RuleSet};
//!
//! let mut types = GrammarMapping::new();
//! types.insert("shadow".into(), "<color> && <length>{2,3}".into());
//! types.insert("display".into(), "block | inline".into());
//!
//! let upgraded = upgrade_mapping(&types, &RuleSet::tailwind());
//! assert_eq!(upgraded.len(), 1);
//! assert_eq!(upgraded["shadow"], "<tailwindcss-color> && <tailwindcss-length>{2,3}");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod engine;
pub mod error;
pub mod grammar;
pub mod model;
pub mod rules;

// Re-exports for convenience
pub use engine::{upgrade_at_rules, upgrade_mapping, upgrade_source};
pub use error::RuleError;
pub use grammar::GrammarToken;
pub use model::{AtRuleEntry, AtRuleMapping, GrammarMapping, SyntaxSource, UpgradedSyntax};
pub use rules::{ReplacementRule, RuleSet};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the upgrade engine
    pub use crate::engine::{upgrade_at_rules, upgrade_mapping, upgrade_source};
    pub use crate::error::RuleError;
    pub use crate::model::{AtRuleEntry, AtRuleMapping, GrammarMapping, SyntaxSource, UpgradedSyntax};
    pub use crate::rules::{ReplacementRule, RuleSet};
}
