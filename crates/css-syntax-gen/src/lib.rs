//! CSS Syntax Generation
//!
//! The boundary between the filesystem and the pure upgrade engine in
//! `css-syntax-core`.
//!
//! # Core Operations
//!
//! - **Ingress**: load a grammar dataset into a [`SyntaxSource`](css_syntax_core::SyntaxSource)
//! - **Upgrade**: run the engine with a validated [`RuleSet`](css_syntax_core::RuleSet)
//! - **Egress**: render and persist the upgraded dictionaries through a [`SyntaxSink`]
//!
//! # Architecture
//!
//! ```text
//! dataset.json → load_source → SyntaxSource → SyntaxGenerator → SyntaxSink → syntax/*.json
//!                                                  ↑
//!                               GeneratorConfig → RuleSet
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use css_syntax_gen::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig::load("css-syntax.toml").await?;
//! let source = load_source(config.source_path()?).await?;
//!
//! let generator = SyntaxGenerator::new(config.rule_set()?, FsSink::new(config.output));
//! let report = generator.generate(&source).await?;
//! println!("{} definitions upgraded", report.total_entries());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod error;
pub mod generator;
pub mod sink;
pub mod source;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use error::{ConfigError, GenerateError, GenerateResult, SinkError, SourceError};
pub use generator::{DocumentReport, GenerationReport, SyntaxGenerator};
pub use sink::{render_document, FsSink, OutputPaths, SyntaxDocument, SyntaxSink};
pub use source::load_source;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for generating syntax documents
    pub use crate::config::GeneratorConfig;
    pub use crate::error::{ConfigError, GenerateError, SinkError, SourceError};
    pub use crate::generator::{GenerationReport, SyntaxGenerator};
    pub use crate::sink::{FsSink, OutputPaths, SyntaxDocument, SyntaxSink};
    pub use crate::source::load_source;
    pub use css_syntax_core::{ReplacementRule, RuleSet, SyntaxSource};
}
