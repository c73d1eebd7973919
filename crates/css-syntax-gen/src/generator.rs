//! Syntax generation pipeline
//!
//! Runs one upgrade pass over a dataset snapshot and persists the three
//! resulting dictionaries, in order: types, properties, at-rules.
//!
//! # Workflow
//! 1. Prepare the sink (create the output directory)
//! 2. For each document: upgrade, render, write
//! 3. Report what was written
//!
//! The first sink failure aborts the remaining writes.

use crate::error::GenerateError;
use crate::sink::{render_document, SyntaxDocument, SyntaxSink};
use css_syntax_core::{upgrade_source, RuleSet, SyntaxSource};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of writing one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    /// Which document
    pub document: SyntaxDocument,
    /// Where it was written
    pub path: PathBuf,
    /// Upgraded entry names, in document order
    pub entries: Vec<String>,
}

/// Outcome of a full generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Per-document results in write order
    pub documents: Vec<DocumentReport>,
}

impl GenerationReport {
    /// Total upgraded entries across all documents
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.documents.iter().map(|d| d.entries.len()).sum()
    }

    /// Report for one document, if it was written
    #[must_use]
    pub fn document(&self, document: SyntaxDocument) -> Option<&DocumentReport> {
        self.documents.iter().find(|d| d.document == document)
    }

    /// Written paths in write order
    #[must_use]
    pub fn paths(&self) -> Vec<&PathBuf> {
        self.documents.iter().map(|d| &d.path).collect()
    }
}

/// Upgrades a dataset and hands the results to a sink
#[derive(Debug, Clone)]
pub struct SyntaxGenerator<S> {
    rules: RuleSet,
    sink: S,
}

impl<S: SyntaxSink> SyntaxGenerator<S> {
    /// Create generator
    #[inline]
    #[must_use]
    pub fn new(rules: RuleSet, sink: S) -> Self {
        Self { rules, sink }
    }

    /// Replacement rules in use
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Underlying sink
    #[inline]
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Upgrade `source` and persist types, properties and at-rules
    ///
    /// # Errors
    /// - `GenerateError::Sink` if the sink cannot be prepared or a write fails;
    ///   documents after the failing one are not written
    pub async fn generate(&self, source: &SyntaxSource) -> Result<GenerationReport, GenerateError> {
        for rule in &self.rules {
            tracing::debug!("Replacement: {} → {}", rule.token, rule.replacement);
        }

        self.sink.prepare().await?;

        let upgraded = upgrade_source(source, &self.rules);
        let mut report = GenerationReport::default();

        report.documents.push(
            self.persist(SyntaxDocument::Types, &upgraded.types, upgraded.types.keys())
                .await?,
        );
        report.documents.push(
            self.persist(
                SyntaxDocument::Properties,
                &upgraded.properties,
                upgraded.properties.keys(),
            )
            .await?,
        );
        report.documents.push(
            self.persist(
                SyntaxDocument::AtRules,
                &upgraded.at_rules,
                upgraded.at_rules.keys(),
            )
            .await?,
        );

        tracing::info!(
            "Generated {} upgraded definitions in {} documents",
            report.total_entries(),
            report.documents.len()
        );
        Ok(report)
    }

    async fn persist<'a, T: Serialize + ?Sized>(
        &self,
        document: SyntaxDocument,
        value: &T,
        names: impl Iterator<Item = &'a String>,
    ) -> Result<DocumentReport, GenerateError> {
        let entries: Vec<String> = names.cloned().collect();
        tracing::info!(
            "Generating upgraded {document}: found {} {} upgrade candidates",
            entries.len(),
            document.label()
        );
        tracing::debug!("{document} candidates: {}", entries.join(", "));

        let contents = render_document(value)?;
        let path = match self.sink.write(document, &contents).await {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("Failed to write upgraded {document}: {e}");
                return Err(e.into());
            }
        };

        tracing::info!("Generated upgraded {document}: {}", path.display());
        Ok(DocumentReport {
            document,
            path,
            entries,
        })
    }
}
