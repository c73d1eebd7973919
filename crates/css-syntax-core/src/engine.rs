//! Upgrade engine
//!
//! Pure transformations over borrowed dictionaries. Each pass allocates fresh
//! output mappings; inputs are never modified.
//!
//! # Selection
//! A definition is a candidate iff its original grammar references at least
//! one rule's token. Candidacy is decided before any rewriting, so the order
//! of rules cannot change which definitions are emitted.
//!
//! # Filtering
//! Only candidates appear in the output. Untouched definitions are dropped,
//! not passed through.

use crate::model::{AtRuleEntry, AtRuleMapping, GrammarMapping, SyntaxSource, UpgradedSyntax};
use crate::rules::RuleSet;

/// Upgrade a flat identifier → grammar mapping
///
/// Returns exactly the candidate entries, each fully rewritten, in the order
/// they appear in `source`.
#[must_use]
pub fn upgrade_mapping(source: &GrammarMapping, rules: &RuleSet) -> GrammarMapping {
    source
        .iter()
        .filter(|(_, syntax)| rules.matches(syntax))
        .map(|(name, syntax)| (name.clone(), rules.apply(syntax)))
        .collect()
}

/// Upgrade at-rule descriptor grammars
///
/// An at-rule is a candidate iff one of its descriptors is; at-rules without
/// descriptors never are. Each emitted entry is the whole source entry with
/// the upgraded descriptors overlaid on the originals, so unmatched
/// descriptors and the prelude carry over unchanged.
#[must_use]
pub fn upgrade_at_rules(source: &AtRuleMapping, rules: &RuleSet) -> AtRuleMapping {
    source
        .iter()
        .filter_map(|(name, entry)| {
            let descriptors = entry.descriptors.as_ref()?;
            let upgraded = upgrade_mapping(descriptors, rules);
            if upgraded.is_empty() {
                return None;
            }

            let mut merged = descriptors.clone();
            merged.extend(upgraded);

            Some((
                name.clone(),
                AtRuleEntry {
                    descriptors: Some(merged),
                    ..entry.clone()
                },
            ))
        })
        .collect()
}

/// Run one full upgrade pass over a dataset snapshot
#[must_use]
pub fn upgrade_source(source: &SyntaxSource, rules: &RuleSet) -> UpgradedSyntax {
    UpgradedSyntax {
        types: upgrade_mapping(&source.types, rules),
        properties: upgrade_mapping(&source.properties, rules),
        at_rules: upgrade_at_rules(&source.atrules, rules),
    }
}
