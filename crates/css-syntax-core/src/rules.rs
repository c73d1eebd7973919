//! Replacement rules
//!
//! A [`RuleSet`] is the single extensibility point of the engine: supporting
//! a new extensible CSS value kind means adding one rule.

use crate::error::RuleError;
use crate::grammar::{contains_placeholder, replace_placeholder};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// `<name>`: one placeholder, non-blank, no nested angle brackets
static TOKEN_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<[^<>]*[^<>\s][^<>]*>$").expect("token shape pattern is valid")
});

/// Substitute `token` with `replacement`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplacementRule {
    /// Placeholder to intercept, e.g. `<color>`
    pub token: String,
    /// Grammar fragment inserted in its place
    pub replacement: String,
}

impl ReplacementRule {
    /// Create new rule
    #[inline]
    #[must_use]
    pub fn new(token: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            replacement: replacement.into(),
        }
    }

    /// Check token shape and replacement
    ///
    /// # Errors
    /// - `RuleError::MalformedToken` if the token is not a single `<name>` placeholder
    /// - `RuleError::EmptyReplacement` if the replacement is empty
    pub fn validate(&self) -> Result<(), RuleError> {
        if !TOKEN_SHAPE.is_match(&self.token) {
            return Err(RuleError::malformed_token(&self.token));
        }
        if self.replacement.is_empty() {
            return Err(RuleError::EmptyReplacement {
                token: self.token.clone(),
            });
        }
        Ok(())
    }
}

/// Validated, ordered, non-empty set of replacement rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<ReplacementRule>,
}

impl RuleSet {
    /// Build a rule set, rejecting configuration errors up front
    ///
    /// # Errors
    /// - `RuleError::Empty` if `rules` is empty
    /// - `RuleError::MalformedToken` / `RuleError::EmptyReplacement` for an invalid rule
    /// - `RuleError::DuplicateToken` if two rules share a token
    pub fn new(rules: Vec<ReplacementRule>) -> Result<Self, RuleError> {
        if rules.is_empty() {
            return Err(RuleError::Empty);
        }

        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            rule.validate()?;
            if !seen.insert(rule.token.as_str()) {
                return Err(RuleError::DuplicateToken {
                    token: rule.token.clone(),
                });
            }
        }

        Ok(Self { rules })
    }

    /// Tailwind CSS rule set
    ///
    /// Redirects generic colors and lengths to custom types that the linter
    /// configuration defines alongside the generated dictionaries:
    /// `<tailwindcss-color>` = `<color> | <--alpha()>` and
    /// `<tailwindcss-length>` = `<length> | <--spacing()>`.
    #[must_use]
    pub fn tailwind() -> Self {
        Self {
            rules: vec![
                ReplacementRule::new("<color>", "<tailwindcss-color>"),
                ReplacementRule::new("<length>", "<tailwindcss-length>"),
            ],
        }
    }

    /// Rules in application order
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    /// Number of rules
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false; an empty rule set cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether `syntax` references any rule's token
    #[must_use]
    pub fn matches(&self, syntax: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| contains_placeholder(syntax, &rule.token))
    }

    /// Apply every rule, in order, over the accumulating string
    ///
    /// Text inserted by one rule is visible to the rules after it, never to
    /// the rule that inserted it.
    #[must_use]
    pub fn apply(&self, syntax: &str) -> String {
        self.rules.iter().fold(syntax.to_string(), |acc, rule| {
            replace_placeholder(&acc, &rule.token, &rule.replacement).into_owned()
        })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::tailwind()
    }
}

impl TryFrom<Vec<ReplacementRule>> for RuleSet {
    type Error = RuleError;

    fn try_from(rules: Vec<ReplacementRule>) -> Result<Self, Self::Error> {
        Self::new(rules)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a ReplacementRule;
    type IntoIter = std::slice::Iter<'a, ReplacementRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
