//! Error types for the upgrade engine
//!
//! The engine itself is infallible over grammar strings: every string is
//! valid input. The only failures are configuration errors raised while
//! building a [`RuleSet`](crate::RuleSet), before any mapping is processed.

/// Errors raised when a replacement rule set is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Rule set contains no rules
    #[error("replacement rule set is empty")]
    Empty,

    /// Token is not a single `<name>` placeholder
    #[error("malformed token '{token}': expected a single '<name>' placeholder")]
    MalformedToken { token: String },

    /// Replacement fragment is empty
    #[error("empty replacement for token '{token}'")]
    EmptyReplacement { token: String },

    /// Same token appears in more than one rule
    #[error("duplicate token '{token}' in replacement rule set")]
    DuplicateToken { token: String },
}

impl RuleError {
    /// Create malformed token error
    pub fn malformed_token(token: impl Into<String>) -> Self {
        Self::MalformedToken {
            token: token.into(),
        }
    }

    /// Token the error refers to, if any
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::MalformedToken { token }
            | Self::EmptyReplacement { token }
            | Self::DuplicateToken { token } => Some(token),
        }
    }
}
