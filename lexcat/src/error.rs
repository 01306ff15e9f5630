//! Rule error types.

use thiserror::Error;

/// Result type for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors that can occur during lexcat inference.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Head chain from token {token} exceeds its group size ({limit})")]
    HeadChainExceeded { token: u32, limit: usize },

    #[error("Token {token} is labeled `$ but its fine tag ({xpos}) is not possessive")]
    PossessiveWithoutMarker { token: u32, xpos: String },

    #[error("Unknown rule: {name}")]
    UnknownRule { name: String },
}

impl RuleError {
    pub fn head_chain_exceeded(token: u32, limit: usize) -> Self {
        Self::HeadChainExceeded { token, limit }
    }

    pub fn possessive_without_marker(token: u32, xpos: Option<&str>) -> Self {
        Self::PossessiveWithoutMarker {
            token,
            xpos: xpos.unwrap_or("_").to_string(),
        }
    }

    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }

    /// The token the error is about, if any.
    pub fn token(&self) -> Option<u32> {
        match self {
            Self::HeadChainExceeded { token, .. } | Self::PossessiveWithoutMarker { token, .. } => {
                Some(*token)
            }
            Self::UnknownRule { .. } => None,
        }
    }
}
