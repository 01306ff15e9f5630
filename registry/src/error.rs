//! Registry errors.

use thiserror::Error;

/// Errors raised when looking up configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown corpus: {0}")]
    UnknownCorpus(String),
}

impl RegistryError {
    pub fn unknown_language(code: impl Into<String>) -> Self {
        Self::UnknownLanguage(code.into())
    }

    pub fn unknown_corpus(name: impl Into<String>) -> Self {
        Self::UnknownCorpus(name.into())
    }
}

/// Result type for registry lookups.
pub type RegistryResult<T> = Result<T, RegistryError>;
