//! Hierarchy errors.

use thiserror::Error;

/// Errors raised while resolving legal label sets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("Verb subtype {lexcat} is not allowed for language {language}")]
    UnknownVerbSubtype { lexcat: String, language: String },
}

impl HierarchyError {
    pub fn unknown_verb_subtype(lexcat: impl Into<String>, language: impl Into<String>) -> Self {
        Self::UnknownVerbSubtype {
            lexcat: lexcat.into(),
            language: language.into(),
        }
    }
}

/// Result type for hierarchy operations.
pub type HierarchyResult<T> = Result<T, HierarchyError>;
