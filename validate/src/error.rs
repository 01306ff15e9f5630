//! Validation errors.
//!
//! Annotation problems are findings, not errors. These are the failures
//! that stop a run before any sentence is checked.

use conllulex_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidateError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result type for validator construction.
pub type ValidateResult<T> = Result<T, ValidateError>;
