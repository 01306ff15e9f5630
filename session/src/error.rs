//! Session error types.

use thiserror::Error;

/// Fatal errors. Validation problems are findings, not errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Configuration lookup failed.
    #[error("configuration error: {0}")]
    Registry(#[from] conllulex_registry::RegistryError),

    /// Rows could not be read or documents could not be written.
    #[error("format error: {0}")]
    Format(#[from] conllulex_format::FormatError),

    /// The validator could not be built.
    #[error("validation setup error: {0}")]
    Validate(#[from] conllulex_validate::ValidateError),

    /// A subtask name no enrichment step answers to.
    #[error("Unknown enrichment subtask: {name}")]
    UnknownSubtask { name: String },
}

impl SessionError {
    pub fn unknown_subtask(name: impl Into<String>) -> Self {
        Self::UnknownSubtask { name: name.into() }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
