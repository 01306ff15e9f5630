//! Common error types for conllulex.

use thiserror::Error;

/// Errors raised while decoding core identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A row id that is neither `N`, `N.M` nor `N-M`.
    #[error("Invalid token id: {0}")]
    InvalidTokenNum(String),

    /// A group marker that is not `group:position`.
    #[error("Invalid MWE marker: {0}")]
    InvalidGroupMarker(String),

    /// A head column that is not a non-negative integer.
    #[error("Invalid head: {0}")]
    InvalidHead(String),

    /// A namespace letter other than `N`, `V` or `P`.
    #[error("Invalid supersense namespace: {0}")]
    InvalidNamespace(String),
}

/// Result type for core decoding.
pub type CoreResult<T> = Result<T, CoreError>;
