//! Format errors.

use conllulex_core::CoreError;
use thiserror::Error;

/// Errors raised while reading or writing corpus files.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("line {line}: expected 19 columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: {source}")]
    Field {
        line: usize,
        #[source]
        source: CoreError,
    },

    #[error("line {line}: sentence has metadata but no tokens")]
    EmptySentence { line: usize },

    #[error("Unknown conllulex storage mode: {0} (expected none, full or toks)")]
    UnknownStoreMode(String),

    #[error("Invalid pattern: {0}")]
    Pattern(String),

    #[error("document {sent_id}: {source}")]
    Document {
        sent_id: String,
        #[source]
        source: CoreError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormatError {
    pub fn field(line: usize, source: CoreError) -> Self {
        Self::Field { line, source }
    }

    pub fn document(sent_id: impl Into<String>, source: CoreError) -> Self {
        Self::Document {
            sent_id: sent_id.into(),
            source,
        }
    }
}

/// Result type for format operations.
pub type FormatResult<T> = Result<T, FormatError>;
