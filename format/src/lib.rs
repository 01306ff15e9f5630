//! conllulex Formats
//!
//! The collaborators around the engine:
//! - The 19-column row format reader and writer
//! - The per-token compact tag encoder (Lextagger)
//! - The bracketed MWE renderer (MweRenderer)
//! - The JSON output document, and reading it back
//! - Supersense relabeling for output (SupersenseMap)

mod error;
mod json;
mod lextag;
mod relabel;
mod render;
mod rows;

pub use error::{FormatError, FormatResult};
pub use json::{
    build_document, normalize_lextag, read_document, read_documents, write_documents, ExpressionRecord,
    JsonOptions, LexicalRecord, MorphRecord, SentenceDocument, StoreConllulex, TokenKey, TokenRecord,
    WeakExpressionRecord, BANNED_METADATA_KEYS,
};
pub use lextag::{Lextagger, StandardLextagger};
pub use relabel::SupersenseMap;
pub use render::{BracketRenderer, MweRenderer};
pub use rows::{parse_sentences, RowWriter, COLUMN_COUNT, REVIEW_MARK};
