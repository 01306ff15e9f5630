//! conllulex Registry
//!
//! The registry provides the immutable rule tables every other component is
//! parameterized by:
//! - Per-language configuration (LanguageConfig) and its builder
//! - Per-corpus configuration (CorpusConfig)
//! - The context record exception predicates are evaluated against

mod builder;
mod corpus;
mod error;
mod language;
mod tables;

pub use builder::LanguageConfigBuilder;
pub use corpus::{CorpusConfig, LexcatOverride, SentIdScheme};
pub use error::{RegistryError, RegistryResult};
pub use language::{ExceptionCheck, LanguageConfig, LemmaTransform, MismatchContext};

/// Language codes with built-in configuration.
pub const LANGUAGES: &[&str] = &["en", "hi", "zh", "la"];

/// Corpus names with built-in configuration.
pub const CORPORA: &[&str] = &["streusle", "pastrie", "prince_en", "prince_zh", "prince_hi"];
