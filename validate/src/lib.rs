//! conllulex Validate
//!
//! Cross-check annotated sentences against their language and corpus
//! configuration.
//!
//! Responsibilities:
//! - Check token numbering, heads, metadata keys and group markers
//! - Check lexlemma agreement and category vocabulary
//! - Check supersense legality per category, including label pairs
//! - Reconstruct lextags and the MWE rendering and compare them
//! - Check sentence ids across a corpus
//! - Collect every problem as a finding instead of stopping at the first

mod corpus;
mod error;
mod finding;
mod labels;
mod lexical;
mod options;
mod oracle;
mod structure;
mod validator;

pub use error::{ValidateError, ValidateResult};
pub use finding::{Finding, FindingKind, Findings, Severity, Subject};
pub use lexical::lexlemma_possibilities;
pub use options::ValidationOptions;
pub use validator::Validator;
