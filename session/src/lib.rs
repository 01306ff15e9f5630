//! conllulex Session
//!
//! Orchestration over a whole corpus:
//! - Named enrichment subtasks that fill in sparse annotation (Subtask)
//! - Running a corpus's subtask sequence (Session::enrich)
//! - Validate-then-emit conversion to JSON documents (Session::convert)

pub mod enrich;
mod error;
mod options;
mod result;
mod session;
mod subtask;

pub use error::{SessionError, SessionResult};
pub use options::ConvertOptions;
pub use result::{Conversion, EnrichSummary};
pub use session::Session;
pub use subtask::Subtask;
