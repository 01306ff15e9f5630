//! conllulex integration test framework.
//!
//! A scenario names a corpus and an input (a fixture file or in-memory
//! sentences), optionally enriches it, converts it, and checks the outcome
//! against a fluent expectation.
//!
//! ```ignore
//! Scenario::new("sparse_poems")
//!     .corpus("pastrie")
//!     .fixture("pastrie_sparse.conllulex")
//!     .enrich()
//!     .expect(|e| e.clean().needs_review(5))
//!     .run()
//!     .unwrap();
//! ```

mod error;
mod expectation;
mod fixture;
mod scenario;

pub use error::{TestError, TestResult};
pub use expectation::{Expectation, ExpectationBuilder};
pub use fixture::{fixture_path, fixtures_dir, load_fixture, load_text};
pub use scenario::{Outcome, Scenario};

pub mod prelude {
    pub use crate::{fixture_path, load_fixture, load_text, Outcome, Scenario};
    pub use conllulex_core::{Sentence, Slot, Strength, Token};
    pub use conllulex_session::{ConvertOptions, Subtask};
    pub use conllulex_validate::{FindingKind, ValidationOptions};
}
