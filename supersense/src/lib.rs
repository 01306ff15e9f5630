//! conllulex Supersense Hierarchy
//!
//! This crate owns the supersense label inventory:
//! - The noun, verb and preposition namespaces (the latter a tree)
//! - Ancestor resolution over dotted labels (Hierarchy)
//! - Shorthand codes and the unresolved marker
//! - The per-category legal label set resolver

mod error;
mod hierarchy;
mod labels;
mod legal;
mod shorthand;

pub use error::{HierarchyError, HierarchyResult};
pub use hierarchy::Hierarchy;
pub use labels::{NOUN_SUPERSENSES, PREPOSITION_TREE, VERB_SUPERSENSES};
pub use legal::{legal_labels, LegalLabels};
pub use shorthand::*;
