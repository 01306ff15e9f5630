//! conllulex MWE Grouping
//!
//! This crate builds and rewrites multiword-expression structure:
//! - Two-pass group construction from `group:position` markers (Groups)
//! - Position and size checks (GroupError)
//! - Canonical renumbering (renumber)
//! - Strong groups for unattached particle verbs (attach_compound_particles)
//! - Lexical expression sets derived from the groups (Expressions)

mod compound;
mod error;
mod expressions;
mod groups;
mod renumber;

pub use compound::{attach_compound_particles, COMPOUND_PARTICLE};
pub use error::GroupError;
pub use expressions::Expressions;
pub use groups::{Groups, Member};
pub use renumber::{canonical_order, renumber};
