//! conllulex Core Types
//!
//! This crate provides the foundational types shared by every conllulex
//! component:
//! - Row identifiers (TokenNum) and MWE group markers (GroupMarker)
//! - Lexical column slots that keep "placeholder" apart from "absent" (Slot)
//! - Token rows and sentences (Token, Sentence)
//! - Lexical expressions derived from token markers (Expression)
//! - Supersense namespaces (Namespace)
//! - Common error types

mod error;
mod expression;
mod id;
mod namespace;
mod sentence;
mod slot;
mod token;

pub use error::*;
pub use expression::*;
pub use id::*;
pub use namespace::*;
pub use sentence::*;
pub use slot::*;
pub use token::*;

/// The `_` placeholder used by the row format for empty columns.
pub const PLACEHOLDER: &str = "_";
