//! conllulex Lexcat
//!
//! Infer the lexical category of every expression.
//!
//! Responsibilities:
//! - Bundle a token's inference context (LexcatContext)
//! - Evaluate an ordered list of named rules, first match wins (Cascade)
//! - Walk MWE-internal head chains without unbounded recursion
//! - Keep fallback categories apart from confirmed ones (Inference)

mod cascade;
mod context;
mod error;
mod inference;
mod rules;

pub use cascade::{Cascade, Rule, RuleFn};
pub use context::LexcatContext;
pub use error::{RuleError, RuleResult};
pub use inference::Inference;
pub use rules::{
    DETERMINER_IDIOMS, INFINITIVE_LEMMA, PRONOUN_IDIOMS, RULE_CORPUS_OVERRIDE, RULE_FALLBACK,
    RULE_GROUP_INTERNAL, RULE_NON_INITIAL, RULE_POS_DEFAULT, RULE_PREPOSITIONAL, RULE_SHORTHAND,
};
