//! Inference results.

use conllulex_core::{Slot, Token};

/// The category a cascade assigns to a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inference {
    /// Non-initial member of a strong group: the placeholder.
    Blank,
    /// A category a rule derived.
    Confirmed(String),
    /// The part of speech copied verbatim; needs a human look.
    NeedsReview(String),
}

impl Inference {
    pub fn confirmed(lexcat: impl Into<String>) -> Self {
        Self::Confirmed(lexcat.into())
    }

    pub fn needs_review(lexcat: impl Into<String>) -> Self {
        Self::NeedsReview(lexcat.into())
    }

    /// The category, if any.
    pub fn lexcat(&self) -> Option<&str> {
        match self {
            Inference::Blank => None,
            Inference::Confirmed(c) | Inference::NeedsReview(c) => Some(c),
        }
    }

    pub fn needs_review_flag(&self) -> bool {
        matches!(self, Inference::NeedsReview(_))
    }

    /// Write the result into a token's lexcat column.
    pub fn apply(&self, token: &mut Token) {
        token.lexcat = match self.lexcat() {
            Some(c) => Slot::value(c),
            None => Slot::Blank,
        };
        token.lexcat_review = self.needs_review_flag();
    }
}
