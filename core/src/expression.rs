//! Lexical expressions derived from token markers.

use std::fmt;

use crate::Slot;

/// The three kinds of lexical expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    /// Exactly one token.
    Single,
    /// Two or more tokens joined by a strong marker.
    Strong,
    /// Two or more tokens joined by a weak marker.
    Weak,
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionKind::Single => write!(f, "SWE"),
            ExpressionKind::Strong => write!(f, "SMWE"),
            ExpressionKind::Weak => write!(f, "WMWE"),
        }
    }
}

/// A lexical expression. The annotation fields come from the expression's
/// first token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub kind: ExpressionKind,
    /// Member token ordinals, ascending.
    pub toknums: Vec<u32>,
    pub lexlemma: Slot,
    pub lexcat: Slot,
    /// Carried over from the first token's needs-review flag.
    pub lexcat_review: bool,
    /// Always `None` for weak expressions.
    pub ss: Option<String>,
    /// Always `None` for weak expressions.
    pub ss2: Option<String>,
}

impl Expression {
    pub fn new(kind: ExpressionKind, toknums: Vec<u32>) -> Self {
        Self {
            kind,
            toknums,
            lexlemma: Slot::Absent,
            lexcat: Slot::Absent,
            lexcat_review: false,
            ss: None,
            ss2: None,
        }
    }

    /// The first member token.
    pub fn first(&self) -> Option<u32> {
        self.toknums.first().copied()
    }

    pub fn is_multiword(&self) -> bool {
        !matches!(self.kind, ExpressionKind::Single)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} lexlemma={} lexcat={} ss={} ss2={}",
            self.kind,
            self.toknums,
            self.lexlemma,
            self.lexcat,
            self.ss.as_deref().unwrap_or("_"),
            self.ss2.as_deref().unwrap_or("_"),
        )
    }
}
