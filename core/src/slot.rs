//! Lexical column slots.

use std::fmt;

use crate::PLACEHOLDER;

/// The content of a lexical column (`lexcat`, `lexlemma`, `wcat`, `wlemma`,
/// `lextag`).
///
/// The row format writes both `Absent` and `Blank` as `_`. In memory they
/// differ: `Blank` is the placeholder a non-initial group member must carry,
/// `Absent` is a value that has not been supplied where one may be needed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    /// Nothing has been supplied.
    #[default]
    Absent,
    /// Explicitly empty placeholder.
    Blank,
    /// A concrete value.
    Value(String),
}

impl Slot {
    pub fn value(value: impl Into<String>) -> Self {
        Slot::Value(value.into())
    }

    /// Decode a raw column. `_` becomes `Blank` when `blank_expected` is set
    /// (non-initial members), `Absent` otherwise.
    pub fn from_column(raw: &str, blank_expected: bool) -> Self {
        if raw == PLACEHOLDER {
            if blank_expected {
                Slot::Blank
            } else {
                Slot::Absent
            }
        } else {
            Slot::Value(raw.to_string())
        }
    }

    /// Get the concrete value, if any.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Slot::Value(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Slot::Value(_))
    }

    /// Column text for the row format.
    pub fn as_column(&self) -> &str {
        self.as_value().unwrap_or(PLACEHOLDER)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_column())
    }
}
