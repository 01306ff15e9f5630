//! Identity types for token rows and MWE groups.
//!
//! Ordinary tokens are numbered 1..n. Two kinds of rows sit outside that
//! sequence:
//! - ellipsis tokens (`8.1`), which are kept but never grouped
//! - supertokens (`3-4`), which only carry the surface form of a contraction

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Identifier of a row within a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenNum {
    /// An ordinary token, 1-based.
    Word(u32),
    /// An empty node inserted after word `.0`, with sub-index `.1`.
    Ellipsis(u32, u32),
    /// A multiword surface token spanning words `.0` through `.1`.
    Range(u32, u32),
}

impl TokenNum {
    /// Get the word ordinal if this is an ordinary token.
    pub fn word(&self) -> Option<u32> {
        match self {
            TokenNum::Word(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if this is an ellipsis token.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, TokenNum::Ellipsis(..))
    }

    /// Returns true if this is a supertoken.
    pub fn is_range(&self) -> bool {
        matches!(self, TokenNum::Range(..))
    }
}

impl fmt::Display for TokenNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenNum::Word(n) => write!(f, "{}", n),
            TokenNum::Ellipsis(n, m) => write!(f, "{}.{}", n, m),
            TokenNum::Range(n, m) => write!(f, "{}-{}", n, m),
        }
    }
}

impl FromStr for TokenNum {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidTokenNum(s.to_string());
        let parse = |part: &str| part.parse::<u32>().map_err(|_| invalid());

        if let Some((left, right)) = s.split_once('.') {
            return Ok(TokenNum::Ellipsis(parse(left)?, parse(right)?));
        }
        if let Some((left, right)) = s.split_once('-') {
            return Ok(TokenNum::Range(parse(left)?, parse(right)?));
        }
        Ok(TokenNum::Word(parse(s)?))
    }
}

/// Strength of a multiword group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strength {
    /// Contiguous-by-marker lexical unit (`smwe` column).
    Strong,
    /// Looser association, possibly spanning strong units (`wmwe` column).
    Weak,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Strong => write!(f, "strong"),
            Strength::Weak => write!(f, "weak"),
        }
    }
}

/// A `group:position` marker on a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupMarker {
    /// Sentence-local group number.
    pub group: u32,
    /// 1-based position of the token within the group.
    pub position: u32,
}

impl GroupMarker {
    pub fn new(group: u32, position: u32) -> Self {
        Self { group, position }
    }

    /// Returns true if this token opens its group.
    pub fn is_initial(&self) -> bool {
        self.position == 1
    }
}

impl fmt::Display for GroupMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.position)
    }
}

impl FromStr for GroupMarker {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidGroupMarker(s.to_string());
        let (group, position) = s.split_once(':').ok_or_else(invalid)?;
        let group = group.parse::<u32>().map_err(|_| invalid())?;
        let position = position.parse::<u32>().map_err(|_| invalid())?;
        if position == 0 {
            return Err(invalid());
        }
        Ok(Self { group, position })
    }
}
