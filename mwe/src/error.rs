//! Grouping errors.

use conllulex_core::Strength;
use thiserror::Error;

/// Structural problems with MWE markers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// Positions sorted by token id are not exactly 1..k.
    #[error("{strength} group {group}: token {token} declares position {declared}, expected {expected}")]
    PositionOutOfOrder {
        strength: Strength,
        group: u32,
        token: u32,
        declared: u32,
        expected: u32,
    },

    /// A group with a single member.
    #[error("{strength} group {group} has only one member (token {token})")]
    Singleton {
        strength: Strength,
        group: u32,
        token: u32,
    },
}

impl GroupError {
    pub fn strength(&self) -> Strength {
        match self {
            GroupError::PositionOutOfOrder { strength, .. } | GroupError::Singleton { strength, .. } => {
                *strength
            }
        }
    }

    pub fn group(&self) -> u32 {
        match self {
            GroupError::PositionOutOfOrder { group, .. } | GroupError::Singleton { group, .. } => *group,
        }
    }

    pub fn token(&self) -> u32 {
        match self {
            GroupError::PositionOutOfOrder { token, .. } | GroupError::Singleton { token, .. } => *token,
        }
    }
}
