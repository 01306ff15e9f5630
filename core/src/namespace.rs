//! Supersense namespaces.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// One of the three supersense namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// `n.` labels.
    Noun,
    /// `v.` labels.
    Verb,
    /// `p.` labels (adpositional and possessive construals).
    Preposition,
}

impl Namespace {
    /// All namespaces, in column-letter order.
    pub const ALL: [Namespace; 3] = [Namespace::Noun, Namespace::Verb, Namespace::Preposition];

    /// The root segment (`n`, `v`, `p`).
    pub fn root(&self) -> &'static str {
        match self {
            Namespace::Noun => "n",
            Namespace::Verb => "v",
            Namespace::Preposition => "p",
        }
    }

    /// The label prefix (`n.`, `v.`, `p.`).
    pub fn prefix(&self) -> &'static str {
        match self {
            Namespace::Noun => "n.",
            Namespace::Verb => "v.",
            Namespace::Preposition => "p.",
        }
    }

    /// Classify a label by its prefix.
    pub fn of_label(label: &str) -> Option<Namespace> {
        Namespace::ALL
            .into_iter()
            .find(|ns| label.starts_with(ns.prefix()))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Noun => write!(f, "N"),
            Namespace::Verb => write!(f, "V"),
            Namespace::Preposition => write!(f, "P"),
        }
    }
}

impl FromStr for Namespace {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Namespace::Noun),
            "V" => Ok(Namespace::Verb),
            "P" => Ok(Namespace::Preposition),
            other => Err(CoreError::InvalidNamespace(other.to_string())),
        }
    }
}
