//! Named enrichment steps.

use std::fmt;
use std::str::FromStr;

use crate::{SessionError, SessionResult};

/// One enrichment step, addressed by its snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subtask {
    /// Drop a secondary `??` that repeats the primary.
    DedupeQuestionMarks,
    /// Turn unattached `compound:prt` dependents into strong groups.
    MakeCompoundPrtsSmwes,
    /// Render the `mwe` metadatum where it is missing.
    AddMweMetadatum,
    AddLexlemma,
    AddWlemma,
    /// Prefix bare labels with `p.`.
    PrefixPrepositionalSupersenses,
    CapitalizeSupersenses,
    /// Give every sentence without an id one derived from its document.
    AssignSentId,
    /// Run the lexcat cascade and clear shorthand codes.
    AddLexcat,
    AddLextag,
    /// Put group ids in canonical order.
    RenumberMwes,
}

impl Subtask {
    pub const ALL: [Subtask; 11] = [
        Subtask::DedupeQuestionMarks,
        Subtask::MakeCompoundPrtsSmwes,
        Subtask::AddMweMetadatum,
        Subtask::AddLexlemma,
        Subtask::AddWlemma,
        Subtask::PrefixPrepositionalSupersenses,
        Subtask::CapitalizeSupersenses,
        Subtask::AssignSentId,
        Subtask::AddLexcat,
        Subtask::AddLextag,
        Subtask::RenumberMwes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Subtask::DedupeQuestionMarks => "dedupe_question_marks",
            Subtask::MakeCompoundPrtsSmwes => "make_compound_prts_smwes",
            Subtask::AddMweMetadatum => "add_mwe_metadatum",
            Subtask::AddLexlemma => "add_lexlemma",
            Subtask::AddWlemma => "add_wlemma",
            Subtask::PrefixPrepositionalSupersenses => "prefix_prepositional_supersenses",
            Subtask::CapitalizeSupersenses => "capitalize_supersenses",
            Subtask::AssignSentId => "assign_sent_id",
            Subtask::AddLexcat => "add_lexcat",
            Subtask::AddLextag => "add_lextag",
            Subtask::RenumberMwes => "renumber_mwes",
        }
    }

    /// Parse a comma-separated list. Blank entries are ignored; an unknown
    /// name fails the whole list.
    pub fn parse_list(list: &str) -> SessionResult<Vec<Subtask>> {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::parse)
            .collect()
    }

    /// Parse names from configuration.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> SessionResult<Vec<Subtask>> {
        names.iter().map(|name| name.as_ref().parse()).collect()
    }
}

impl FromStr for Subtask {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subtask::ALL
            .into_iter()
            .find(|subtask| subtask.name() == s)
            .ok_or_else(|| SessionError::unknown_subtask(s))
    }
}

impl fmt::Display for Subtask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
