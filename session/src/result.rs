//! Session result types.

use conllulex_validate::Findings;

use crate::Subtask;

/// What an enrichment run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    /// Number of sentences processed.
    pub sentences: usize,
    /// Subtasks run, in order.
    pub subtasks: Vec<Subtask>,
    /// Strong groups created for particle verbs.
    pub compound_groups: usize,
    /// Sentence ids assigned.
    pub assigned_ids: usize,
    /// Tokens whose category was copied from the UPOS and needs review.
    pub needs_review: usize,
    /// Sentences a subtask could not handle. They are left as they were.
    pub findings: Findings,
}

/// Result of a conversion: every finding, and the JSON text when it was
/// produced.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub findings: Findings,
    pub output: Option<String>,
}

impl Conversion {
    /// Whether output was produced.
    pub fn is_written(&self) -> bool {
        self.output.is_some()
    }

    pub fn error_count(&self) -> usize {
        self.findings.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings.warnings().count()
    }
}
