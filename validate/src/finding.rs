//! Validation findings.

use std::fmt;

use conllulex_core::{Expression, TokenNum};

/// What a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FindingKind {
    /// Numbering, heads, metadata keys, group markers, column placement.
    Structural,
    /// Lexlemma disagrees with the member lemmas.
    LexicalAgreement,
    /// Category missing, outside the vocabulary or incompatible with POS.
    Category,
    /// Label outside the legal set, illegal pair, banned secondary.
    Supersense,
    /// Recorded lextag differs from the reconstructed one.
    TagConsistency,
    /// Recorded `mwe` metadatum differs from the reconstructed one.
    RenderMismatch,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FindingKind::Structural => "structural",
            FindingKind::LexicalAgreement => "lexical agreement",
            FindingKind::Category => "category",
            FindingKind::Supersense => "supersense",
            FindingKind::TagConsistency => "tag consistency",
            FindingKind::RenderMismatch => "render mismatch",
        };
        f.write_str(name)
    }
}

/// Whether a finding blocks output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// The offending part of a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Sentence,
    Token(TokenNum),
    Expression(Expression),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Sentence => write!(f, "sentence"),
            Subject::Token(num) => write!(f, "token {}", num),
            Subject::Expression(e) => write!(f, "{}", e),
        }
    }
}

/// One problem found in one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub sentence_id: String,
    pub kind: FindingKind,
    pub severity: Severity,
    pub explanation: String,
    pub subject: Subject,
}

impl Finding {
    pub fn new(
        sentence_id: impl Into<String>,
        kind: FindingKind,
        severity: Severity,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            sentence_id: sentence_id.into(),
            kind,
            severity,
            explanation: explanation.into(),
            subject: Subject::Sentence,
        }
    }

    /// Create an error-level finding.
    pub fn error(sentence_id: impl Into<String>, kind: FindingKind, explanation: impl Into<String>) -> Self {
        Self::new(sentence_id, kind, Severity::Error, explanation)
    }

    /// Create a warning-level finding.
    pub fn warning(sentence_id: impl Into<String>, kind: FindingKind, explanation: impl Into<String>) -> Self {
        Self::new(sentence_id, kind, Severity::Warning, explanation)
    }

    pub fn with_token(mut self, num: TokenNum) -> Self {
        self.subject = Subject::Token(num);
        self
    }

    pub fn with_expression(mut self, expression: &Expression) -> Self {
        self.subject = Subject::Expression(expression.clone());
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:  {}", self.sentence_id, self.explanation)?;
        if self.subject != Subject::Sentence {
            write!(f, "  ({})", self.subject)?;
        }
        Ok(())
    }
}

/// Collection of findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    findings: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    pub fn all(&self) -> &[Finding] {
        &self.findings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.findings.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_warning())
    }

    pub fn of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn merge(&mut self, other: Findings) {
        self.findings.extend(other.findings);
    }

    /// Stable sort by explanation, then sentence id.
    pub fn sort(&mut self) {
        self.findings.sort_by(|a, b| {
            a.explanation
                .cmp(&b.explanation)
                .then_with(|| a.sentence_id.cmp(&b.sentence_id))
        });
    }
}

impl Extend<Finding> for Findings {
    fn extend<I: IntoIterator<Item = Finding>>(&mut self, iter: I) {
        self.findings.extend(iter);
    }
}

impl IntoIterator for Findings {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_iter()
    }
}

impl<'a> IntoIterator for &'a Findings {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}
