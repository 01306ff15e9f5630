//! Expectations and builders for verifying scenario outcomes.

use conllulex_validate::FindingKind;

use crate::error::{TestError, TestResult};
use crate::scenario::Outcome;

/// Everything a scenario expects of its outcome. Unset fields are not
/// checked.
#[derive(Default)]
pub struct Expectation {
    // Conversion
    pub written: Option<bool>,
    pub errors: Option<usize>,
    pub warnings: Option<usize>,
    pub kinds: Vec<(FindingKind, usize)>,
    pub findings: Vec<String>,
    pub absent: Vec<String>,

    // Enrichment
    pub needs_review: Option<usize>,
    pub compound_groups: Option<usize>,

    // Sentences after the run: (sent_id, key, value)
    pub metadata: Vec<(String, String, String)>,

    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&Outcome) -> bool + Send + Sync>>,
}

impl std::fmt::Debug for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Expectation")
            .field("written", &self.written)
            .field("errors", &self.errors)
            .field("warnings", &self.warnings)
            .field("kinds", &self.kinds)
            .field("findings", &self.findings)
            .field("absent", &self.absent)
            .field("needs_review", &self.needs_review)
            .field("compound_groups", &self.compound_groups)
            .field("metadata", &self.metadata)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

fn check_count(scenario: &str, what: &str, expected: Option<usize>, actual: usize) -> TestResult<()> {
    match expected {
        Some(n) if n != actual => Err(TestError::expectation_failed(
            scenario,
            format!("expected {} {}, got {}", n, what, actual),
        )),
        _ => Ok(()),
    }
}

impl Expectation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the expectation against an outcome.
    pub fn verify(&self, scenario: &str, outcome: &Outcome) -> TestResult<()> {
        let conversion = &outcome.conversion;
        let report = || {
            conversion
                .findings
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        };

        if let Some(written) = self.written {
            if written != conversion.is_written() {
                return Err(TestError::expectation_failed(
                    scenario,
                    format!(
                        "expected output {}written, findings:\n{}",
                        if written { "" } else { "not " },
                        report()
                    ),
                ));
            }
        }

        check_count(scenario, "errors", self.errors, conversion.error_count())?;
        check_count(scenario, "warnings", self.warnings, conversion.warning_count())?;
        for (kind, n) in &self.kinds {
            let actual = conversion.findings.of_kind(*kind).count();
            check_count(scenario, &format!("{} findings", kind), Some(*n), actual)?;
        }

        for text in &self.findings {
            if !conversion.findings.iter().any(|f| f.explanation.contains(text.as_str())) {
                return Err(TestError::expectation_failed(
                    scenario,
                    format!("expected a finding containing '{}', got:\n{}", text, report()),
                ));
            }
        }
        for text in &self.absent {
            if let Some(f) = conversion.findings.iter().find(|f| f.explanation.contains(text.as_str())) {
                return Err(TestError::expectation_failed(
                    scenario,
                    format!("unexpected finding: {}", f),
                ));
            }
        }

        if let Some(summary) = &outcome.summary {
            check_count(scenario, "tokens needing review", self.needs_review, summary.needs_review)?;
            check_count(scenario, "compound groups", self.compound_groups, summary.compound_groups)?;
        } else if self.needs_review.is_some() || self.compound_groups.is_some() {
            return Err(TestError::expectation_failed(
                scenario,
                "enrichment expectations set but the scenario does not enrich",
            ));
        }

        for (sent_id, key, value) in &self.metadata {
            let actual = outcome
                .sentences
                .iter()
                .find(|s| s.sent_id() == sent_id)
                .and_then(|s| s.meta(key));
            if actual != Some(value.as_str()) {
                return Err(TestError::expectation_failed(
                    scenario,
                    format!("expected {} '{}' in {}, got {:?}", key, value, sent_id, actual),
                ));
            }
        }

        if let Some(ref custom) = self.custom {
            if !custom(outcome) {
                return Err(TestError::expectation_failed(scenario, "custom expectation failed"));
            }
        }

        Ok(())
    }
}

/// Builder for fluent expectation construction.
pub struct ExpectationBuilder {
    expectation: Expectation,
}

impl Default for ExpectationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpectationBuilder {
    pub fn new() -> Self {
        Self {
            expectation: Expectation::new(),
        }
    }

    pub fn build(self) -> Expectation {
        self.expectation
    }

    // ========== Conversion ==========

    /// Expect JSON output to have been produced.
    pub fn written(mut self) -> Self {
        self.expectation.written = Some(true);
        self
    }

    /// Expect findings to have kept output from being produced.
    pub fn blocked(mut self) -> Self {
        self.expectation.written = Some(false);
        self
    }

    pub fn errors(mut self, n: usize) -> Self {
        self.expectation.errors = Some(n);
        self
    }

    pub fn warnings(mut self, n: usize) -> Self {
        self.expectation.warnings = Some(n);
        self
    }

    /// Expect no findings at all, and output.
    pub fn clean(self) -> Self {
        self.written().errors(0).warnings(0)
    }

    /// Expect exactly `n` findings of a kind.
    pub fn kind(mut self, kind: FindingKind, n: usize) -> Self {
        self.expectation.kinds.push((kind, n));
        self
    }

    /// Expect some finding whose explanation contains `text`.
    pub fn finding(mut self, text: &str) -> Self {
        self.expectation.findings.push(text.to_string());
        self
    }

    /// Expect no finding whose explanation contains `text`.
    pub fn no_finding(mut self, text: &str) -> Self {
        self.expectation.absent.push(text.to_string());
        self
    }

    // ========== Enrichment ==========

    pub fn needs_review(mut self, n: usize) -> Self {
        self.expectation.needs_review = Some(n);
        self
    }

    pub fn compound_groups(mut self, n: usize) -> Self {
        self.expectation.compound_groups = Some(n);
        self
    }

    // ========== Sentences ==========

    /// Expect a metadatum on the sentence with the given id.
    pub fn meta(mut self, sent_id: &str, key: &str, value: &str) -> Self {
        self.expectation
            .metadata
            .push((sent_id.to_string(), key.to_string(), value.to_string()));
        self
    }

    /// Custom check over the whole outcome.
    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: Fn(&Outcome) -> bool + Send + Sync + 'static,
    {
        self.expectation.custom = Some(Box::new(f));
        self
    }
}
