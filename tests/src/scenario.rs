//! Scenario definition and runner.

use conllulex_core::Sentence;
use conllulex_session::{Conversion, ConvertOptions, EnrichSummary, Session, Subtask};

use crate::error::{TestError, TestResult};
use crate::expectation::{Expectation, ExpectationBuilder};
use crate::fixture::load_fixture;

#[derive(Debug, Clone)]
enum Input {
    Fixture(String),
    Sentences(Vec<Sentence>),
}

#[derive(Debug, Clone)]
enum Enrichment {
    Skip,
    CorpusDefaults,
    Subtasks(Vec<Subtask>),
}

/// What a scenario run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Sentences after enrichment and conversion.
    pub sentences: Vec<Sentence>,
    /// Present when the scenario enriched its input.
    pub summary: Option<EnrichSummary>,
    pub conversion: Conversion,
}

/// An input run through a corpus session: optional enrichment, then
/// validation and JSON conversion.
#[derive(Debug)]
pub struct Scenario {
    name: String,
    corpus: String,
    input: Option<Input>,
    enrichment: Enrichment,
    options: ConvertOptions,
    expectation: Expectation,
}

impl Scenario {
    /// Create a scenario against the `streusle` corpus.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            corpus: "streusle".to_string(),
            input: None,
            enrichment: Enrichment::Skip,
            options: ConvertOptions::default(),
            expectation: Expectation::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn corpus(mut self, corpus: &str) -> Self {
        self.corpus = corpus.to_string();
        self
    }

    /// Read input from a fixture file.
    pub fn fixture(mut self, name: &str) -> Self {
        self.input = Some(Input::Fixture(name.to_string()));
        self
    }

    /// Use in-memory sentences as input.
    pub fn sentences(mut self, sentences: Vec<Sentence>) -> Self {
        self.input = Some(Input::Sentences(sentences));
        self
    }

    /// Enrich with the corpus's default subtasks before converting.
    pub fn enrich(mut self) -> Self {
        self.enrichment = Enrichment::CorpusDefaults;
        self
    }

    /// Enrich with an explicit subtask list before converting.
    pub fn enrich_with(mut self, subtasks: &[Subtask]) -> Self {
        self.enrichment = Enrichment::Subtasks(subtasks.to_vec());
        self
    }

    pub fn options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn expect<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ExpectationBuilder) -> ExpectationBuilder,
    {
        self.expectation = f(ExpectationBuilder::new()).build();
        self
    }

    fn load(&self) -> TestResult<Vec<Sentence>> {
        match &self.input {
            Some(Input::Fixture(name)) => load_fixture(name),
            Some(Input::Sentences(sentences)) => Ok(sentences.clone()),
            None => Err(TestError::no_input(&self.name)),
        }
    }

    /// Run the scenario without checking expectations.
    pub fn execute(&self) -> TestResult<Outcome> {
        let session = Session::for_corpus(&self.corpus)?;
        let mut sentences = self.load()?;

        let summary = match &self.enrichment {
            Enrichment::Skip => None,
            Enrichment::CorpusDefaults => Some(session.enrich(&mut sentences)?),
            Enrichment::Subtasks(subtasks) => Some(session.enrich_with(&mut sentences, subtasks)?),
        };
        let conversion = session.convert(&mut sentences, &self.options)?;

        Ok(Outcome {
            sentences,
            summary,
            conversion,
        })
    }

    /// Run the scenario and verify its expectation.
    pub fn run(&self) -> TestResult<Outcome> {
        let outcome = self.execute()?;
        self.expectation.verify(&self.name, &outcome)?;
        Ok(outcome)
    }
}
