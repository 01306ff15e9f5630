//! Session: one corpus configuration driving enrichment and conversion.

use conllulex_core::{Sentence, MWE_KEY};
use conllulex_format::{
    build_document, read_document, write_documents, BracketRenderer, Lextagger, MweRenderer, SentenceDocument,
    StandardLextagger,
};
use conllulex_lexcat::Cascade;
use conllulex_registry::{CorpusConfig, LanguageConfig};
use conllulex_validate::{Finding, FindingKind, Findings, Validator};
use tracing::{debug, info};

use crate::enrich;
use crate::error::SessionResult;
use crate::result::{Conversion, EnrichSummary};
use crate::{ConvertOptions, Subtask};

/// A conllulex session.
pub struct Session {
    corpus: CorpusConfig,
    language: LanguageConfig,
    cascade: Cascade,
    lextagger: Box<dyn Lextagger>,
    renderer: Box<dyn MweRenderer>,
}

impl Session {
    /// Create a session. Fails if the corpus names an unknown language.
    pub fn new(corpus: CorpusConfig) -> SessionResult<Self> {
        let language = corpus.language_config()?;
        Ok(Self {
            corpus,
            language,
            cascade: Cascade::standard(),
            lextagger: Box::new(StandardLextagger),
            renderer: Box::new(BracketRenderer),
        })
    }

    /// Create a session for a named corpus.
    pub fn for_corpus(name: &str) -> SessionResult<Self> {
        Self::new(CorpusConfig::for_corpus(name)?)
    }

    pub fn with_cascade(mut self, cascade: Cascade) -> Self {
        self.cascade = cascade;
        self
    }

    pub fn corpus(&self) -> &CorpusConfig {
        &self.corpus
    }

    pub fn language(&self) -> &LanguageConfig {
        &self.language
    }

    /// The corpus's default subtask sequence.
    pub fn default_subtasks(&self) -> SessionResult<Vec<Subtask>> {
        Subtask::parse_all(self.corpus.subtasks())
    }

    /// Run the corpus's default subtasks.
    pub fn enrich(&self, sentences: &mut [Sentence]) -> SessionResult<EnrichSummary> {
        let subtasks = self.default_subtasks()?;
        self.enrich_with(sentences, &subtasks)
    }

    /// Run the given subtasks, in order, over every sentence. Only an
    /// unusable configuration fails the run; problems in individual
    /// sentences are returned as findings on the summary.
    pub fn enrich_with(&self, sentences: &mut [Sentence], subtasks: &[Subtask]) -> SessionResult<EnrichSummary> {
        let mut summary = EnrichSummary {
            sentences: sentences.len(),
            subtasks: subtasks.to_vec(),
            ..EnrichSummary::default()
        };

        for subtask in subtasks {
            debug!(subtask = %subtask, corpus = self.corpus.name(), "running subtask");
            match subtask {
                Subtask::DedupeQuestionMarks => enrich::dedupe_question_marks(sentences),
                Subtask::MakeCompoundPrtsSmwes => {
                    summary.compound_groups += enrich::make_compound_prts_smwes(sentences);
                }
                Subtask::AddMweMetadatum => enrich::add_mwe_metadatum(sentences, self.renderer.as_ref()),
                Subtask::AddLexlemma => enrich::add_lexlemma(sentences, &self.language),
                Subtask::AddWlemma => enrich::add_wlemma(sentences, &self.language),
                Subtask::PrefixPrepositionalSupersenses => enrich::prefix_prepositional_supersenses(sentences),
                Subtask::CapitalizeSupersenses => enrich::capitalize_supersenses(sentences),
                Subtask::AssignSentId => {
                    summary.assigned_ids += enrich::assign_sent_id(sentences, self.corpus.name());
                }
                Subtask::AddLexcat => {
                    summary.needs_review +=
                        enrich::add_lexcat(sentences, &self.cascade, &self.corpus, &mut summary.findings);
                }
                Subtask::AddLextag => enrich::add_lextag(sentences, self.lextagger.as_ref()),
                Subtask::RenumberMwes => enrich::renumber_mwes(sentences),
            }
        }

        info!(
            sentences = summary.sentences,
            subtasks = summary.subtasks.len(),
            needs_review = summary.needs_review,
            findings = summary.findings.len(),
            "enrichment finished"
        );
        Ok(summary)
    }

    /// Replace `mwe` metadata that disagrees with the rendering. Each
    /// replacement is reported as a warning.
    fn override_mwe_render(&self, sentences: &mut [Sentence]) -> Findings {
        let mut replaced = Findings::new();
        for sentence in sentences {
            let rendered = self.renderer.render(sentence);
            let recorded = sentence.meta(MWE_KEY);
            if recorded == Some(rendered.as_str()) {
                continue;
            }
            replaced.push(Finding::warning(
                sentence.sent_id(),
                FindingKind::RenderMismatch,
                format!(
                    "Replaced MWE rendering {:?} with {:?}",
                    recorded.unwrap_or(""),
                    rendered
                ),
            ));
            sentence.set_meta(MWE_KEY, rendered);
        }
        replaced
    }

    /// Validate every sentence, then build the JSON documents.
    ///
    /// Output is produced when there are no errors, or regardless when
    /// `force` is set. Findings are always returned, sorted.
    pub fn convert(&self, sentences: &mut [Sentence], options: &ConvertOptions) -> SessionResult<Conversion> {
        let mut findings = if options.override_mwe_render {
            self.override_mwe_render(sentences)
        } else {
            Findings::new()
        };

        let validator = Validator::new(self.corpus.clone())?.with_options(options.validation);
        findings.merge(validator.check_corpus(sentences));
        findings.sort();

        let errors = findings.errors().count();
        info!(
            sentences = sentences.len(),
            errors,
            warnings = findings.warnings().count(),
            "validation finished"
        );

        let output = self.emit(sentences, &findings, options)?;
        Ok(Conversion { findings, output })
    }

    /// Re-read documents from an earlier conversion and write them again
    /// under the given options.
    ///
    /// Rows are not validated again. Every expression's token offsets must
    /// be positive.
    pub fn convert_documents(
        &self,
        documents: &[SentenceDocument],
        options: &ConvertOptions,
    ) -> SessionResult<Conversion> {
        let mut findings = Findings::new();
        for document in documents {
            check_toknums(document, &mut findings);
        }
        findings.sort();

        let sentences = documents
            .iter()
            .map(read_document)
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            documents = documents.len(),
            errors = findings.errors().count(),
            "documents re-read"
        );

        let output = self.emit(&sentences, &findings, options)?;
        Ok(Conversion { findings, output })
    }

    /// The JSON text, when there are no errors or output is forced.
    fn emit(
        &self,
        sentences: &[Sentence],
        findings: &Findings,
        options: &ConvertOptions,
    ) -> SessionResult<Option<String>> {
        if findings.has_errors() && !options.force {
            return Ok(None);
        }
        let documents = sentences
            .iter()
            .map(|sentence| {
                if options.ss_map.is_empty() {
                    return build_document(sentence, &options.json);
                }
                let mut relabeled = sentence.clone();
                options.ss_map.apply(&mut relabeled)?;
                build_document(&relabeled, &options.json)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(write_documents(&documents)?))
    }
}

fn check_toknums(document: &SentenceDocument, findings: &mut Findings) {
    let strong = document.swes.values().chain(document.smwes.values()).map(|e| &e.toknums);
    let weak = document.wmwes.values().map(|e| &e.toknums);
    for toknums in strong.chain(weak) {
        if toknums.contains(&0) {
            findings.push(Finding::error(
                &document.sent_id,
                FindingKind::Structural,
                format!(
                    "Token offsets must be positive, but this expression has non-positive ones: {:?}",
                    toknums
                ),
            ));
        }
    }
}
