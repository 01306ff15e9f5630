//! Per-corpus configuration.

use conllulex_core::Namespace;

use crate::{LanguageConfig, RegistryError, RegistryResult};

/// How a sentence id splits into a document id and a sentence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentIdScheme {
    /// `doc-id-0001`: number after the last `-`.
    #[default]
    Dash,
    /// `doc.id.12`: number after the last `.`.
    Dot,
}

impl SentIdScheme {
    /// Split a sentence id into (document id, sentence number).
    pub fn split<'a>(&self, sent_id: &'a str) -> Option<(&'a str, u32)> {
        let separator = match self {
            SentIdScheme::Dash => '-',
            SentIdScheme::Dot => '.',
        };
        let (doc, num) = sent_id.rsplit_once(separator)?;
        Some((doc, num.parse().ok()?))
    }
}

/// Short-circuits lexcat inference for a fixed label/POS/tag triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexcatOverride {
    pub ss: String,
    pub upos: String,
    pub xpos: String,
    pub lexcat: String,
}

/// Immutable configuration for one corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    name: String,
    language: String,
    subtasks: Vec<String>,
    annotated: Vec<Namespace>,
    require_from_1: bool,
    require_consecutive: bool,
    sent_id_scheme: SentIdScheme,
    lexcat_override: Option<LexcatOverride>,
}

const STANDARD_SUBTASKS: &[&str] = &[
    "add_mwe_metadatum",
    "add_lexlemma",
    "add_wlemma",
    "add_lexcat",
    "add_lextag",
    "renumber_mwes",
];

impl CorpusConfig {
    /// Create a corpus configuration with no subtasks, every namespace
    /// annotated, and strict sentence numbering.
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            subtasks: Vec::new(),
            annotated: Namespace::ALL.to_vec(),
            require_from_1: true,
            require_consecutive: true,
            sent_id_scheme: SentIdScheme::Dash,
            lexcat_override: None,
        }
    }

    /// Get the built-in configuration for a corpus.
    pub fn for_corpus(name: &str) -> RegistryResult<Self> {
        let prepositions_only = [Namespace::Preposition];
        let config = match name {
            "streusle" => Self::new(name, "en"),
            "pastrie" => Self::new(name, "en")
                .with_subtasks(&[
                    "dedupe_question_marks",
                    "make_compound_prts_smwes",
                    "add_mwe_metadatum",
                    "add_lexlemma",
                    "add_wlemma",
                    "prefix_prepositional_supersenses",
                    "add_lexcat",
                    "add_lextag",
                    "renumber_mwes",
                ])
                .with_annotated(&prepositions_only)
                .with_lexcat_override(LexcatOverride {
                    ss: "??".into(),
                    upos: "ADP".into(),
                    xpos: "IN".into(),
                    lexcat: "P".into(),
                }),
            "prince_en" => Self::new(name, "en")
                .with_subtasks(STANDARD_SUBTASKS)
                .with_annotated(&prepositions_only)
                .with_sent_id_scheme(SentIdScheme::Dot)
                .with_sentence_numbering(false, false),
            "prince_zh" => Self::new(name, "zh")
                .with_subtasks(&["capitalize_supersenses", "assign_sent_id"])
                .then_subtasks(STANDARD_SUBTASKS)
                .with_annotated(&prepositions_only),
            "prince_hi" => Self::new(name, "hi")
                .with_subtasks(&["dedupe_question_marks"])
                .then_subtasks(STANDARD_SUBTASKS)
                .with_annotated(&prepositions_only),
            other => return Err(RegistryError::unknown_corpus(other)),
        };
        Ok(config)
    }

    pub fn with_subtasks(mut self, subtasks: &[&str]) -> Self {
        self.subtasks = subtasks.iter().map(|s| s.to_string()).collect();
        self
    }

    fn then_subtasks(mut self, subtasks: &[&str]) -> Self {
        self.subtasks.extend(subtasks.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_annotated(mut self, namespaces: &[Namespace]) -> Self {
        self.annotated = namespaces.to_vec();
        self
    }

    pub fn with_sentence_numbering(mut self, from_1: bool, consecutive: bool) -> Self {
        self.require_from_1 = from_1;
        self.require_consecutive = consecutive;
        self
    }

    pub fn with_sent_id_scheme(mut self, scheme: SentIdScheme) -> Self {
        self.sent_id_scheme = scheme;
        self
    }

    pub fn with_lexcat_override(mut self, rule: LexcatOverride) -> Self {
        self.lexcat_override = Some(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The corpus language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Load the language configuration for this corpus.
    pub fn language_config(&self) -> RegistryResult<LanguageConfig> {
        LanguageConfig::for_language(&self.language)
    }

    /// Default enrichment subtasks, in order.
    pub fn subtasks(&self) -> &[String] {
        &self.subtasks
    }

    /// Returns true if labels in `namespace` are annotated in this corpus.
    pub fn is_annotated(&self, namespace: Namespace) -> bool {
        self.annotated.contains(&namespace)
    }

    pub fn requires_numbers_from_1(&self) -> bool {
        self.require_from_1
    }

    pub fn requires_consecutive_numbers(&self) -> bool {
        self.require_consecutive
    }

    pub fn sent_id_scheme(&self) -> SentIdScheme {
        self.sent_id_scheme
    }

    pub fn lexcat_override(&self) -> Option<&LexcatOverride> {
        self.lexcat_override.as_ref()
    }
}
