//! The validator: runs every check over a sentence or a corpus.

use conllulex_core::{ExpressionKind, Sentence};
use conllulex_format::{BracketRenderer, Lextagger, MweRenderer, StandardLextagger};
use conllulex_mwe::{Expressions, Groups};
use conllulex_registry::{CorpusConfig, LanguageConfig};
use conllulex_supersense::Hierarchy;

use crate::labels::{check_labels, LabelContext};
use crate::lexical::{check_lexcat, check_lexlemma, check_mwe_only, check_pos_compatibility};
use crate::oracle::{check_lextags, check_rendering};
use crate::structure::{
    check_columns, check_groups, check_heads, check_metadata_keys, check_numbering, check_sent_id,
};
use crate::{corpus, Findings, ValidateResult, ValidationOptions};

/// Checks sentences against one corpus configuration.
///
/// Every check runs; problems are collected as findings rather than
/// returned as errors. The lextag encoder and MWE renderer used for the
/// reconstruction checks can be swapped.
pub struct Validator {
    corpus: CorpusConfig,
    language: LanguageConfig,
    hierarchy: Hierarchy,
    options: ValidationOptions,
    lextagger: Box<dyn Lextagger>,
    renderer: Box<dyn MweRenderer>,
}

impl Validator {
    /// Create a validator. Fails if the corpus names an unknown language.
    pub fn new(corpus: CorpusConfig) -> ValidateResult<Self> {
        let language = corpus.language_config()?;
        Ok(Self {
            corpus,
            language,
            hierarchy: Hierarchy::new(),
            options: ValidationOptions::default(),
            lextagger: Box::new(StandardLextagger),
            renderer: Box::new(BracketRenderer),
        })
    }

    pub fn for_corpus(name: &str) -> ValidateResult<Self> {
        Self::new(CorpusConfig::for_corpus(name)?)
    }

    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_lextagger(mut self, lextagger: impl Lextagger + 'static) -> Self {
        self.lextagger = Box::new(lextagger);
        self
    }

    pub fn with_renderer(mut self, renderer: impl MweRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn corpus(&self) -> &CorpusConfig {
        &self.corpus
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Run every per-sentence check.
    pub fn check_sentence(&self, sentence: &Sentence) -> Findings {
        let mut out = Findings::new();
        let groups = Groups::read(sentence);

        check_sent_id(sentence, &mut out);
        check_numbering(sentence, &mut out);
        check_heads(sentence, &mut out);
        check_metadata_keys(sentence, &mut out);
        check_groups(sentence, &groups, &mut out);
        check_columns(sentence, &mut out);

        let expressions = Expressions::collect(sentence, &groups);
        let label_ctx = LabelContext {
            corpus: &self.corpus,
            language: &self.language,
            hierarchy: &self.hierarchy,
        };

        for expression in expressions.all() {
            let single = expression.kind == ExpressionKind::Single;
            if !single || self.options.validate_type {
                check_lexlemma(sentence, &self.language, expression, &mut out);
            }
            if expression.kind == ExpressionKind::Weak {
                continue;
            }
            if self.options.validate_type {
                check_lexcat(sentence, &self.language, expression, &mut out);
            }
            check_mwe_only(sentence, &self.language, expression, &mut out);
            if single && self.options.validate_upos_lextag {
                let token = expression.first().and_then(|id| sentence.word(id));
                if let Some(token) = token {
                    check_pos_compatibility(sentence, &self.language, token, expression, &mut out);
                }
            }
            check_labels(&label_ctx, sentence, expression, &mut out);
        }

        check_lextags(sentence, self.lextagger.as_ref(), &mut out);
        check_rendering(sentence, self.renderer.as_ref(), &mut out);
        out
    }

    /// Check every sentence, then the corpus-level sentence id rules.
    /// Findings come back sorted by explanation, then sentence id.
    pub fn check_corpus(&self, sentences: &[Sentence]) -> Findings {
        let mut out = Findings::new();
        for sentence in sentences {
            out.merge(self.check_sentence(sentence));
        }
        corpus::check_sentence_ids(&self.corpus, sentences, &mut out);
        out.sort();
        out
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("corpus", &self.corpus.name())
            .field("language", &self.language.code())
            .field("options", &self.options)
            .finish()
    }
}
