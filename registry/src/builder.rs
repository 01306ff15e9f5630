//! LanguageConfigBuilder for constructing an immutable LanguageConfig.

use std::collections::{BTreeSet, HashMap, HashSet};

use conllulex_core::{LemmaColumn, Namespace};

use crate::{ExceptionCheck, LanguageConfig, LemmaTransform, MismatchContext};

/// Builder for constructing an immutable LanguageConfig.
#[derive(Debug, Clone)]
pub struct LanguageConfigBuilder {
    config: LanguageConfig,
}

impl LanguageConfigBuilder {
    /// Create a builder with empty tables and the default hierarchy
    /// extensions (nouns and verbs in their own namespaces, no subtype
    /// restriction, unlabeled pronouns).
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            config: LanguageConfig {
                code: code.into(),
                permitted_ancestor_combos: HashSet::new(),
                banned_functions: HashSet::new(),
                allowed_mismatches: HashSet::new(),
                exception_checks: Vec::new(),
                extra_prepositional_labels: BTreeSet::new(),
                lexlemma_whitelist: HashMap::new(),
                lexlemma_transforms: Vec::new(),
                lemma_column: LemmaColumn::Lemma,
                label_check_exempt: HashSet::new(),
                vocabulary: BTreeSet::new(),
                mwe_only_lexcats: HashSet::new(),
                label_bearing_lexcats: HashSet::new(),
                noun_namespace: Namespace::Noun,
                bare_verb_labeled: true,
                verb_subtypes: None,
                verb_subtype_namespace: Namespace::Verb,
                pronoun_labels: None,
            },
        }
    }

    pub fn permit_combo(mut self, primary: &str, secondary: &str) -> Self {
        self.config
            .permitted_ancestor_combos
            .insert((primary.to_string(), secondary.to_string()));
        self
    }

    pub fn permit_combos(self, combos: &[(&str, &str)]) -> Self {
        combos
            .iter()
            .fold(self, |b, (primary, secondary)| b.permit_combo(primary, secondary))
    }

    pub fn ban_functions(mut self, labels: &[&str]) -> Self {
        self.config
            .banned_functions
            .extend(labels.iter().map(|l| l.to_string()));
        self
    }

    pub fn allow_mismatches(mut self, pairs: &[(&str, &str)]) -> Self {
        self.config.allowed_mismatches.extend(
            pairs
                .iter()
                .map(|(upos, lexcat)| (upos.to_string(), lexcat.to_string())),
        );
        self
    }

    /// Append a named exception predicate. Predicates run in the order added.
    pub fn exception(mut self, name: &'static str, check: fn(&MismatchContext<'_>) -> bool) -> Self {
        self.config
            .exception_checks
            .push(ExceptionCheck { name, check });
        self
    }

    pub fn extra_prepositional_labels(mut self, labels: &[&str]) -> Self {
        self.config
            .extra_prepositional_labels
            .extend(labels.iter().map(|l| l.to_string()));
        self
    }

    /// Accept `variants` as lexlemma spellings of `lemma`.
    pub fn whitelist(mut self, lemma: &str, variants: &[&str]) -> Self {
        self.config.lexlemma_whitelist.insert(
            lemma.to_string(),
            variants.iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    /// Append a named transform. Transforms run in the order added.
    pub fn transform(mut self, name: &'static str, apply: fn(&str) -> String) -> Self {
        self.config
            .lexlemma_transforms
            .push(LemmaTransform { name, apply });
        self
    }

    pub fn lemma_column(mut self, column: LemmaColumn) -> Self {
        self.config.lemma_column = column;
        self
    }

    pub fn exempt_from_label_check(mut self, lexcats: &[&str]) -> Self {
        self.config
            .label_check_exempt
            .extend(lexcats.iter().map(|l| l.to_string()));
        self
    }

    pub fn vocabulary(mut self, lexcats: &[&str]) -> Self {
        self.config
            .vocabulary
            .extend(lexcats.iter().map(|l| l.to_string()));
        self
    }

    pub fn mwe_only(mut self, lexcats: &[&str]) -> Self {
        self.config
            .mwe_only_lexcats
            .extend(lexcats.iter().map(|l| l.to_string()));
        self
    }

    pub fn label_bearing(mut self, lexcats: &[&str]) -> Self {
        self.config
            .label_bearing_lexcats
            .extend(lexcats.iter().map(|l| l.to_string()));
        self
    }

    pub fn noun_namespace(mut self, namespace: Namespace) -> Self {
        self.config.noun_namespace = namespace;
        self
    }

    pub fn bare_verb_labeled(mut self, labeled: bool) -> Self {
        self.config.bare_verb_labeled = labeled;
        self
    }

    /// Restrict `V.*` categories to `subtypes`, labeled from `namespace`.
    pub fn verb_subtypes(mut self, subtypes: &[&str], namespace: Namespace) -> Self {
        self.config.verb_subtypes = Some(subtypes.iter().map(|s| s.to_string()).collect());
        self.config.verb_subtype_namespace = namespace;
        self
    }

    /// Label `PRON` from the prepositional namespace plus `extras`.
    pub fn pronoun_labels(mut self, extras: &[&str]) -> Self {
        self.config.pronoun_labels = Some(extras.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Build the immutable configuration.
    pub fn build(self) -> LanguageConfig {
        self.config
    }
}
