//! Per-language configuration.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use conllulex_core::{LemmaColumn, Namespace};

use crate::{tables, RegistryError, RegistryResult};

/// The token context an exception predicate sees when a single-word
/// expression's category disagrees with its coarse part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MismatchContext<'a> {
    pub upos: &'a str,
    pub xpos: Option<&'a str>,
    pub lemma: &'a str,
    pub lexlemma: &'a str,
    pub lexcat: &'a str,
}

impl MismatchContext<'_> {
    /// Returns true if the fine tag equals `tag`.
    pub fn xpos_is(&self, tag: &str) -> bool {
        self.xpos == Some(tag)
    }
}

/// A named predicate that excuses a part-of-speech/category mismatch.
#[derive(Clone, Copy)]
pub struct ExceptionCheck {
    pub name: &'static str,
    pub check: fn(&MismatchContext<'_>) -> bool,
}

impl fmt::Debug for ExceptionCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExceptionCheck").field(&self.name).finish()
    }
}

/// A named text transform applied to both sides of a lexlemma comparison.
#[derive(Clone, Copy)]
pub struct LemmaTransform {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

impl fmt::Debug for LemmaTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LemmaTransform").field(&self.name).finish()
    }
}

/// Immutable rule tables for one language.
///
/// Built once with [`crate::LanguageConfigBuilder`] and passed by reference
/// into every inference and validation call.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub(crate) code: String,

    /// (primary, secondary) pairs allowed even though one label is an
    /// ancestor of the other.
    pub(crate) permitted_ancestor_combos: HashSet<(String, String)>,
    /// Labels that may never appear as a secondary (function) label.
    pub(crate) banned_functions: HashSet<String>,

    /// (UPOS, lexcat) pairs a single-word expression may carry.
    pub(crate) allowed_mismatches: HashSet<(String, String)>,
    /// Ordered exception predicates for everything else.
    pub(crate) exception_checks: Vec<ExceptionCheck>,

    /// Labels added to the prepositional legal set.
    pub(crate) extra_prepositional_labels: BTreeSet<String>,

    /// lemma -> accepted lexlemma variants.
    pub(crate) lexlemma_whitelist: HashMap<String, Vec<String>>,
    pub(crate) lexlemma_transforms: Vec<LemmaTransform>,
    pub(crate) lemma_column: LemmaColumn,

    /// Categories skipped by the label-legality check.
    pub(crate) label_check_exempt: HashSet<String>,
    pub(crate) vocabulary: BTreeSet<String>,
    pub(crate) mwe_only_lexcats: HashSet<String>,
    pub(crate) label_bearing_lexcats: HashSet<String>,

    // Hierarchy extension points.
    pub(crate) noun_namespace: Namespace,
    pub(crate) bare_verb_labeled: bool,
    pub(crate) verb_subtypes: Option<BTreeSet<String>>,
    pub(crate) verb_subtype_namespace: Namespace,
    pub(crate) pronoun_labels: Option<BTreeSet<String>>,
}

impl LanguageConfig {
    /// Get the built-in configuration for a language code.
    pub fn for_language(code: &str) -> RegistryResult<Self> {
        match code {
            "en" => Ok(tables::english()),
            "hi" => Ok(tables::hindi()),
            "zh" => Ok(tables::chinese()),
            "la" => Ok(tables::latin()),
            other => Err(RegistryError::unknown_language(other)),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    // ==================== Label pairs ====================

    /// Returns true if (primary, secondary) is a registered ancestor combo.
    pub fn is_permitted_combo(&self, primary: &str, secondary: &str) -> bool {
        self.permitted_ancestor_combos
            .contains(&(primary.to_string(), secondary.to_string()))
    }

    pub fn permitted_combos(&self) -> impl Iterator<Item = (&str, &str)> {
        self.permitted_ancestor_combos
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }

    pub fn is_banned_function(&self, label: &str) -> bool {
        self.banned_functions.contains(label)
    }

    pub fn banned_functions(&self) -> impl Iterator<Item = &str> {
        self.banned_functions.iter().map(String::as_str)
    }

    // ==================== POS / category ====================

    /// Returns true if a single-word expression may pair `upos` with `lexcat`.
    pub fn is_allowed_mismatch(&self, upos: &str, lexcat: &str) -> bool {
        self.allowed_mismatches
            .contains(&(upos.to_string(), lexcat.to_string()))
    }

    /// Name of the first exception predicate that holds, if any.
    pub fn matching_exception(&self, ctx: &MismatchContext<'_>) -> Option<&'static str> {
        self.exception_checks
            .iter()
            .find(|e| (e.check)(ctx))
            .map(|e| e.name)
    }

    pub fn in_vocabulary(&self, lexcat: &str) -> bool {
        self.vocabulary.contains(lexcat)
    }

    /// Returns true if `lexcat` may only label strong multiword expressions.
    pub fn is_mwe_only(&self, lexcat: &str) -> bool {
        self.mwe_only_lexcats.contains(lexcat)
    }

    /// Returns true if `lexcat` must carry a label when its namespace is
    /// annotated.
    pub fn is_label_bearing(&self, lexcat: &str) -> bool {
        self.label_bearing_lexcats.contains(lexcat)
    }

    pub fn is_label_check_exempt(&self, lexcat: &str) -> bool {
        self.label_check_exempt.contains(lexcat)
    }

    // ==================== Lexlemma agreement ====================

    pub fn lemma_column(&self) -> LemmaColumn {
        self.lemma_column
    }

    /// Accepted lexlemma variants for a member lemma (empty if none).
    pub fn lexlemma_variants(&self, lemma: &str) -> &[String] {
        self.lexlemma_whitelist
            .get(lemma)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Apply every transform, in order.
    pub fn transform_lemma(&self, text: &str) -> String {
        self.lexlemma_transforms
            .iter()
            .fold(text.to_string(), |acc, t| (t.apply)(&acc))
    }

    // ==================== Hierarchy extensions ====================

    pub fn extra_prepositional_labels(&self) -> impl Iterator<Item = &str> {
        self.extra_prepositional_labels.iter().map(String::as_str)
    }

    /// Namespace the `N` category draws labels from.
    pub fn noun_namespace(&self) -> Namespace {
        self.noun_namespace
    }

    /// Whether bare `V` carries verb labels.
    pub fn bare_verb_labeled(&self) -> bool {
        self.bare_verb_labeled
    }

    /// Allowed `V.*` subtypes. `None` accepts any subtype.
    pub fn verb_subtypes(&self) -> Option<&BTreeSet<String>> {
        self.verb_subtypes.as_ref()
    }

    pub fn verb_subtype_namespace(&self) -> Namespace {
        self.verb_subtype_namespace
    }

    /// Extra labels legal on `PRON`. `None` means `PRON` is unlabeled.
    pub fn pronoun_labels(&self) -> Option<&BTreeSet<String>> {
        self.pronoun_labels.as_ref()
    }
}
