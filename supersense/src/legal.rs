//! Per-category legal label sets.

use std::collections::BTreeSet;

use conllulex_core::Namespace;
use conllulex_registry::LanguageConfig;

use crate::{Hierarchy, HierarchyError, HierarchyResult, POSSESSIVE};

/// Labels every preposition-like category accepts on top of the tree.
const PREPOSITION_EXTRAS: &[&str] = &["p.Focus", "p.`d", "p.`i"];

/// The labels a category may carry, and the namespace they come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegalLabels {
    namespace: Option<Namespace>,
    labels: BTreeSet<String>,
}

impl LegalLabels {
    /// The empty set: no label is legal.
    pub fn none() -> Self {
        Self::default()
    }

    fn from_namespace(hierarchy: &Hierarchy, namespace: Namespace) -> Self {
        Self {
            namespace: Some(namespace),
            labels: hierarchy.labels(namespace).map(str::to_string).collect(),
        }
    }

    fn with<'a>(mut self, extras: impl IntoIterator<Item = &'a str>) -> Self {
        self.labels.extend(extras.into_iter().map(str::to_string));
        self
    }

    /// Namespace the labels are drawn from. `None` for the empty set.
    pub fn namespace(&self) -> Option<Namespace> {
        self.namespace
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Resolve the set of labels permitted for a lexical category.
///
/// Unknown categories resolve to the empty set. A `V.*` subtype outside the
/// language's allowed list is an error.
pub fn legal_labels(
    lexcat: &str,
    config: &LanguageConfig,
    hierarchy: &Hierarchy,
) -> HierarchyResult<LegalLabels> {
    let prepositional = || LegalLabels::from_namespace(hierarchy, Namespace::Preposition);

    let legal = match lexcat {
        "N" => LegalLabels::from_namespace(hierarchy, config.noun_namespace()),
        "V" if !config.bare_verb_labeled() => LegalLabels::none(),
        "V" => LegalLabels::from_namespace(hierarchy, Namespace::Verb),
        subtype if subtype.starts_with("V.") => {
            if let Some(allowed) = config.verb_subtypes() {
                if !allowed.contains(subtype) {
                    return Err(HierarchyError::unknown_verb_subtype(subtype, config.code()));
                }
            }
            LegalLabels::from_namespace(hierarchy, config.verb_subtype_namespace())
        }
        "P" | "PP" | "INF.P" | "PART.FOC" => prepositional()
            .with(PREPOSITION_EXTRAS.iter().copied())
            .with(config.extra_prepositional_labels()),
        "POSS" | "PRON.POSS" => prepositional().with([POSSESSIVE]),
        "PRON" => match config.pronoun_labels() {
            Some(extras) => prepositional().with(extras.iter().map(String::as_str)),
            None => LegalLabels::none(),
        },
        _ => LegalLabels::none(),
    };
    Ok(legal)
}
