//! Ancestor resolution over dotted labels.

use std::collections::{BTreeSet, HashMap};

use conllulex_core::Namespace;

use crate::{NOUN_SUPERSENSES, PREPOSITION_TREE, VERB_SUPERSENSES};

/// The supersense inventory with precomputed parent links.
///
/// Noun and verb labels hang directly off their namespace root. Preposition
/// labels form a tree.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    /// Direct parent of every known label.
    parents: HashMap<String, String>,
    /// Known labels per namespace.
    labels: HashMap<Namespace, BTreeSet<String>>,
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl Hierarchy {
    /// Build the standard inventory.
    pub fn new() -> Self {
        let mut parents = HashMap::new();
        let mut labels: HashMap<Namespace, BTreeSet<String>> = HashMap::new();

        for (namespace, flat) in [
            (Namespace::Noun, NOUN_SUPERSENSES),
            (Namespace::Verb, VERB_SUPERSENSES),
        ] {
            for label in flat {
                parents.insert(label.to_string(), namespace.root().to_string());
                labels.entry(namespace).or_default().insert(label.to_string());
            }
        }
        for (label, parent) in PREPOSITION_TREE {
            parents.insert(label.to_string(), parent.to_string());
            labels
                .entry(Namespace::Preposition)
                .or_default()
                .insert(label.to_string());
        }

        Self { parents, labels }
    }

    /// All known labels in a namespace.
    pub fn labels(&self, namespace: Namespace) -> impl Iterator<Item = &str> {
        self.labels
            .get(&namespace)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// The chain of strict ancestors, nearest first, ending in the
    /// namespace root. `p.Goal` yields `[p.Locus, p.Circumstance, p]`.
    ///
    /// Labels outside the inventory but inside a namespace yield just the
    /// root; labels outside every namespace yield nothing.
    pub fn ancestors(&self, label: &str) -> Vec<String> {
        let Some(namespace) = Namespace::of_label(label) else {
            return Vec::new();
        };
        let root = namespace.root();

        let mut chain = Vec::new();
        let mut current = label;
        // Bounded by the table size.
        while let Some(parent) = self.parents.get(current) {
            chain.push(parent.clone());
            if parent == root || chain.len() > self.parents.len() {
                break;
            }
            current = parent.as_str();
        }
        if chain.last().map(String::as_str) != Some(root) {
            chain.push(root.to_string());
        }
        chain
    }

    /// Returns true if `ancestor` is a strict ancestor of `label`.
    pub fn is_ancestor(&self, ancestor: &str, label: &str) -> bool {
        self.ancestors(label).iter().any(|a| a == ancestor)
    }

    /// Returns true if either label is a strict ancestor of the other.
    pub fn related(&self, a: &str, b: &str) -> bool {
        self.is_ancestor(a, b) || self.is_ancestor(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancestors_of_goal() {
        // GIVEN
        let hierarchy = Hierarchy::new();

        // WHEN
        let chain = hierarchy.ancestors("p.Goal");

        // THEN
        assert_eq!(chain, vec!["p.Locus", "p.Circumstance", "p"]);
    }

    #[test]
    fn test_flat_namespaces_hang_off_root() {
        let hierarchy = Hierarchy::new();
        assert_eq!(hierarchy.ancestors("n.ARTIFACT"), vec!["n"]);
        assert_eq!(hierarchy.ancestors("v.motion"), vec!["v"]);
    }

    #[test]
    fn test_unknown_labels() {
        let hierarchy = Hierarchy::new();
        assert_eq!(hierarchy.ancestors("p.Nonsense"), vec!["p"]);
        assert!(hierarchy.ancestors("`$").is_empty());
        assert!(!hierarchy.labels(Namespace::Preposition).any(|l| l == "p.Nonsense"));
    }

    #[test]
    fn test_ancestor_relation_is_strict_and_directional() {
        let hierarchy = Hierarchy::new();
        assert!(hierarchy.is_ancestor("p.Circumstance", "p.Time"));
        assert!(!hierarchy.is_ancestor("p.Time", "p.Circumstance"));
        assert!(!hierarchy.is_ancestor("p.Goal", "p.Goal"));
        assert!(hierarchy.related("p.Gestalt", "p.Org"));
        assert!(!hierarchy.related("p.Circumstance", "p.Whole"));
    }

    #[test]
    fn test_every_tree_label_reaches_root() {
        let hierarchy = Hierarchy::new();
        for label in hierarchy.labels(Namespace::Preposition) {
            assert_eq!(hierarchy.ancestors(label).last().map(String::as_str), Some("p"));
        }
        assert_eq!(hierarchy.labels(Namespace::Noun).count(), 26);
        assert_eq!(hierarchy.labels(Namespace::Verb).count(), 15);
    }
}
