//! Human-readable MWE bracketing for the `mwe` metadatum.

use std::collections::BTreeMap;

use conllulex_core::{Sentence, Strength};
use conllulex_mwe::Groups;

/// Renders a sentence's word forms with its groupings marked.
pub trait MweRenderer {
    fn render(&self, sentence: &Sentence) -> String;
}

/// Joins strong continuations with `_` and weak ones with `~`.
///
/// Adjacent members are glued together. Across a gap, the token before the
/// gap takes a trailing joiner and the token after it a leading joiner:
/// `looked_ it _up`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketRenderer;

impl BracketRenderer {
    pub const STRONG_JOINER: char = '_';
    pub const WEAK_JOINER: char = '~';

    /// Joiner between each pair of consecutive group members, keyed by the
    /// pair. Strong joiners replace weak ones on the same pair.
    fn links(groups: &Groups) -> BTreeMap<(u32, u32), char> {
        let mut links = BTreeMap::new();
        for (strength, joiner) in [
            (Strength::Weak, Self::WEAK_JOINER),
            (Strength::Strong, Self::STRONG_JOINER),
        ] {
            for group in groups.partition(strength) {
                for pair in group.windows(2) {
                    links.insert((pair[0], pair[1]), joiner);
                }
            }
        }
        links
    }
}

impl MweRenderer for BracketRenderer {
    fn render(&self, sentence: &Sentence) -> String {
        let groups = Groups::read(sentence);
        let links = Self::links(&groups);

        let words: Vec<(u32, &str)> = sentence
            .words()
            .filter_map(|t| t.id().map(|id| (id, t.form.as_str())))
            .collect();
        let mut pieces: Vec<String> = words.iter().map(|(_, form)| form.to_string()).collect();
        let index: BTreeMap<u32, usize> = words.iter().enumerate().map(|(i, (id, _))| (*id, i)).collect();

        // Glue between adjacent pieces; `None` means a plain space.
        let mut glue: Vec<Option<char>> = vec![None; words.len().saturating_sub(1)];
        for (&(from, to), &joiner) in &links {
            let (Some(&i), Some(&j)) = (index.get(&from), index.get(&to)) else {
                continue;
            };
            if j == i + 1 {
                glue[i] = Some(joiner);
            } else {
                pieces[i].push(joiner);
                pieces[j].insert(0, joiner);
            }
        }

        let mut out = String::new();
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                match glue[i - 1] {
                    Some(joiner) => out.push(joiner),
                    None => out.push(' '),
                }
            }
            out.push_str(piece);
        }
        out
    }
}
