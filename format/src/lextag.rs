//! Per-token compact tags.

use std::collections::BTreeMap;

use conllulex_core::{Sentence, Strength, Token};
use conllulex_mwe::Groups;

/// Encodes each ordinary token's grouping and labels as one tag.
pub trait Lextagger {
    /// Tag for every ordinary token, keyed by token id.
    fn lextags(&self, sentence: &Sentence) -> BTreeMap<u32, String>;
}

/// BIO-style tags: `O`, `B`, `I_` (strong continuation), `I~` (weak
/// continuation), lowercased inside the gap of another expression, then the
/// token's category and labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardLextagger;

impl StandardLextagger {
    /// The grouping part of each tag, before suffixes.
    pub fn bio(&self, sentence: &Sentence, groups: &Groups) -> BTreeMap<u32, String> {
        let mut tags: BTreeMap<u32, String> = sentence
            .words()
            .filter_map(|t| t.id())
            .map(|id| (id, "O".to_string()))
            .collect();

        let strong = groups.partition(Strength::Strong);
        let weak = groups.partition(Strength::Weak);

        for group in &strong {
            for (i, id) in group.iter().enumerate() {
                let tag = if i == 0 { "B" } else { "I_" };
                tags.insert(*id, tag.to_string());
            }
        }
        for group in &weak {
            for (i, id) in group.iter().enumerate() {
                let Some(tag) = tags.get_mut(id) else { continue };
                if i == 0 {
                    if tag.as_str() == "O" {
                        *tag = "B".to_string();
                    }
                } else if matches!(tag.as_str(), "O" | "B") {
                    *tag = "I~".to_string();
                }
            }
        }

        // Tokens strictly inside a group's span but outside the group are
        // in its gap.
        for group in strong.iter().chain(weak.iter()) {
            let (Some(&first), Some(&last)) = (group.first(), group.last()) else {
                continue;
            };
            if last <= first + 1 {
                continue;
            }
            for (id, tag) in tags.range_mut(first + 1..last) {
                if !group.contains(id) {
                    *tag = tag.to_lowercase();
                }
            }
        }
        tags
    }
}

fn suffixed(mut tag: String, token: &Token) -> String {
    if tag == "I_" || tag == "i_" {
        return tag;
    }
    tag.push('-');
    tag.push_str(token.lexcat.as_column());
    if let Some(ss) = &token.ss {
        tag.push('-');
        tag.push_str(ss);
        if let Some(ss2) = token.ss2.as_ref().filter(|ss2| *ss2 != ss) {
            tag.push('|');
            tag.push_str(ss2);
        }
    }
    tag
}

impl Lextagger for StandardLextagger {
    fn lextags(&self, sentence: &Sentence) -> BTreeMap<u32, String> {
        let groups = Groups::read(sentence);
        self.bio(sentence, &groups)
            .into_iter()
            .filter_map(|(id, tag)| sentence.word(id).map(|token| (id, suffixed(tag, token))))
            .collect()
    }
}
