//! Strong groups for particle verbs.

use conllulex_core::{GroupMarker, Sentence, Slot};

use crate::Groups;

/// Dependency relation attaching a verb particle to its verb.
pub const COMPOUND_PARTICLE: &str = "compound:prt";

/// Join every unlabeled, ungrouped `compound:prt` dependent to its head as
/// a new two-token strong group.
///
/// A pair is skipped when the dependent does not follow its head (a
/// malformed parse) or when the head is missing or already grouped. New
/// group ids start at the largest id in use plus one. The head's lexlemma
/// becomes `"<head lemma> <dependent lemma>"`. Returns the new group ids.
pub fn attach_compound_particles(sentence: &mut Sentence) -> Vec<u32> {
    let mut next_id = Groups::read(sentence).max_id() + 1;

    let candidates: Vec<(u32, u32)> = sentence
        .words()
        .filter(|t| t.deprel.as_deref() == Some(COMPOUND_PARTICLE))
        .filter(|t| t.ss.is_none() && t.smwe.is_none() && t.wmwe.is_none())
        .filter_map(|t| Some((t.head?, t.id()?)))
        .filter(|(head, dep)| head < dep)
        .collect();

    let mut created = Vec::new();
    for (head_id, dep_id) in candidates {
        let Some(head) = sentence.word(head_id) else {
            continue;
        };
        if head.smwe.is_some() || head.wmwe.is_some() {
            continue;
        }
        let head_lemma = head.lemma.clone();
        let Some(dep) = sentence.word_mut(dep_id) else {
            continue;
        };
        dep.smwe = Some(GroupMarker::new(next_id, 2));
        dep.lexlemma = Slot::Blank;
        dep.lexcat = Slot::Blank;
        let lexlemma = format!("{} {}", head_lemma, dep.lemma);

        if let Some(head) = sentence.word_mut(head_id) {
            head.smwe = Some(GroupMarker::new(next_id, 1));
            head.lexlemma = Slot::Value(lexlemma);
        }
        created.push(next_id);
        next_id += 1;
    }
    created
}
