//! Canonical group numbering.

use conllulex_core::{GroupMarker, Sentence, Strength};

use crate::Groups;

/// Groups in canonical order: ascending by first token id, strong before
/// weak on ties. Each entry is (first token, strength, marker group id).
pub fn canonical_order(groups: &Groups) -> Vec<(u32, Strength, u32)> {
    let mut order: Vec<(u32, Strength, u32)> = [Strength::Strong, Strength::Weak]
        .into_iter()
        .flat_map(move |strength| {
            groups.iter(strength).filter_map(move |(id, toknums)| {
                toknums.first().map(|&first| (first, strength, id))
            })
        })
        .collect();
    // Strength orders Strong before Weak.
    order.sort();
    order
}

/// Rewrite every group marker so group ids run 1..n in canonical order,
/// shared between strong and weak groups, and positions are each member's
/// rank by token id. Returns the number of groups.
pub fn renumber(sentence: &mut Sentence) -> usize {
    let groups = Groups::read(sentence);
    let order = canonical_order(&groups);

    for (new_id, (_, strength, old_id)) in (1u32..).zip(&order) {
        for (rank, token) in (1u32..).zip(groups.toknums(*strength, *old_id)) {
            if let Some(t) = sentence.word_mut(token) {
                t.set_marker(*strength, Some(GroupMarker::new(new_id, rank)));
            }
        }
    }
    order.len()
}
