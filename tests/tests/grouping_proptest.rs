//! Property-based tests for group renumbering
//!
//! Renumbering rewrites marker ids and positions only: the token partition
//! read back from the new markers must match the one read before.

use std::collections::BTreeSet;

use conllulex_core::{Sentence, Strength, Token};
use conllulex_mwe::{renumber, Groups};
use proptest::prelude::*;

/// Per token: an optional strong group label and an optional weak one.
fn assignment_strategy() -> impl Strategy<Value = Vec<(Option<u8>, Option<u8>)>> {
    prop::collection::vec((prop::option::of(0u8..4), prop::option::of(0u8..3)), 1..16)
}

/// Distinct marker ids, shuffled, for the labels to map onto.
fn id_pool_strategy() -> impl Strategy<Value = Vec<u32>> {
    Just((1u32..=30).collect::<Vec<_>>()).prop_shuffle()
}

fn build_sentence(assignment: &[(Option<u8>, Option<u8>)], pool: &[u32]) -> Sentence {
    let mut strong_seen = [0u32; 4];
    let mut weak_seen = [0u32; 3];
    let tokens = (1u32..)
        .zip(assignment)
        .map(|(id, (strong, weak))| {
            let mut token = Token::word(id, "w", "w", "X").with_head(0, "root");
            if let Some(label) = strong {
                let label = *label as usize;
                strong_seen[label] += 1;
                token = token.with_smwe(pool[label], strong_seen[label]);
            }
            if let Some(label) = weak {
                let label = *label as usize;
                weak_seen[label] += 1;
                token = token.with_wmwe(pool[4 + label], weak_seen[label]);
            }
            token
        })
        .collect();
    Sentence::new("prop-1").with_tokens(tokens)
}

fn sorted_partition(groups: &Groups, strength: Strength) -> Vec<Vec<u32>> {
    let mut partition = groups.partition(strength);
    partition.sort();
    partition
}

proptest! {
    #[test]
    fn test_renumber_preserves_partition(
        assignment in assignment_strategy(),
        pool in id_pool_strategy(),
    ) {
        let mut sentence = build_sentence(&assignment, &pool);
        let before = Groups::read(&sentence);

        renumber(&mut sentence);
        let after = Groups::read(&sentence);

        for strength in [Strength::Strong, Strength::Weak] {
            prop_assert_eq!(sorted_partition(&before, strength), sorted_partition(&after, strength));
        }
    }

    #[test]
    fn test_renumbered_ids_are_dense(
        assignment in assignment_strategy(),
        pool in id_pool_strategy(),
    ) {
        let mut sentence = build_sentence(&assignment, &pool);

        let count = renumber(&mut sentence) as u32;
        let groups = Groups::read(&sentence);

        let ids: BTreeSet<u32> = groups
            .ids(Strength::Strong)
            .chain(groups.ids(Strength::Weak))
            .collect();
        prop_assert_eq!(ids, (1..=count).collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_renumber_is_idempotent(
        assignment in assignment_strategy(),
        pool in id_pool_strategy(),
    ) {
        let mut sentence = build_sentence(&assignment, &pool);
        renumber(&mut sentence);
        let once = sentence.clone();

        renumber(&mut sentence);

        prop_assert_eq!(once, sentence);
    }
}
