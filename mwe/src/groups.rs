//! Group construction from token markers.

use std::collections::BTreeMap;

use conllulex_core::{Sentence, Strength};

use crate::GroupError;

/// A token's membership in a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub token: u32,
    /// Position as declared by the marker.
    pub position: u32,
}

/// Strong and weak groups of one sentence, keyed by marker group id.
///
/// Built in two passes: the first collects every marker, the second sorts
/// each group's members by token id. After construction the structure is
/// read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    strong: BTreeMap<u32, Vec<Member>>,
    weak: BTreeMap<u32, Vec<Member>>,
}

impl Groups {
    /// Read groups from the markers of a sentence's ordinary tokens.
    pub fn read(sentence: &Sentence) -> Self {
        let mut groups = Groups::default();

        // Pass 1: collect.
        for token in sentence.words() {
            let Some(id) = token.id() else { continue };
            for strength in [Strength::Strong, Strength::Weak] {
                if let Some(marker) = token.marker(strength) {
                    groups.map_mut(strength).entry(marker.group).or_default().push(Member {
                        token: id,
                        position: marker.position,
                    });
                }
            }
        }

        // Pass 2: order members by token id.
        for members in groups.strong.values_mut().chain(groups.weak.values_mut()) {
            members.sort_by_key(|m| m.token);
        }
        groups
    }

    fn map_mut(&mut self, strength: Strength) -> &mut BTreeMap<u32, Vec<Member>> {
        match strength {
            Strength::Strong => &mut self.strong,
            Strength::Weak => &mut self.weak,
        }
    }

    fn map(&self, strength: Strength) -> &BTreeMap<u32, Vec<Member>> {
        match strength {
            Strength::Strong => &self.strong,
            Strength::Weak => &self.weak,
        }
    }

    /// Group ids of one strength, ascending.
    pub fn ids(&self, strength: Strength) -> impl Iterator<Item = u32> + '_ {
        self.map(strength).keys().copied()
    }

    /// Members of a group, sorted by token id.
    pub fn members(&self, strength: Strength, group: u32) -> Option<&[Member]> {
        self.map(strength).get(&group).map(Vec::as_slice)
    }

    /// Token ids of a group, ascending.
    pub fn toknums(&self, strength: Strength, group: u32) -> Vec<u32> {
        self.members(strength, group)
            .map(|members| members.iter().map(|m| m.token).collect())
            .unwrap_or_default()
    }

    /// Every group of one strength as (group id, token ids).
    pub fn iter(&self, strength: Strength) -> impl Iterator<Item = (u32, Vec<u32>)> + '_ {
        self.map(strength)
            .iter()
            .map(|(id, members)| (*id, members.iter().map(|m| m.token).collect()))
    }

    /// The group a token belongs to, if any.
    pub fn group_of(&self, strength: Strength, token: u32) -> Option<u32> {
        self.map(strength)
            .iter()
            .find(|(_, members)| members.iter().any(|m| m.token == token))
            .map(|(id, _)| *id)
    }

    /// The largest group id in use across both strengths.
    pub fn max_id(&self) -> u32 {
        self.strong
            .keys()
            .chain(self.weak.keys())
            .copied()
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.strong.len() + self.weak.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Token-id partition of each strength, in group id order. Group ids
    /// are not part of the partition.
    pub fn partition(&self, strength: Strength) -> Vec<Vec<u32>> {
        self.iter(strength).map(|(_, toknums)| toknums).collect()
    }

    /// Every structural problem, strong groups first.
    pub fn problems(&self) -> Vec<GroupError> {
        let mut problems = Vec::new();
        for strength in [Strength::Strong, Strength::Weak] {
            for (&group, members) in self.map(strength) {
                if members.len() < 2 {
                    problems.push(GroupError::Singleton {
                        strength,
                        group,
                        token: members.first().map(|m| m.token).unwrap_or(0),
                    });
                }
                if let Some((rank, member)) = members
                    .iter()
                    .enumerate()
                    .find(|(rank, m)| m.position != *rank as u32 + 1)
                {
                    problems.push(GroupError::PositionOutOfOrder {
                        strength,
                        group,
                        token: member.token,
                        declared: member.position,
                        expected: rank as u32 + 1,
                    });
                }
            }
        }
        problems
    }
}
