//! Inference context.

use conllulex_core::{Sentence, Strength, Token};
use conllulex_mwe::Groups;
use conllulex_registry::LexcatOverride;

/// Everything a rule may look at for one token.
#[derive(Debug, Clone, Copy)]
pub struct LexcatContext<'a> {
    pub sentence: &'a Sentence,
    pub token: &'a Token,
    /// Token ids of the token's strong group, ascending. `None` for
    /// single-word expressions.
    pub group: Option<&'a [u32]>,
    pub lexcat_override: Option<&'a LexcatOverride>,
}

impl<'a> LexcatContext<'a> {
    pub fn new(sentence: &'a Sentence, token: &'a Token, group: Option<&'a [u32]>) -> Self {
        Self {
            sentence,
            token,
            group,
            lexcat_override: None,
        }
    }

    pub fn with_override(mut self, rule: Option<&'a LexcatOverride>) -> Self {
        self.lexcat_override = rule;
        self
    }

    /// Primary label, or the empty string.
    pub fn ss(&self) -> &'a str {
        self.token.ss.as_deref().unwrap_or("")
    }

    pub fn upos(&self) -> &'a str {
        &self.token.upos
    }

    pub fn xpos(&self) -> Option<&'a str> {
        self.token.xpos.as_deref()
    }

    /// Declared lexlemma, or the empty string.
    pub fn lexlemma(&self) -> &'a str {
        self.token.lexlemma.as_value().unwrap_or("")
    }

    pub fn is_non_initial(&self) -> bool {
        self.token.is_strong_continuation()
    }

    /// Last member of the strong group.
    pub fn last_member(&self) -> Option<&'a Token> {
        let last = *self.group?.last()?;
        self.sentence.word(last)
    }

    /// Returns true if the token id belongs to the same strong group.
    pub fn in_group(&self, id: u32) -> bool {
        self.group.map(|g| g.contains(&id)).unwrap_or(false)
    }
}

/// Strong group token ids for every grouped token, looked up from prebuilt
/// groups.
pub(crate) fn strong_members(groups: &Groups, token: &Token) -> Option<Vec<u32>> {
    let marker = token.marker(Strength::Strong)?;
    Some(groups.toknums(Strength::Strong, marker.group))
}
