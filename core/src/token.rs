//! Token rows.
//!
//! A token carries the ten dependency-treebank columns followed by the nine
//! lexical-semantic columns.

use crate::{GroupMarker, Slot, TokenNum};

/// One row of a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Row identifier.
    pub num: TokenNum,
    /// Surface form.
    pub form: String,
    /// Lemma.
    pub lemma: String,
    /// Coarse part of speech.
    pub upos: String,
    /// Fine part of speech.
    pub xpos: Option<String>,
    /// Morphological features, kept verbatim.
    pub feats: Option<String>,
    /// Head word (0 for the root). Only ellipsis tokens and supertokens may
    /// lack one.
    pub head: Option<u32>,
    /// Dependency relation to the head.
    pub deprel: Option<String>,
    /// Enhanced dependencies, kept verbatim.
    pub deps: Option<String>,
    /// Miscellaneous column, kept verbatim.
    pub misc: Option<String>,

    /// Strong MWE marker.
    pub smwe: Option<GroupMarker>,
    /// Lexical category of the expression this token opens.
    pub lexcat: Slot,
    /// Set when `lexcat` came from the fallback rule and needs a human look.
    pub lexcat_review: bool,
    /// Lemma of the expression this token opens.
    pub lexlemma: Slot,
    /// Primary supersense.
    pub ss: Option<String>,
    /// Secondary supersense (function, for adpositional construals).
    pub ss2: Option<String>,
    /// Weak MWE marker.
    pub wmwe: Option<GroupMarker>,
    /// Lexical category of the weak expression this token opens.
    pub wcat: Slot,
    /// Lemma of the weak expression this token opens.
    pub wlemma: Slot,
    /// Compact per-token tag.
    pub lextag: Slot,
}

impl Token {
    /// Create an ordinary token with empty optional columns.
    pub fn new(
        num: TokenNum,
        form: impl Into<String>,
        lemma: impl Into<String>,
        upos: impl Into<String>,
    ) -> Self {
        Self {
            num,
            form: form.into(),
            lemma: lemma.into(),
            upos: upos.into(),
            xpos: None,
            feats: None,
            head: None,
            deprel: None,
            deps: None,
            misc: None,
            smwe: None,
            lexcat: Slot::Absent,
            lexcat_review: false,
            lexlemma: Slot::Absent,
            ss: None,
            ss2: None,
            wmwe: None,
            wcat: Slot::Absent,
            wlemma: Slot::Absent,
            lextag: Slot::Absent,
        }
    }

    /// Create an ordinary word token.
    pub fn word(
        id: u32,
        form: impl Into<String>,
        lemma: impl Into<String>,
        upos: impl Into<String>,
    ) -> Self {
        Self::new(TokenNum::Word(id), form, lemma, upos)
    }

    pub fn with_xpos(mut self, xpos: impl Into<String>) -> Self {
        self.xpos = Some(xpos.into());
        self
    }

    pub fn with_head(mut self, head: u32, deprel: impl Into<String>) -> Self {
        self.head = Some(head);
        self.deprel = Some(deprel.into());
        self
    }

    pub fn with_smwe(mut self, group: u32, position: u32) -> Self {
        self.smwe = Some(GroupMarker::new(group, position));
        self
    }

    pub fn with_wmwe(mut self, group: u32, position: u32) -> Self {
        self.wmwe = Some(GroupMarker::new(group, position));
        self
    }

    pub fn with_lexcat(mut self, lexcat: impl Into<String>) -> Self {
        self.lexcat = Slot::value(lexcat);
        self
    }

    pub fn with_lexlemma(mut self, lexlemma: impl Into<String>) -> Self {
        self.lexlemma = Slot::value(lexlemma);
        self
    }

    pub fn with_ss(mut self, ss: impl Into<String>) -> Self {
        self.ss = Some(ss.into());
        self
    }

    pub fn with_ss2(mut self, ss2: impl Into<String>) -> Self {
        self.ss2 = Some(ss2.into());
        self
    }

    /// Mark this token as a non-initial member: lexical columns blank.
    pub fn blank_lexical(mut self) -> Self {
        self.lexcat = Slot::Blank;
        self.lexlemma = Slot::Blank;
        self
    }

    /// The ordinal of an ordinary token.
    pub fn id(&self) -> Option<u32> {
        self.num.word()
    }

    /// Returns true for ordinary tokens (not ellipsis, not supertoken).
    pub fn is_word(&self) -> bool {
        self.num.word().is_some()
    }

    /// Get the marker for a group strength.
    pub fn marker(&self, strength: crate::Strength) -> Option<GroupMarker> {
        match strength {
            crate::Strength::Strong => self.smwe,
            crate::Strength::Weak => self.wmwe,
        }
    }

    /// Set the marker for a group strength.
    pub fn set_marker(&mut self, strength: crate::Strength, marker: Option<GroupMarker>) {
        match strength {
            crate::Strength::Strong => self.smwe = marker,
            crate::Strength::Weak => self.wmwe = marker,
        }
    }

    /// Returns true if the token continues (rather than opens) a strong group.
    pub fn is_strong_continuation(&self) -> bool {
        self.smwe.map(|m| !m.is_initial()).unwrap_or(false)
    }

    /// Text of a column by the name the language configuration uses for
    /// lexlemma validation (`lemma` or `word`).
    pub fn lemma_column(&self, column: LemmaColumn) -> &str {
        match column {
            LemmaColumn::Lemma => &self.lemma,
            LemmaColumn::Word => &self.form,
        }
    }
}

/// Which token column an expression's lexlemma is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LemmaColumn {
    Lemma,
    Word,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Strength;

    #[test]
    fn test_word_token_defaults() {
        // GIVEN/WHEN
        let token = Token::word(3, "dogs", "dog", "NOUN");

        // THEN
        assert_eq!(token.id(), Some(3));
        assert!(token.is_word());
        assert_eq!(token.lexcat, Slot::Absent);
        assert!(token.smwe.is_none());
    }

    #[test]
    fn test_marker_accessors_by_strength() {
        // GIVEN
        let mut token = Token::word(1, "look", "look", "VERB").with_smwe(2, 1);

        // WHEN
        token.set_marker(Strength::Weak, Some(GroupMarker::new(3, 1)));

        // THEN
        assert_eq!(token.marker(Strength::Strong), Some(GroupMarker::new(2, 1)));
        assert_eq!(token.marker(Strength::Weak), Some(GroupMarker::new(3, 1)));
        assert!(!token.is_strong_continuation());
    }

    #[test]
    fn test_lemma_column_selection() {
        let token = Token::word(1, "went", "go", "VERB");
        assert_eq!(token.lemma_column(LemmaColumn::Lemma), "go");
        assert_eq!(token.lemma_column(LemmaColumn::Word), "went");
    }
}
