//! Lexical expression sets derived from the groups.

use std::collections::BTreeMap;

use conllulex_core::{Expression, ExpressionKind, Sentence, Strength, Token};

use crate::Groups;

/// The single-word, strong and weak expressions of a sentence.
///
/// Single-word expressions are keyed by token id, multiword expressions by
/// group id. Annotation fields come from each expression's first token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expressions {
    pub swes: BTreeMap<u32, Expression>,
    pub smwes: BTreeMap<u32, Expression>,
    pub wmwes: BTreeMap<u32, Expression>,
}

impl Expressions {
    /// Derive expressions from a sentence and its groups.
    pub fn collect(sentence: &Sentence, groups: &Groups) -> Self {
        let mut expressions = Expressions::default();

        for token in sentence.words() {
            let Some(id) = token.id() else { continue };
            if token.smwe.is_none() {
                let mut swe = Expression::new(ExpressionKind::Single, vec![id]);
                copy_strong_fields(&mut swe, token);
                expressions.swes.insert(id, swe);
            }
        }

        for (group, toknums) in groups.iter(Strength::Strong) {
            let mut smwe = Expression::new(ExpressionKind::Strong, toknums);
            if let Some(first) = smwe.first().and_then(|id| sentence.word(id)) {
                copy_strong_fields(&mut smwe, first);
            }
            expressions.smwes.insert(group, smwe);
        }

        for (group, toknums) in groups.iter(Strength::Weak) {
            let mut wmwe = Expression::new(ExpressionKind::Weak, toknums);
            if let Some(first) = wmwe.first().and_then(|id| sentence.word(id)) {
                wmwe.lexlemma = first.wlemma.clone();
                wmwe.lexcat = first.wcat.clone();
            }
            expressions.wmwes.insert(group, wmwe);
        }

        expressions
    }

    /// Read groups and derive expressions in one step.
    pub fn from_sentence(sentence: &Sentence) -> Self {
        Self::collect(sentence, &Groups::read(sentence))
    }

    /// Single-word and strong expressions, the ones that carry labels.
    pub fn strong_level(&self) -> impl Iterator<Item = &Expression> {
        self.swes.values().chain(self.smwes.values())
    }

    pub fn all(&self) -> impl Iterator<Item = &Expression> {
        self.strong_level().chain(self.wmwes.values())
    }
}

fn copy_strong_fields(expression: &mut Expression, token: &Token) {
    expression.lexlemma = token.lexlemma.clone();
    expression.lexcat = token.lexcat.clone();
    expression.lexcat_review = token.lexcat_review;
    expression.ss = token.ss.clone();
    expression.ss2 = token.ss2.clone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use conllulex_core::Slot;

    #[test]
    fn test_every_word_in_exactly_one_strong_level_expression() {
        // GIVEN
        let sentence = Sentence::new("s-1").with_tokens(vec![
            Token::word(1, "I", "I", "PRON").with_lexcat("PRON"),
            Token::word(2, "looked", "look", "VERB")
                .with_smwe(1, 1)
                .with_lexcat("V.VPC.full")
                .with_lexlemma("look up")
                .with_ss("v.cognition"),
            Token::word(3, "it", "it", "PRON").with_lexcat("PRON"),
            Token::word(4, "up", "up", "ADP").with_smwe(1, 2).blank_lexical(),
        ]);

        // WHEN
        let expressions = Expressions::from_sentence(&sentence);

        // THEN
        assert_eq!(expressions.swes.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        let smwe = &expressions.smwes[&1];
        assert_eq!(smwe.toknums, vec![2, 4]);
        assert_eq!(smwe.lexlemma, Slot::value("look up"));
        assert_eq!(smwe.ss.as_deref(), Some("v.cognition"));
        let mut covered: Vec<u32> = expressions
            .strong_level()
            .flat_map(|e| e.toknums.iter().copied())
            .collect();
        covered.sort();
        assert_eq!(covered, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_weak_expressions_take_weak_columns() {
        // GIVEN
        let mut first = Token::word(1, "make", "make", "VERB").with_wmwe(1, 1);
        first.wlemma = Slot::value("make decision");
        first.ss = Some("v.cognition".into());
        let sentence = Sentence::new("s-1").with_tokens(vec![
            first,
            Token::word(2, "decision", "decision", "NOUN").with_wmwe(1, 2),
        ]);

        // WHEN
        let expressions = Expressions::from_sentence(&sentence);

        // THEN
        let wmwe = &expressions.wmwes[&1];
        assert_eq!(wmwe.lexlemma, Slot::value("make decision"));
        assert_eq!(wmwe.ss, None);
        assert_eq!(expressions.all().count(), 3);
    }
}
