//! Ordered rule evaluation.

use std::collections::BTreeMap;
use std::fmt;

use conllulex_core::Sentence;
use conllulex_mwe::Groups;
use conllulex_registry::CorpusConfig;

use crate::context::strong_members;
use crate::rules::{
    corpus_override, fallback, group_internal, non_initial, pos_default, prepositional, shorthand,
    RULE_CORPUS_OVERRIDE, RULE_FALLBACK, RULE_GROUP_INTERNAL, RULE_NON_INITIAL, RULE_POS_DEFAULT,
    RULE_PREPOSITIONAL, RULE_SHORTHAND,
};
use crate::{Inference, LexcatContext, RuleError, RuleResult};

/// A rule: `Ok(None)` defers to the next rule.
pub type RuleFn = fn(&LexcatContext<'_>) -> RuleResult<Option<Inference>>;

/// A named rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: RuleFn,
}

impl Rule {
    pub fn new(name: &'static str, apply: RuleFn) -> Self {
        Self { name, apply }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

/// An ordered rule list. The first rule that returns a result wins.
#[derive(Debug, Clone)]
pub struct Cascade {
    rules: Vec<Rule>,
}

impl Default for Cascade {
    fn default() -> Self {
        Self::standard()
    }
}

impl Cascade {
    /// The standard rule order.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule::new(RULE_NON_INITIAL, non_initial),
                Rule::new(RULE_CORPUS_OVERRIDE, corpus_override),
                Rule::new(RULE_SHORTHAND, shorthand),
                Rule::new(RULE_PREPOSITIONAL, prepositional),
                Rule::new(RULE_POS_DEFAULT, pos_default),
                Rule::new(RULE_GROUP_INTERNAL, group_internal),
                Rule::new(RULE_FALLBACK, fallback),
            ],
        }
    }

    /// Insert a rule immediately before the rule called `before`.
    pub fn insert_before(&mut self, before: &str, rule: Rule) -> RuleResult<()> {
        let index = self
            .rules
            .iter()
            .position(|r| r.name == before)
            .ok_or_else(|| RuleError::unknown_rule(before))?;
        self.rules.insert(index, rule);
        Ok(())
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    /// Evaluate the rules for one token. Returns the winning rule's name
    /// alongside its result.
    pub fn infer(&self, ctx: &LexcatContext<'_>) -> RuleResult<(&'static str, Inference)> {
        for rule in &self.rules {
            if let Some(inference) = (rule.apply)(ctx)? {
                return Ok((rule.name, inference));
            }
        }
        // The standard list ends in a rule that always matches.
        Ok((RULE_FALLBACK, Inference::needs_review(ctx.upos())))
    }

    /// Infer a category for every ordinary token of a sentence, keyed by
    /// token id.
    pub fn infer_sentence(
        &self,
        sentence: &Sentence,
        corpus: Option<&CorpusConfig>,
    ) -> RuleResult<BTreeMap<u32, Inference>> {
        let groups = Groups::read(sentence);
        let lexcat_override = corpus.and_then(CorpusConfig::lexcat_override);

        let mut inferred = BTreeMap::new();
        for token in sentence.words() {
            let Some(id) = token.id() else { continue };
            let members = strong_members(&groups, token);
            let ctx = LexcatContext::new(sentence, token, members.as_deref())
                .with_override(lexcat_override);
            let (_, inference) = self.infer(&ctx)?;
            inferred.insert(id, inference);
        }
        Ok(inferred)
    }
}
