//! The standard rules.
//!
//! Each rule is a pure function of the context. `Ok(None)` passes control
//! to the next rule.

use conllulex_supersense::{bare_shorthand, is_possessive, is_unresolved, shorthand_lexcat};

use crate::{Inference, LexcatContext, RuleError, RuleResult};

pub const RULE_NON_INITIAL: &str = "non-initial";
pub const RULE_CORPUS_OVERRIDE: &str = "corpus-override";
pub const RULE_SHORTHAND: &str = "shorthand";
pub const RULE_PREPOSITIONAL: &str = "prepositional";
pub const RULE_POS_DEFAULT: &str = "pos-default";
pub const RULE_GROUP_INTERNAL: &str = "group-internal";
pub const RULE_FALLBACK: &str = "fallback";

/// Lexlemma of the infinitive marker.
pub const INFINITIVE_LEMMA: &str = "to";

/// Strong MWEs headed by a determiner that stay determiners.
pub const DETERMINER_IDIOMS: &[&str] = &[
    "a lot",
    "a couple",
    "a few",
    "a little",
    "a bit",
    "a number",
    "a bunch",
];

/// Strong MWEs headed by a determiner that act as pronouns.
pub const PRONOUN_IDIOMS: &[&str] = &["no one", "every one", "every thing", "each other", "some place"];

/// Categories fixed by closed-class fine tags.
fn possessive_or_infinitive(xpos: Option<&str>) -> Option<&'static str> {
    match xpos? {
        "PRP$" | "WP$" => Some("PRON.POSS"),
        "POS" => Some("POSS"),
        "TO" => Some("INF.P"),
        _ => None,
    }
}

/// Category from part of speech alone.
fn pos_category(upos: &str, xpos: Option<&str>, lexlemma: &str) -> Option<&'static str> {
    match upos {
        "AUX" => Some("AUX"),
        "NOUN" | "PROPN" => Some("N"),
        "VERB" => Some("V"),
        "PART" if lexlemma == INFINITIVE_LEMMA => Some("INF"),
        "PART" => Some("ADV"),
        _ if xpos.map(|x| x.starts_with("VB")).unwrap_or(false) => Some("V"),
        _ => None,
    }
}

pub(crate) fn non_initial(ctx: &LexcatContext<'_>) -> RuleResult<Option<Inference>> {
    Ok(ctx.is_non_initial().then_some(Inference::Blank))
}

pub(crate) fn corpus_override(ctx: &LexcatContext<'_>) -> RuleResult<Option<Inference>> {
    let Some(rule) = ctx.lexcat_override else {
        return Ok(None);
    };
    let matched = ctx.ss() == rule.ss && ctx.upos() == rule.upos && ctx.xpos() == Some(rule.xpos.as_str());
    Ok(matched.then(|| Inference::confirmed(&rule.lexcat)))
}

pub(crate) fn shorthand(ctx: &LexcatContext<'_>) -> RuleResult<Option<Inference>> {
    Ok(shorthand_lexcat(bare_shorthand(ctx.ss())).map(Inference::confirmed))
}

pub(crate) fn prepositional(ctx: &LexcatContext<'_>) -> RuleResult<Option<Inference>> {
    let ss = ctx.ss();
    let applies = is_possessive(ss) || is_unresolved(ss) || ss.starts_with("p.") || ctx.upos() == "ADP";
    if !applies {
        return Ok(None);
    }
    if let Some(lexcat) = possessive_or_infinitive(ctx.xpos()) {
        return Ok(Some(Inference::confirmed(lexcat)));
    }
    if is_possessive(ss) {
        let token = ctx.token.id().unwrap_or(0);
        return Err(RuleError::possessive_without_marker(token, ctx.xpos()));
    }
    if ctx.group.is_some() {
        let last_is_adposition = ctx
            .last_member()
            .map(|t| matches!(t.upos.as_str(), "ADP" | "SCONJ"))
            .unwrap_or(false);
        let lexcat = if last_is_adposition { "P" } else { "PP" };
        return Ok(Some(Inference::confirmed(lexcat)));
    }
    Ok(Some(Inference::confirmed("P")))
}

pub(crate) fn pos_default(ctx: &LexcatContext<'_>) -> RuleResult<Option<Inference>> {
    Ok(pos_category(ctx.upos(), ctx.xpos(), ctx.lexlemma()).map(Inference::confirmed))
}

/// Idiomatic determiners first, then a walk up the head chain inside the
/// group. The walk takes at most as many steps as the group has members.
pub(crate) fn group_internal(ctx: &LexcatContext<'_>) -> RuleResult<Option<Inference>> {
    let Some(group) = ctx.group else {
        return Ok(None);
    };

    if ctx.upos() == "DET" {
        let lexlemma = ctx.lexlemma();
        if DETERMINER_IDIOMS.iter().any(|idiom| *idiom == lexlemma) {
            return Ok(Some(Inference::confirmed("DET")));
        }
        if PRONOUN_IDIOMS.iter().any(|idiom| *idiom == lexlemma) {
            return Ok(Some(Inference::confirmed("PRON")));
        }
    }

    let start = ctx.token.id().unwrap_or(0);
    let mut current = ctx.token;
    for _ in 0..group.len() {
        let Some(head) = current
            .head
            .filter(|&h| ctx.in_group(h))
            .and_then(|h| ctx.sentence.word(h))
        else {
            // Head outside the group: the last token reached decides.
            return Ok((current.id() != Some(start))
                .then(|| Inference::needs_review(current.upos.clone())));
        };
        if head.upos == "ADP" {
            let lexcat = possessive_or_infinitive(head.xpos.as_deref()).unwrap_or("P");
            return Ok(Some(Inference::confirmed(lexcat)));
        }
        if let Some(lexcat) = pos_category(&head.upos, head.xpos.as_deref(), ctx.lexlemma()) {
            return Ok(Some(Inference::confirmed(lexcat)));
        }
        current = head;
    }
    Err(RuleError::head_chain_exceeded(start, group.len()))
}

pub(crate) fn fallback(ctx: &LexcatContext<'_>) -> RuleResult<Option<Inference>> {
    Ok(Some(Inference::needs_review(ctx.upos())))
}
