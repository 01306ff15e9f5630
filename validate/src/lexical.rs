//! Lexlemma agreement and category checks.

use std::collections::BTreeSet;

use conllulex_core::{Expression, ExpressionKind, Sentence, Token};
use conllulex_registry::{LanguageConfig, MismatchContext};

use crate::{Finding, FindingKind, Findings};

/// Every lexlemma accepted for an expression whose members have the given
/// lemmas: the space-joined lemmas with each lemma optionally replaced by a
/// whitelisted variant, plus the transformed form of each of those.
pub fn lexlemma_possibilities(config: &LanguageConfig, lemmas: &[&str]) -> BTreeSet<String> {
    let mut joined: Vec<String> = vec![String::new()];
    for (i, lemma) in lemmas.iter().enumerate() {
        let choices: Vec<&str> = std::iter::once(*lemma)
            .chain(config.lexlemma_variants(lemma).iter().map(String::as_str))
            .collect();
        joined = joined
            .iter()
            .flat_map(|prefix| {
                choices.iter().map(move |choice| {
                    if i == 0 {
                        choice.to_string()
                    } else {
                        format!("{} {}", prefix, choice)
                    }
                })
            })
            .collect();
    }
    let transformed: Vec<String> = joined.iter().map(|p| config.transform_lemma(p)).collect();
    joined.into_iter().chain(transformed).collect()
}

fn member_lemmas<'s>(sentence: &'s Sentence, config: &LanguageConfig, toknums: &[u32]) -> Vec<&'s str> {
    toknums
        .iter()
        .filter_map(|id| sentence.word(*id))
        .map(|t| t.lemma_column(config.lemma_column()))
        .collect()
}

/// The declared lexlemma matches one of the derived possibilities.
pub(crate) fn check_lexlemma(
    sentence: &Sentence,
    config: &LanguageConfig,
    expression: &Expression,
    out: &mut Findings,
) {
    let lemmas = member_lemmas(sentence, config, &expression.toknums);
    let possibilities = lexlemma_possibilities(config, &lemmas);
    let joined = lemmas.join(" ");

    let matches = expression
        .lexlemma
        .as_value()
        .map(|declared| {
            possibilities.contains(declared) || possibilities.contains(&config.transform_lemma(declared))
        })
        .unwrap_or(false);
    if matches {
        return;
    }

    let declared = expression.lexlemma.as_column();
    let explanation = match expression.kind {
        ExpressionKind::Single => format!(
            "Single-word expression lemma \"{}\" doesn't match token lemma \"{}\"",
            declared, joined
        ),
        ExpressionKind::Strong => format!(
            "Strong MWE lexlemma \"{}\" doesn't match member lemmas \"{}\"",
            declared, joined
        ),
        ExpressionKind::Weak => format!(
            "Weak MWE lexlemma \"{}\" doesn't match member lemmas \"{}\"",
            declared, joined
        ),
    };
    out.push(
        Finding::error(sentence.sent_id(), FindingKind::LexicalAgreement, explanation)
            .with_expression(expression),
    );
}

/// Category present and in the vocabulary.
pub(crate) fn check_lexcat(
    sentence: &Sentence,
    config: &LanguageConfig,
    expression: &Expression,
    out: &mut Findings,
) {
    let mut push = |explanation: String| {
        out.push(
            Finding::error(sentence.sent_id(), FindingKind::Category, explanation)
                .with_expression(expression),
        );
    };

    let Some(lexcat) = expression.lexcat.as_value() else {
        let what = match expression.kind {
            ExpressionKind::Single => "SWE",
            _ => "SMWE",
        };
        push(format!("{} token lacks a lexcat.", what));
        return;
    };
    // Needs-review categories are raw POS tags awaiting a human decision.
    if !expression.lexcat_review && !config.in_vocabulary(lexcat) {
        push(format!("Lexcat {} is not in the {} vocabulary", lexcat, config.code()));
    }
}

/// Categories reserved for strong MWEs must not sit on a single word.
pub(crate) fn check_mwe_only(
    sentence: &Sentence,
    config: &LanguageConfig,
    expression: &Expression,
    out: &mut Findings,
) {
    let Some(lexcat) = expression.lexcat.as_value() else {
        return;
    };
    if expression.kind == ExpressionKind::Single && config.is_mwe_only(lexcat) {
        out.push(
            Finding::error(
                sentence.sent_id(),
                FindingKind::Category,
                format!("Lexcat {} is only allowed on strong multiword expressions", lexcat),
            )
            .with_expression(expression),
        );
    }
}

/// A single word's coarse POS agrees with its category, directly, through
/// an allowed pair, or through a named exception.
pub(crate) fn check_pos_compatibility(
    sentence: &Sentence,
    config: &LanguageConfig,
    token: &Token,
    expression: &Expression,
    out: &mut Findings,
) {
    let Some(lexcat) = expression.lexcat.as_value() else {
        return;
    };
    if token.upos == lexcat || config.is_allowed_mismatch(&token.upos, lexcat) {
        return;
    }
    let ctx = MismatchContext {
        upos: &token.upos,
        xpos: token.xpos.as_deref(),
        lemma: &token.lemma,
        lexlemma: expression.lexlemma.as_value().unwrap_or(""),
        lexcat,
    };
    if config.matching_exception(&ctx).is_some() {
        return;
    }
    out.push(
        Finding::error(
            sentence.sent_id(),
            FindingKind::Category,
            format!(
                "Single-word expression has UPOS {} incompatible with lexcat {}",
                token.upos, lexcat
            ),
        )
        .with_expression(expression),
    );
}
