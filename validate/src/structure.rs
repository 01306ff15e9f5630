//! Structural checks: numbering, heads, metadata keys, group markers and
//! column placement.

use conllulex_core::{Sentence, Strength, Token};
use conllulex_format::BANNED_METADATA_KEYS;
use conllulex_mwe::Groups;

use crate::{Finding, FindingKind, Findings};

fn structural(sentence: &Sentence, explanation: impl Into<String>) -> Finding {
    Finding::error(sentence.sent_id(), FindingKind::Structural, explanation)
}

pub(crate) fn check_sent_id(sentence: &Sentence, out: &mut Findings) {
    if sentence.sent_id().is_empty() {
        out.push(structural(sentence, "Sentence has no sent_id"));
    }
}

/// Ordinary tokens are numbered 1, 2, 3... with no gaps.
pub(crate) fn check_numbering(sentence: &Sentence, out: &mut Findings) {
    for (expected, token) in (1u32..).zip(sentence.words()) {
        if token.id() != Some(expected) {
            out.push(
                structural(
                    sentence,
                    format!(
                        "Token numbering must start at 1 and increase by 1, but found {} where {} was expected",
                        token.num, expected
                    ),
                )
                .with_token(token.num),
            );
            return;
        }
    }
}

pub(crate) fn check_heads(sentence: &Sentence, out: &mut Findings) {
    let count = sentence.word_count() as u32;
    for token in sentence.words() {
        match token.head {
            None => out.push(
                structural(sentence, "Only ellipsis tokens and supertokens are allowed to not have a head.")
                    .with_token(token.num),
            ),
            Some(head) if head > count => out.push(
                structural(sentence, format!("Head {} is outside the sentence", head)).with_token(token.num),
            ),
            Some(_) => {}
        }
        if token.deprel.is_none() {
            out.push(
                structural(sentence, "Only ellipsis tokens and supertokens are allowed to not have a deprel")
                    .with_token(token.num),
            );
        }
    }
}

pub(crate) fn check_metadata_keys(sentence: &Sentence, out: &mut Findings) {
    let banned = sentence
        .metadata
        .iter()
        .any(|m| BANNED_METADATA_KEYS.contains(&m.key.as_str()));
    if banned {
        out.push(structural(
            sentence,
            "\"toks\", \"swes\", \"smwes\", and \"wmwes\" are not allowed to be metadata keys",
        ));
    }
}

pub(crate) fn check_groups(sentence: &Sentence, groups: &Groups, out: &mut Findings) {
    for problem in groups.problems() {
        out.push(structural(sentence, problem.to_string()));
    }
}

/// Only group-initial tokens carry expression data.
fn check_token_columns(sentence: &Sentence, token: &Token, out: &mut Findings) {
    let mut push = |explanation: String| {
        out.push(structural(sentence, explanation).with_token(token.num));
    };

    if token.is_strong_continuation() {
        if token.lexlemma.is_value() {
            push("Non-initial tokens in SMWEs should always have lexlemma '_'.".to_string());
        }
        if token.lexcat.is_value() {
            push("Non-initial tokens in SMWEs should always have lexcat '_'.".to_string());
        }
        if token.ss.is_some() || token.ss2.is_some() {
            push("Non-initial tokens in SMWEs should not carry supersenses.".to_string());
        }
    }

    match token.marker(Strength::Weak) {
        Some(marker) if marker.is_initial() => {
            if !token.wlemma.is_value() {
                push("Beginning of a WMWE must have a wlemma.".to_string());
            }
        }
        Some(_) => {
            if token.wlemma.is_value() {
                push("Non-initial tokens in WMWEs should always have wlemma '_'.".to_string());
            }
            if token.wcat.is_value() {
                push("Non-initial tokens in WMWEs should always have wcat '_'.".to_string());
            }
        }
        None => {
            if let Some(wlemma) = token.wlemma.as_value() {
                push(format!(
                    "wlemma should be _ if token does not belong to WMWE, but token has wlemma value: {}",
                    wlemma
                ));
            }
            if let Some(wcat) = token.wcat.as_value() {
                push(format!(
                    "wcat should be _ if token does not belong to WMWE, but token has wcat value: {}",
                    wcat
                ));
            }
        }
    }
}

pub(crate) fn check_columns(sentence: &Sentence, out: &mut Findings) {
    for token in sentence.words() {
        check_token_columns(sentence, token, out);
    }
}
