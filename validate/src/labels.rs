//! Supersense legality for single-word and strong expressions.

use conllulex_core::{Expression, Namespace, Sentence};
use conllulex_registry::{CorpusConfig, LanguageConfig};
use conllulex_supersense::{is_unresolved, legal_labels, Hierarchy};

use crate::{Finding, FindingKind, Findings};

/// Shared read-only inputs of the label checks.
pub(crate) struct LabelContext<'a> {
    pub corpus: &'a CorpusConfig,
    pub language: &'a LanguageConfig,
    pub hierarchy: &'a Hierarchy,
}

/// Legal set, primary presence and pairing rules for one expression. Weak
/// expressions carry no labels and are never passed here.
pub(crate) fn check_labels(
    ctx: &LabelContext<'_>,
    sentence: &Sentence,
    expression: &Expression,
    out: &mut Findings,
) {
    let Some(lexcat) = expression.lexcat.as_value() else {
        return;
    };
    if ctx.language.is_label_check_exempt(lexcat) {
        return;
    }

    let mut push = |kind: FindingKind, explanation: String| {
        out.push(Finding::error(sentence.sent_id(), kind, explanation).with_expression(expression));
    };

    let legal = match legal_labels(lexcat, ctx.language, ctx.hierarchy) {
        Ok(legal) => legal,
        Err(e) => {
            push(FindingKind::Category, e.to_string());
            return;
        }
    };
    let ss = expression.ss.as_deref();
    let ss2 = expression.ss2.as_deref();

    if legal.is_empty() {
        if ss.is_some() || ss2.is_some() {
            push(
                FindingKind::Supersense,
                format!("Lexcat {} must not carry supersenses", lexcat),
            );
        }
        if ctx.language.is_label_bearing(lexcat) {
            push(
                FindingKind::Supersense,
                format!("Lexcat {} has no legal supersenses but requires one", lexcat),
            );
        }
        return;
    }

    let Some(ss) = ss else {
        let annotated = legal
            .namespace()
            .map(|ns| ctx.corpus.is_annotated(ns))
            .unwrap_or(false);
        if annotated {
            push(
                FindingKind::Supersense,
                format!("Lexcat {} requires a supersense", lexcat),
            );
        }
        return;
    };

    if is_unresolved(ss) {
        if ss2.is_some() {
            push(
                FindingKind::Supersense,
                "Unresolved supersense ?? must not have a secondary".to_string(),
            );
        }
        return;
    }

    if !legal.contains(ss) {
        push(
            FindingKind::Supersense,
            format!("Supersense {} is not legal for lexcat {}", ss, lexcat),
        );
    }
    if lexcat == "N" || lexcat.starts_with('V') {
        if ss2.is_some() {
            push(
                FindingKind::Supersense,
                format!("Lexcat {} must not have a secondary supersense", lexcat),
            );
        }
        return;
    }
    if let Some(ss2) = ss2 {
        if !legal.contains(ss2) {
            push(
                FindingKind::Supersense,
                format!("Supersense {} is not legal for lexcat {}", ss2, lexcat),
            );
        }
    }

    if Namespace::of_label(ss) != Some(Namespace::Preposition) {
        return;
    }
    let Some(ss2) = ss2.filter(|s| Namespace::of_label(s) == Some(Namespace::Preposition)) else {
        push(
            FindingKind::Supersense,
            format!("Preposition supersense {} requires a preposition secondary", ss),
        );
        return;
    };
    if ss == ss2 {
        return;
    }
    if ctx.language.is_banned_function(ss2) {
        push(
            FindingKind::Supersense,
            format!("{} is not allowed as a function in {}", ss2, ctx.language.code()),
        );
    }
    if ctx.hierarchy.related(ss, ss2) && !ctx.language.is_permitted_combo(ss, ss2) {
        push(
            FindingKind::Supersense,
            format!("Unexpected construal: {} ~> {}", ss, ss2),
        );
    }
}
