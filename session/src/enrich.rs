//! Enrichment subtasks.
//!
//! Each subtask fills in or rewrites columns of a sparse annotation in
//! place. Subtasks run over the whole corpus one after another, in the order
//! the corpus configuration (or the caller) lists them.

use conllulex_core::{Namespace, Sentence, Slot, Strength, Token, TokenNum, MWE_KEY, SENT_ID_KEY};
use conllulex_format::{Lextagger, MweRenderer};
use conllulex_lexcat::{Cascade, RuleError};
use conllulex_mwe::{attach_compound_particles, renumber, Groups};
use conllulex_registry::{CorpusConfig, LanguageConfig};
use conllulex_supersense::{bare_shorthand, is_possessive, is_shorthand, is_unresolved, SPECIAL_LABELS};
use conllulex_validate::{Finding, FindingKind, Findings};
use tracing::warn;

/// Metadata key that opens a new document.
pub const NEWDOC_KEY: &str = "newdoc id";

/// Clear a secondary `??` that duplicates a primary `??`.
pub fn dedupe_question_marks(sentences: &mut [Sentence]) {
    for token in sentences.iter_mut().flat_map(Sentence::words_mut) {
        let primary = token.ss.as_deref().is_some_and(is_unresolved);
        let secondary = token.ss2.as_deref().is_some_and(is_unresolved);
        if primary && secondary {
            token.ss2 = None;
        }
    }
}

/// Returns the number of groups created.
pub fn make_compound_prts_smwes(sentences: &mut [Sentence]) -> usize {
    sentences
        .iter_mut()
        .map(|sentence| attach_compound_particles(sentence).len())
        .sum()
}

/// Render the `mwe` metadatum for sentences that lack one.
pub fn add_mwe_metadatum(sentences: &mut [Sentence], renderer: &dyn MweRenderer) {
    for sentence in sentences {
        if sentence.meta(MWE_KEY).is_none() {
            let rendered = renderer.render(sentence);
            sentence.set_meta(MWE_KEY, rendered);
        }
    }
}

/// Space-joined lemmas of the members of one group.
fn group_lemma(sentence: &Sentence, config: &LanguageConfig, toknums: &[u32]) -> String {
    toknums
        .iter()
        .filter_map(|id| sentence.word(*id))
        .map(|t| t.lemma_column(config.lemma_column()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expression lemma of every group-initial member of the given strength,
/// keyed by token id.
fn initial_lemmas(sentence: &Sentence, config: &LanguageConfig, strength: Strength) -> Vec<(u32, String)> {
    let groups = Groups::read(sentence);
    groups
        .iter(strength)
        .filter_map(|(_, toknums)| {
            let first = *toknums.first()?;
            Some((first, group_lemma(sentence, config, &toknums)))
        })
        .collect()
}

/// Copy lemmas into lexlemma for single words and join member lemmas for
/// strong groups. Strong groups that already have a lexlemma keep it.
pub fn add_lexlemma(sentences: &mut [Sentence], config: &LanguageConfig) {
    for sentence in sentences {
        let joined = initial_lemmas(sentence, config, Strength::Strong);
        for (id, lexlemma) in joined {
            if let Some(token) = sentence.word_mut(id) {
                if !token.lexlemma.is_value() {
                    token.lexlemma = Slot::Value(lexlemma);
                }
            }
        }
        for token in sentence.words_mut().filter(|t| t.smwe.is_none()) {
            token.lexlemma = Slot::value(token.lemma_column(config.lemma_column()));
        }
    }
}

/// Join member lemmas into the wlemma of every weak group's first token.
pub fn add_wlemma(sentences: &mut [Sentence], config: &LanguageConfig) {
    for sentence in sentences {
        for (id, wlemma) in initial_lemmas(sentence, config, Strength::Weak) {
            if let Some(token) = sentence.word_mut(id) {
                token.wlemma = Slot::Value(wlemma);
            }
        }
    }
}

fn rewrite_labels(sentences: &mut [Sentence], rewrite: impl Fn(&str) -> Option<String>) {
    for token in sentences.iter_mut().flat_map(Sentence::words_mut) {
        for label in [&mut token.ss, &mut token.ss2].into_iter().flatten() {
            if let Some(rewritten) = rewrite(label.as_str()) {
                *label = rewritten;
            }
        }
    }
}

/// Prefix bare labels with `p.`. Special labels and labels that already
/// carry a namespace are left alone.
pub fn prefix_prepositional_supersenses(sentences: &mut [Sentence]) {
    rewrite_labels(sentences, |label| {
        if SPECIAL_LABELS.contains(&label) || Namespace::of_label(label).is_some() {
            return None;
        }
        Some(format!("{}{}", Namespace::Preposition.prefix(), label))
    });
}

/// Uppercase the first letter of bare and `p.` labels: `p.locus` becomes
/// `p.Locus`.
pub fn capitalize_supersenses(sentences: &mut [Sentence]) {
    rewrite_labels(sentences, |label| {
        if is_shorthand(label) || is_unresolved(label) {
            return None;
        }
        let prefix = Namespace::Preposition.prefix();
        let (prefix, name) = match label.strip_prefix(prefix) {
            Some(name) => (prefix, name),
            None if Namespace::of_label(label).is_none() => ("", label),
            None => return None,
        };
        let mut chars = name.chars();
        let first = chars.next()?;
        if first.is_uppercase() {
            return None;
        }
        Some(format!("{}{}{}", prefix, first.to_uppercase(), chars.as_str()))
    });
}

/// Give sentences without a `sent_id` the id `<doc>-<n>`, where `doc` is
/// the most recent `newdoc id` (the corpus name before any) and `n` counts
/// sentences from 1 within that document. Returns the number of ids
/// assigned.
pub fn assign_sent_id(sentences: &mut [Sentence], corpus_name: &str) -> usize {
    let mut doc = corpus_name.to_string();
    let mut position = 0u32;
    let mut assigned = 0;
    for sentence in sentences {
        if let Some(id) = sentence.meta(NEWDOC_KEY) {
            doc = id.to_string();
            position = 0;
        }
        position += 1;
        if sentence.sent_id().is_empty() {
            sentence.set_meta(SENT_ID_KEY, format!("{}-{}", doc, position));
            assigned += 1;
        }
    }
    assigned
}

/// Clear shorthand codes once their category has been inferred. A `for`
/// marked as an infinitival subordinator is retagged `SCONJ`/`CC`. A
/// possessive shorthand on both labels is kept.
fn clear_shorthand(token: &mut Token) {
    let Some(ss) = token.ss.as_deref() else {
        return;
    };
    if !is_shorthand(ss) {
        return;
    }
    if bare_shorthand(ss) == "`i" && token.form == "for" {
        token.upos = "SCONJ".to_string();
        token.xpos = Some("CC".to_string());
    }
    let possessive = is_possessive(ss) && token.ss2.as_deref().is_some_and(is_possessive);
    if !possessive {
        token.ss = None;
        token.ss2 = None;
    }
}

/// A cascade failure as an error finding on its sentence.
fn inference_finding(sent_id: &str, error: &RuleError) -> Finding {
    let kind = match error {
        RuleError::PossessiveWithoutMarker { .. } => FindingKind::Category,
        _ => FindingKind::Structural,
    };
    let finding = Finding::error(sent_id, kind, error.to_string());
    match error.token() {
        Some(id) => finding.with_token(TokenNum::Word(id)),
        None => finding,
    }
}

/// Infer every token's lexcat with the cascade, then clear shorthand codes.
/// Returns the number of tokens whose category needs review.
///
/// A sentence the cascade cannot handle is left as it was and reported in
/// `findings`; the remaining sentences are still enriched.
pub fn add_lexcat(
    sentences: &mut [Sentence],
    cascade: &Cascade,
    corpus: &CorpusConfig,
    findings: &mut Findings,
) -> usize {
    let mut needs_review = 0;
    for sentence in sentences {
        let sent_id = sentence.sent_id().to_string();
        let inferred = match cascade.infer_sentence(sentence, Some(corpus)) {
            Ok(inferred) => inferred,
            Err(e) => {
                warn!(sent_id = %sent_id, error = %e, "lexcat inference failed, sentence left as is");
                findings.push(inference_finding(&sent_id, &e));
                continue;
            }
        };

        for token in sentence.words_mut() {
            let Some(id) = token.id() else { continue };
            if let Some(inference) = inferred.get(&id) {
                inference.apply(token);
                if inference.needs_review_flag() {
                    warn!(
                        sent_id = %sent_id,
                        token = id,
                        lexcat = inference.lexcat().unwrap_or_default(),
                        "lexcat copied from UPOS, needs review"
                    );
                    needs_review += 1;
                }
            }
            clear_shorthand(token);
        }
    }
    needs_review
}

pub fn add_lextag(sentences: &mut [Sentence], lextagger: &dyn Lextagger) {
    for sentence in sentences {
        let lextags = lextagger.lextags(sentence);
        for token in sentence.words_mut() {
            if let Some(tag) = token.id().and_then(|id| lextags.get(&id)) {
                token.lextag = Slot::value(tag.as_str());
            }
        }
    }
}

pub fn renumber_mwes(sentences: &mut [Sentence]) {
    for sentence in sentences {
        renumber(sentence);
    }
}
