//! Corpus-level sentence id checks.

use std::collections::BTreeSet;

use conllulex_core::Sentence;
use conllulex_registry::CorpusConfig;

use crate::{Finding, FindingKind, Findings};

pub(crate) fn check_sentence_ids(corpus: &CorpusConfig, sentences: &[Sentence], out: &mut Findings) {
    let numbered = corpus.requires_numbers_from_1() || corpus.requires_consecutive_numbers();
    let scheme = corpus.sent_id_scheme();
    let mut seen = BTreeSet::new();
    let mut previous: Option<(&str, u32)> = None;

    for sentence in sentences {
        let sent_id = sentence.sent_id();
        if sent_id.is_empty() {
            continue;
        }
        let mut push = |explanation: String| {
            out.push(Finding::error(sent_id, FindingKind::Structural, explanation));
        };

        if !seen.insert(sent_id) {
            push(format!("Duplicate sent_id: {}", sent_id));
        }
        if !numbered {
            continue;
        }

        let Some((doc, num)) = scheme.split(sent_id) else {
            push(format!("sent_id {} has no sentence number", sent_id));
            continue;
        };
        match previous {
            Some((prev_doc, prev_num)) if prev_doc == doc => {
                if corpus.requires_consecutive_numbers() && num != prev_num + 1 {
                    push(format!(
                        "Sentence numbers in document {} must be consecutive, but {} follows {}",
                        doc, num, prev_num
                    ));
                }
            }
            _ => {
                if corpus.requires_numbers_from_1() && num != 1 {
                    push(format!(
                        "Sentence numbering in document {} must start at 1, but starts at {}",
                        doc, num
                    ));
                }
            }
        }
        previous = Some((doc, num));
    }
}
