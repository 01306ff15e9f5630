//! Reconstruction checks: recorded lextags and `mwe` rendering against what
//! the token columns imply.

use conllulex_core::{Sentence, MWE_KEY};
use conllulex_format::{normalize_lextag, Lextagger, MweRenderer};

use crate::{Finding, FindingKind, Findings};

pub(crate) fn check_lextags(sentence: &Sentence, lextagger: &dyn Lextagger, out: &mut Findings) {
    let expected = lextagger.lextags(sentence);
    for token in sentence.words() {
        let Some(id) = token.id() else { continue };
        let Some(expected) = expected.get(&id) else { continue };
        let explanation = match token.lextag.as_value() {
            None => format!("Token has no lextag, expected {}", expected),
            Some(recorded) => {
                let recorded = normalize_lextag(recorded).unwrap_or_else(|_| recorded.to_string());
                if &recorded == expected {
                    continue;
                }
                format!("Lextag {} does not match expected {}", recorded, expected)
            }
        };
        out.push(
            Finding::error(sentence.sent_id(), FindingKind::TagConsistency, explanation)
                .with_token(token.num),
        );
    }
}

pub(crate) fn check_rendering(sentence: &Sentence, renderer: &dyn MweRenderer, out: &mut Findings) {
    let expected = renderer.render(sentence);
    let recorded = sentence.meta(MWE_KEY);
    if recorded == Some(expected.as_str()) {
        return;
    }
    out.push(Finding::error(
        sentence.sent_id(),
        FindingKind::RenderMismatch,
        format!(
            "MWE rendering {:?} does not match expected {:?}",
            recorded.unwrap_or(""),
            expected
        ),
    ));
}
