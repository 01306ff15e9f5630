//! End-to-end runs over fixture files: enrichment of sparse input, and
//! conversion of fully annotated input.

use conllulex_format::{parse_sentences, RowWriter, REVIEW_MARK};
use conllulex_lexcat::Cascade;
use conllulex_registry::CorpusConfig;
use conllulex_tests::prelude::*;
use pretty_assertions::assert_eq;

mod sparse_poems {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("sparse_poems")
            .corpus("pastrie")
            .fixture("pastrie_sparse.conllulex")
            .enrich()
            .expect(|e| {
                e.clean()
                    .compound_groups(1)
                    .needs_review(5)
                    .meta("poem-1", "mwe", "I gave_up on you .")
                    .meta("poem-2", "mwe", "Time for him to go .")
            })
    }

    #[test]
    fn test_enriched_poems_convert_cleanly() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_enriched_columns() {
        // GIVEN/WHEN
        let outcome = scenario().run().unwrap();
        let poem1 = &outcome.sentences[0];
        let poem2 = &outcome.sentences[1];

        // THEN
        let gave = poem1.word(2).unwrap();
        assert_eq!(gave.lexcat, Slot::value("V"));
        assert_eq!(gave.lexlemma, Slot::value("give up"));
        assert_eq!(gave.lextag, Slot::value("B-V"));
        assert_eq!(poem1.word(3).unwrap().lextag, Slot::value("I_"));

        let on = poem1.word(4).unwrap();
        assert_eq!(on.lexcat, Slot::value("P"));
        assert_eq!(on.ss.as_deref(), Some("p.Theme"));
        assert_eq!(on.lextag, Slot::value("O-P-p.Theme"));

        // The infinitival `for` shorthand retags the token and is cleared.
        let r#for = poem2.word(2).unwrap();
        assert_eq!(r#for.lexcat, Slot::value("INF"));
        assert_eq!(r#for.upos, "SCONJ");
        assert_eq!(r#for.xpos.as_deref(), Some("CC"));
        assert_eq!(r#for.ss, None);
        assert_eq!(poem2.word(4).unwrap().lexcat, Slot::value("INF"));

        let him = poem2.word(3).unwrap();
        assert_eq!(him.lexcat, Slot::value("PRON"));
        assert!(him.lexcat_review);
    }

    #[test]
    fn test_review_marks_survive_a_row_round_trip() {
        // GIVEN
        let outcome = scenario().run().unwrap();
        let writer = RowWriter::new().with_review_marks(true);
        let text = writer.write_sentences(&outcome.sentences);

        // WHEN
        let reparsed = parse_sentences(&text).unwrap();

        // THEN
        assert_eq!(writer.write_sentences(&reparsed), text);
        let flagged = reparsed
            .iter()
            .flat_map(|s| s.words())
            .filter(|t| t.lexcat_review)
            .count();
        assert_eq!(flagged, 5);
        assert!(text.contains(&format!("\tPRON{}\t", REVIEW_MARK)));
    }

    #[test]
    fn test_unenriched_poems_are_blocked() {
        Scenario::new("raw_poems")
            .corpus("pastrie")
            .fixture("pastrie_sparse.conllulex")
            .expect(|e| e.blocked().finding("SWE token lacks a lexcat."))
            .run()
            .unwrap();
    }
}

mod annotated_reviews {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("annotated_reviews")
            .fixture("streusle_reviews.conllulex")
            .expect(|e| {
                e.clean().custom(|outcome| {
                    outcome
                        .conversion
                        .output
                        .as_deref()
                        .is_some_and(|json| json.contains("\"sent_id\": \"reviews-001-2\""))
                })
            })
    }

    #[test]
    fn test_annotated_reviews_convert_cleanly() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_inference_is_stable_on_annotated_input() {
        // GIVEN
        let mut sentences = load_fixture("streusle_reviews.conllulex").unwrap();
        let cascade = Cascade::standard();
        let corpus = CorpusConfig::for_corpus("streusle").unwrap();

        for sentence in &mut sentences {
            // WHEN
            let first = cascade.infer_sentence(sentence, Some(&corpus)).unwrap();
            for token in sentence.words_mut() {
                if let Some(inference) = token.id().and_then(|id| first.get(&id)) {
                    inference.apply(token);
                }
            }
            let second = cascade.infer_sentence(sentence, Some(&corpus)).unwrap();

            // THEN
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_wrong_mwe_metadatum_is_reported_or_replaced() {
        // GIVEN
        let mut sentences = load_fixture("streusle_reviews.conllulex").unwrap();
        sentences[0].set_meta("mwe", "I looked it up .");

        // WHEN/THEN
        Scenario::new("stale_mwe")
            .sentences(sentences.clone())
            .expect(|e| e.blocked().kind(FindingKind::RenderMismatch, 1))
            .run()
            .unwrap();
        let outcome = Scenario::new("stale_mwe_override")
            .sentences(sentences)
            .options(ConvertOptions::default().with_override_mwe_render(true))
            .expect(|e| e.written().errors(0).warnings(1))
            .run()
            .unwrap();
        assert_eq!(outcome.sentences[0].meta("mwe"), Some("I looked_ it _up ."));
    }

    #[test]
    fn test_forced_output_despite_errors() {
        // GIVEN
        let mut sentences = load_fixture("streusle_reviews.conllulex").unwrap();
        sentences[1].set_meta("sent_id", "reviews-001-5");

        // WHEN/THEN
        Scenario::new("gap_in_numbering")
            .sentences(sentences.clone())
            .expect(|e| {
                e.blocked()
                    .finding("Sentence numbers in document reviews-001 must be consecutive, but 5 follows 1")
            })
            .run()
            .unwrap();
        Scenario::new("gap_in_numbering_forced")
            .sentences(sentences)
            .options(ConvertOptions::default().with_force(true))
            .expect(|e| e.written().errors(1))
            .run()
            .unwrap();
    }
}
