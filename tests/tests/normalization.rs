//! Normalization scenarios: particle verbs, category checks, construals and
//! group renumbering.

use conllulex_tests::prelude::*;
use pretty_assertions::assert_eq;

fn sentence(sent_id: &str, tokens: Vec<Token>) -> Sentence {
    Sentence::new(sent_id).with_tokens(tokens)
}

mod compound_particle {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input() -> Vec<Sentence> {
        vec![sentence(
            "notes-1",
            vec![
                Token::word(1, "They", "they", "PRON").with_head(2, "nsubj"),
                Token::word(2, "took", "take", "VERB").with_head(0, "root").with_smwe(1, 1),
                Token::word(3, "care", "care", "NOUN").with_head(2, "obj").with_smwe(1, 2),
                Token::word(4, "and", "and", "CCONJ").with_head(5, "cc"),
                Token::word(5, "looked", "look", "VERB").with_head(2, "conj"),
                Token::word(6, "it", "it", "PRON").with_head(5, "obj"),
                Token::word(7, "up", "up", "ADP").with_xpos("RP").with_head(5, "compound:prt"),
            ],
        )]
    }

    pub fn scenario() -> Scenario {
        Scenario::new("compound_particle")
            .sentences(input())
            .enrich_with(&[
                Subtask::MakeCompoundPrtsSmwes,
                Subtask::AddMweMetadatum,
                Subtask::AddLexlemma,
            ])
            .expect(|e| {
                e.compound_groups(1)
                    .meta("notes-1", "mwe", "They took_care and looked_ it _up")
            })
    }

    #[test]
    fn test_particle_joins_its_head_in_a_new_group() {
        // GIVEN/WHEN
        let outcome = scenario().run().unwrap();

        // THEN
        let s = &outcome.sentences[0];
        let marker = |id: u32| s.word(id).and_then(|t| t.smwe).map(|m| (m.group, m.position));
        assert_eq!(marker(5), Some((2, 1)));
        assert_eq!(marker(7), Some((2, 2)));
        assert_eq!(marker(2), Some((1, 1)));
        assert_eq!(s.word(5).unwrap().lexlemma, Slot::value("look up"));
        assert_eq!(s.word(7).unwrap().lexlemma, Slot::Blank);
    }

    #[test]
    fn test_grouped_particle_is_left_alone() {
        // GIVEN
        let mut tokens = input().remove(0).tokens;
        tokens[4] = tokens[4].clone().with_smwe(2, 1);
        tokens[6] = tokens[6].clone().with_smwe(2, 2);

        // WHEN
        let outcome = Scenario::new("grouped_particle")
            .sentences(vec![sentence("notes-1", tokens)])
            .enrich_with(&[Subtask::MakeCompoundPrtsSmwes])
            .expect(|e| e.compound_groups(0))
            .run()
            .unwrap();

        // THEN
        assert_eq!(outcome.sentences[0].word(7).unwrap().smwe.map(|m| m.group), Some(2));
    }
}

mod noun_category {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dogs_bark(noun_lexcat: &str) -> Vec<Sentence> {
        vec![sentence(
            "dogs-1",
            vec![
                Token::word(1, "Dogs", "dog", "NOUN")
                    .with_xpos("NNS")
                    .with_head(2, "nsubj")
                    .with_lexcat(noun_lexcat)
                    .with_lexlemma("dog")
                    .with_ss("n.ANIMAL"),
                Token::word(2, "bark", "bark", "VERB")
                    .with_xpos("VBP")
                    .with_head(0, "root")
                    .with_lexcat("V")
                    .with_lexlemma("bark")
                    .with_ss("v.communication"),
                Token::word(3, ".", ".", "PUNCT")
                    .with_head(2, "punct")
                    .with_lexcat("PUNCT")
                    .with_lexlemma("."),
            ],
        )]
    }

    pub fn scenario() -> Scenario {
        Scenario::new("noun_category")
            .sentences(dogs_bark("N"))
            .enrich_with(&[Subtask::AddMweMetadatum, Subtask::AddLextag])
            .expect(|e| e.clean().kind(FindingKind::Category, 0))
    }

    #[test]
    fn test_common_noun_with_noun_category_passes() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_common_noun_with_adjective_category_fails() {
        Scenario::new("noun_as_adjective")
            .sentences(dogs_bark("ADJ"))
            .enrich_with(&[Subtask::AddMweMetadatum, Subtask::AddLextag])
            .expect(|e| {
                e.blocked()
                    .finding("Single-word expression has UPOS NOUN incompatible with lexcat ADJ")
            })
            .run()
            .unwrap();
    }

    #[test]
    fn test_compatibility_check_can_be_disabled() {
        let options = ConvertOptions::default()
            .with_validation(ValidationOptions::default().with_validate_upos_lextag(false));
        Scenario::new("noun_as_adjective_unchecked")
            .sentences(dogs_bark("ADJ"))
            .enrich_with(&[Subtask::AddMweMetadatum, Subtask::AddLextag])
            .options(options)
            .expect(|e| e.no_finding("incompatible with lexcat"))
            .run()
            .unwrap();
    }
}

mod construals {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sat_at_home(sent_id: &str, ss: &str, ss2: &str) -> Vec<Sentence> {
        vec![sentence(
            sent_id,
            vec![
                Token::word(1, "sat", "sit", "VERB")
                    .with_xpos("VBD")
                    .with_head(0, "root")
                    .with_lexcat("V")
                    .with_lexlemma("sit")
                    .with_ss("v.stative"),
                Token::word(2, "at", "at", "ADP")
                    .with_xpos("IN")
                    .with_head(3, "case")
                    .with_lexcat("P")
                    .with_lexlemma("at")
                    .with_ss(ss)
                    .with_ss2(ss2),
                Token::word(3, "home", "home", "NOUN")
                    .with_xpos("NN")
                    .with_head(1, "obl")
                    .with_lexcat("N")
                    .with_lexlemma("home")
                    .with_ss("n.LOCATION"),
            ],
        )]
    }

    fn construal(name: &str, ss: &str, ss2: &str) -> Scenario {
        Scenario::new(name)
            .sentences(sat_at_home("home-1", ss, ss2))
            .enrich_with(&[Subtask::AddMweMetadatum, Subtask::AddLextag])
    }

    #[test]
    fn test_locus_goal_is_permitted() {
        construal("locus_goal", "p.Locus", "p.Goal")
            .expect(|e| e.clean())
            .run()
            .unwrap();
    }

    #[test]
    fn test_goal_locus_is_permitted() {
        construal("goal_locus", "p.Goal", "p.Locus")
            .expect(|e| e.clean())
            .run()
            .unwrap();
    }

    #[test]
    fn test_circumstance_time_is_rejected_both_ways() {
        construal("circumstance_time", "p.Circumstance", "p.Time")
            .expect(|e| {
                e.blocked()
                    .errors(1)
                    .finding("Unexpected construal: p.Circumstance ~> p.Time")
            })
            .run()
            .unwrap();
        construal("time_circumstance", "p.Time", "p.Circumstance")
            .expect(|e| e.blocked().finding("Unexpected construal: p.Time ~> p.Circumstance"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_unrelated_pair_is_not_a_construal_error() {
        construal("circumstance_whole", "p.Circumstance", "p.Whole")
            .expect(|e| e.no_finding("Unexpected construal"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_banned_function_is_rejected() {
        construal("goal_recipient", "p.Goal", "p.Recipient")
            .expect(|e| e.blocked().finding("p.Recipient is not allowed as a function in en"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_chinese_permits_circumstance_time() {
        let sentences = vec![sentence(
            "zh-doc-1",
            vec![
                Token::word(1, "在", "在", "ADP")
                    .with_xpos("P")
                    .with_head(2, "case")
                    .with_lexcat("P")
                    .with_lexlemma("在")
                    .with_ss("p.Circumstance")
                    .with_ss2("p.Time"),
                Token::word(2, "早上", "早上", "NOUN")
                    .with_xpos("NT")
                    .with_head(0, "root")
                    .with_lexcat("N")
                    .with_lexlemma("早上"),
            ],
        )];

        Scenario::new("zh_circumstance_time")
            .corpus("prince_zh")
            .sentences(sentences)
            .enrich_with(&[Subtask::AddMweMetadatum, Subtask::AddLextag])
            .expect(|e| e.clean())
            .run()
            .unwrap();
    }
}

mod renumbering {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input() -> Vec<Sentence> {
        let words = ["She", "said", "a", "lot", "and", "then", "gave", "up", "."];
        let tokens = (1u32..)
            .zip(words)
            .map(|(id, form)| {
                let token = Token::word(id, form, form.to_lowercase(), "X").with_head(0, "root");
                match id {
                    3 => token.with_smwe(7, 1),
                    4 => token.with_smwe(7, 2),
                    7 => token.with_smwe(3, 1),
                    8 => token.with_smwe(3, 2),
                    _ => token,
                }
            })
            .collect();
        vec![sentence("renumber-1", tokens)]
    }

    pub fn scenario() -> Scenario {
        Scenario::new("renumbering")
            .sentences(input())
            .enrich_with(&[Subtask::RenumberMwes, Subtask::AddMweMetadatum])
            .expect(|e| e.meta("renumber-1", "mwe", "She said a_lot and then gave_up ."))
    }

    #[test]
    fn test_groups_are_numbered_by_first_token() {
        // GIVEN/WHEN
        let outcome = scenario().run().unwrap();

        // THEN
        let s = &outcome.sentences[0];
        let markers: Vec<_> = s
            .words()
            .filter_map(|t| t.smwe.map(|m| (t.id().unwrap(), m.group, m.position)))
            .collect();
        assert_eq!(markers, vec![(3, 1, 1), (4, 1, 2), (7, 2, 1), (8, 2, 2)]);
    }
}
