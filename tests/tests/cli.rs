//! Command runs against fixture files, writing into a scratch directory.

use std::fs;
use std::path::PathBuf;

use conllulex_cli::{enrich, to_json, EnrichArgs, ToJsonArgs};
use conllulex_format::StoreConllulex;
use conllulex_tests::prelude::*;
use pretty_assertions::assert_eq;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("conllulex-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn to_json_args(input: PathBuf, output: PathBuf, corpus: &str) -> ToJsonArgs {
    ToJsonArgs {
        input,
        output,
        corpus: corpus.to_string(),
        no_include_morph_deps: false,
        no_include_misc: false,
        no_validate_upos_lextag: false,
        no_validate_type: false,
        store_conllulex: StoreConllulex::None,
        override_mwe_render: false,
        force: false,
        ss_map: None,
    }
}

mod to_json_command {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_annotated_file_is_written() {
        // GIVEN
        let output = scratch("reviews.json");
        let args = to_json_args(fixture_path("streusle_reviews.conllulex"), output.clone(), "streusle");

        // WHEN
        let written = to_json(&args).unwrap();

        // THEN
        assert!(written);
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let documents = json.as_array().unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["sent_id"], "reviews-001-1");
        assert_eq!(documents[0]["smwes"]["1"]["lexlemma"], "look up");
        assert_eq!(documents[0]["smwes"]["1"]["toknums"], serde_json::json!([2, 4]));
        assert_eq!(documents[1]["toks"][2]["lextag"], "O-P-p.Goal");
    }

    #[test]
    fn test_sparse_file_is_not_written() {
        // GIVEN
        let output = scratch("raw-poems.json");
        let _ = fs::remove_file(&output);
        let args = to_json_args(fixture_path("pastrie_sparse.conllulex"), output.clone(), "pastrie");

        // WHEN
        let written = to_json(&args).unwrap();

        // THEN
        assert!(!written);
        assert!(!output.exists());
    }

    #[test]
    fn test_json_output_converts_again_with_relabeling() {
        // GIVEN
        let first = scratch("reviews-first.json");
        let second = scratch("reviews-second.json");
        let labels = scratch("labels.json");
        fs::write(&labels, r#"{"p.Goal": "p.Destination"}"#).unwrap();
        to_json(&to_json_args(fixture_path("streusle_reviews.conllulex"), first.clone(), "streusle")).unwrap();
        let mut args = to_json_args(first, second.clone(), "streusle");
        args.no_include_morph_deps = true;
        args.ss_map = Some(labels);

        // WHEN
        let written = to_json(&args).unwrap();

        // THEN
        assert!(written);
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&second).unwrap()).unwrap();
        let documents = json.as_array().unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["smwes"]["1"]["lexlemma"], "look up");
        assert_eq!(documents[1]["toks"][2]["lextag"], "O-P-p.Destination");
        assert!(documents[1]["toks"][2].get("head").is_none());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let args = to_json_args(fixture_path("nope.conllulex"), scratch("nope.json"), "streusle");
        let err = to_json(&args).unwrap_err();
        assert!(err.to_string().starts_with("cannot read"));
    }
}

mod enrich_command {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_enrich_then_convert() {
        // GIVEN
        let enriched = scratch("poems.conllulex");
        let json = scratch("poems.json");
        let args = EnrichArgs {
            input: fixture_path("pastrie_sparse.conllulex"),
            output: enriched.clone(),
            corpus: "pastrie".to_string(),
            subtasks: None,
            mark_review: false,
        };

        // WHEN
        enrich(&args).unwrap();
        let written = to_json(&to_json_args(enriched.clone(), json.clone(), "pastrie")).unwrap();

        // THEN
        assert!(written);
        let rows = fs::read_to_string(&enriched).unwrap();
        assert!(rows.contains("# mwe = I gave_up on you ."));
        assert!(!rows.contains("PRON!"));
    }

    #[test]
    fn test_enrich_with_named_subtasks() {
        // GIVEN
        let enriched = scratch("poems-lemmas.conllulex");
        let args = EnrichArgs {
            input: fixture_path("pastrie_sparse.conllulex"),
            output: enriched.clone(),
            corpus: "pastrie".to_string(),
            subtasks: Some("add_lexlemma, add_mwe_metadatum".to_string()),
            mark_review: false,
        };

        // WHEN
        enrich(&args).unwrap();

        // THEN
        let sentences = conllulex_format::parse_sentences(&fs::read_to_string(&enriched).unwrap()).unwrap();
        let gave = sentences[0].word(2).unwrap();
        assert_eq!(gave.lexlemma, Slot::value("give"));
        assert_eq!(gave.lexcat, Slot::Absent);
    }

    #[test]
    fn test_unknown_subtask_is_rejected() {
        let args = EnrichArgs {
            input: fixture_path("pastrie_sparse.conllulex"),
            output: scratch("never.conllulex"),
            corpus: "pastrie".to_string(),
            subtasks: Some("add_lexlemma,make_coffee".to_string()),
            mark_review: false,
        };
        let err = enrich(&args).unwrap_err();
        assert_eq!(err.to_string(), "Unknown enrichment subtask: make_coffee");
    }
}
