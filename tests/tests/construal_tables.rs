//! Every language's construal tables agree with the validator.

use conllulex_core::{Sentence, Token};
use conllulex_registry::{CorpusConfig, LanguageConfig, LANGUAGES};
use conllulex_validate::{FindingKind, Validator};

fn adposition_sentence(ss: &str, ss2: &str) -> Sentence {
    Sentence::new("table-1").with_tokens(vec![Token::word(1, "at", "at", "ADP")
        .with_head(0, "root")
        .with_lexcat("P")
        .with_lexlemma("at")
        .with_ss(ss)
        .with_ss2(ss2)])
}

fn supersense_findings(language: &str, ss: &str, ss2: &str) -> Vec<String> {
    let validator = Validator::new(CorpusConfig::new("tables", language)).unwrap();
    validator
        .check_sentence(&adposition_sentence(ss, ss2))
        .of_kind(FindingKind::Supersense)
        .map(|f| f.explanation.clone())
        .collect()
}

#[test]
fn test_permitted_combos_never_unexpected() {
    for language in LANGUAGES {
        let config = LanguageConfig::for_language(language).unwrap();
        for (ss, ss2) in config.permitted_combos() {
            let findings = supersense_findings(language, ss, ss2);
            assert!(
                !findings.iter().any(|f| f.starts_with("Unexpected construal")),
                "{} {} ~> {}: {:?}",
                language,
                ss,
                ss2,
                findings
            );
        }
    }
}

#[test]
fn test_banned_functions_always_rejected() {
    for language in LANGUAGES {
        let config = LanguageConfig::for_language(language).unwrap();
        for banned in config.banned_functions() {
            let ss = if banned == "p.Circumstance" { "p.Locus" } else { "p.Circumstance" };
            let expected = format!("{} is not allowed as a function in {}", banned, language);
            let findings = supersense_findings(language, ss, banned);
            assert!(findings.contains(&expected), "{}: {:?}", expected, findings);
        }
    }
}

#[test]
fn test_identical_halves_are_never_a_construal() {
    for language in LANGUAGES {
        assert!(supersense_findings(language, "p.Locus", "p.Locus").is_empty(), "{}", language);
    }
}
