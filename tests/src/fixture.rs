//! Fixture loading.
//!
//! Fixtures are `.conllulex` files under the crate's `fixtures/` directory.

use std::fs;
use std::path::{Path, PathBuf};

use conllulex_core::Sentence;
use conllulex_format::parse_sentences;

use crate::error::{TestError, TestResult};

/// Directory holding the fixture files.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Read a fixture's raw text.
pub fn load_text(name: &str) -> TestResult<String> {
    let path = fixture_path(name);
    fs::read_to_string(&path).map_err(|e| TestError::file_read(&path, e))
}

/// Read and parse a fixture.
pub fn load_fixture(name: &str) -> TestResult<Vec<Sentence>> {
    Ok(parse_sentences(&load_text(name)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        // GIVEN/WHEN
        let streusle = load_fixture("streusle_reviews.conllulex").unwrap();
        let pastrie = load_fixture("pastrie_sparse.conllulex").unwrap();

        // THEN
        assert_eq!(streusle.len(), 2);
        assert_eq!(streusle[0].sent_id(), "reviews-001-1");
        assert_eq!(pastrie.len(), 2);
        assert_eq!(pastrie[1].word_count(), 6);
    }

    #[test]
    fn test_missing_fixture() {
        let err = load_fixture("does_not_exist.conllulex").unwrap_err();
        assert!(matches!(err, TestError::FileRead { .. }));
    }
}
