//! Supersense relabeling on the way out.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use conllulex_core::{Sentence, Slot};
use regex_lite::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::{FormatError, FormatResult};

/// A namespaced label inside a lextag.
const LABEL_PATTERN: &str = r"\b[a-z]\.[A-Za-z/-]+";

static LABEL: OnceLock<Regex> = OnceLock::new();

fn label_pattern() -> FormatResult<&'static Regex> {
    if let Some(re) = LABEL.get() {
        return Ok(re);
    }
    let re = Regex::new(LABEL_PATTERN).map_err(|e| FormatError::Pattern(e.to_string()))?;
    Ok(LABEL.get_or_init(|| re))
}

/// Label-to-label substitutions. Labels without an entry pass through.
///
/// Read from a JSON object such as `{"p.Goal": "p.Locus"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupersenseMap {
    labels: BTreeMap<String, String>,
}

impl SupersenseMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.labels.insert(from.into(), to.into());
        self
    }

    pub fn from_json(text: &str) -> FormatResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The replacement for a label, or the label itself.
    pub fn map<'a>(&'a self, label: &'a str) -> &'a str {
        self.labels.get(label).map(String::as_str).unwrap_or(label)
    }

    /// Relabel `ss`, `ss2` and the labels inside the lextag of every
    /// ordinary token. Empty slots stay empty.
    pub fn apply(&self, sentence: &mut Sentence) -> FormatResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        let re = label_pattern()?;
        for token in sentence.words_mut() {
            for label in [&mut token.ss, &mut token.ss2].into_iter().flatten() {
                if let Some(replacement) = self.labels.get(label.as_str()) {
                    *label = replacement.clone();
                }
            }
            if let Slot::Value(lextag) = &token.lextag {
                let relabeled = re
                    .replace_all(lextag, |caps: &Captures<'_>| self.map(&caps[0]).to_string())
                    .into_owned();
                token.lextag = Slot::Value(relabeled);
            }
        }
        Ok(())
    }
}
