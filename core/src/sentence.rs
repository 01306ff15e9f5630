//! Sentences: ordered metadata plus ordered rows.

use crate::Token;

/// Metadata key holding the sentence identifier.
pub const SENT_ID_KEY: &str = "sent_id";

/// Metadata key holding the rendered MWE bracketing.
pub const MWE_KEY: &str = "mwe";

/// A `# key = value` comment line. Bare comments (`# newpar`) have no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadatum {
    pub key: String,
    pub value: Option<String>,
}

impl Metadatum {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    pub fn bare(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// A sentence as read from the row format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    /// Metadata in file order.
    pub metadata: Vec<Metadatum>,
    /// All rows in file order, including ellipsis tokens and supertokens.
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Create an empty sentence with a `sent_id`.
    pub fn new(sent_id: impl Into<String>) -> Self {
        Self {
            metadata: vec![Metadatum::new(SENT_ID_KEY, sent_id)],
            tokens: Vec::new(),
        }
    }

    pub fn with_tokens(mut self, tokens: Vec<Token>) -> Self {
        self.tokens = tokens;
        self
    }

    /// The sentence identifier, or the empty string when none was given.
    pub fn sent_id(&self) -> &str {
        self.meta(SENT_ID_KEY).unwrap_or("")
    }

    /// Get a metadata value by key.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.key == key)
            .and_then(|m| m.value.as_deref())
    }

    /// Set a metadata value, replacing an existing entry in place or
    /// appending a new one.
    pub fn set_meta(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.metadata.iter_mut().find(|m| m.key == key) {
            Some(entry) => entry.value = Some(value),
            None => self.metadata.push(Metadatum::new(key, value)),
        }
    }

    /// Ordinary tokens only.
    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_word())
    }

    /// Mutable ordinary tokens only.
    pub fn words_mut(&mut self) -> impl Iterator<Item = &mut Token> {
        self.tokens.iter_mut().filter(|t| t.is_word())
    }

    /// Look up an ordinary token by ordinal.
    pub fn word(&self, id: u32) -> Option<&Token> {
        self.words().find(|t| t.id() == Some(id))
    }

    /// Look up an ordinary token by ordinal, mutably.
    pub fn word_mut(&mut self, id: u32) -> Option<&mut Token> {
        self.words_mut().find(|t| t.id() == Some(id))
    }

    /// Number of ordinary tokens.
    pub fn word_count(&self) -> usize {
        self.words().count()
    }
}
