//! The JSON output document, and reading it back.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use conllulex_core::{Expression, GroupMarker, Metadatum, Sentence, Slot, Token, TokenNum, SENT_ID_KEY};
use conllulex_mwe::Expressions;
use regex_lite::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::{FormatError, FormatResult, RowWriter};

/// Metadata keys that would collide with document fields.
pub const BANNED_METADATA_KEYS: &[&str] = &["toks", "swes", "smwes", "wmwes"];

/// Metadata keys containing any of these are not copied to the document.
const SKIPPED_METADATA: &[&str] = &["newpar", "newdoc", "TODO"];

/// Two adjacent labels joined by `|`.
const CONSTRUAL_PATTERN: &str = r"\b([a-z]\.[A-Za-z/-]+)\|([a-z]\.[A-Za-z/-]+)\b";

static CONSTRUAL: OnceLock<Regex> = OnceLock::new();

fn construal_pattern() -> FormatResult<&'static Regex> {
    if let Some(re) = CONSTRUAL.get() {
        return Ok(re);
    }
    let re = Regex::new(CONSTRUAL_PATTERN).map_err(|e| FormatError::Pattern(e.to_string()))?;
    Ok(CONSTRUAL.get_or_init(|| re))
}

/// Collapse a construal whose two halves are the same label
/// (`p.Locus|p.Locus` becomes `p.Locus`).
pub fn normalize_lextag(lextag: &str) -> FormatResult<String> {
    let re = construal_pattern()?;
    Ok(re
        .replace_all(lextag, |caps: &Captures<'_>| {
            if caps[1] == caps[2] {
                caps[1].to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned())
}

/// How much of the row text to keep in each document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreConllulex {
    #[default]
    None,
    /// Metadata and every row.
    Full,
    /// Rows only, without ellipsis tokens.
    Toks,
}

impl FromStr for StoreConllulex {
    type Err = FormatError;

    fn from_str(s: &str) -> FormatResult<Self> {
        match s {
            "none" => Ok(Self::None),
            "full" => Ok(Self::Full),
            "toks" => Ok(Self::Toks),
            other => Err(FormatError::UnknownStoreMode(other.to_string())),
        }
    }
}

impl fmt::Display for StoreConllulex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Full => write!(f, "full"),
            Self::Toks => write!(f, "toks"),
        }
    }
}

/// Options for building documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    pub include_morph_deps: bool,
    pub include_misc: bool,
    pub store: StoreConllulex,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            include_morph_deps: true,
            include_misc: true,
            store: StoreConllulex::None,
        }
    }
}

impl JsonOptions {
    pub fn with_morph_deps(mut self, include: bool) -> Self {
        self.include_morph_deps = include;
        self
    }

    pub fn with_misc(mut self, include: bool) -> Self {
        self.include_misc = include;
        self
    }

    pub fn with_store(mut self, store: StoreConllulex) -> Self {
        self.store = store;
        self
    }
}

/// The `#` field: an ordinal, or `[n, m, "n.m"]` for ellipsis tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenKey {
    Word(u32),
    Compound(u32, u32, String),
}

impl From<TokenNum> for TokenKey {
    fn from(num: TokenNum) -> Self {
        match num {
            TokenNum::Word(n) => TokenKey::Word(n),
            TokenNum::Ellipsis(n, m) | TokenNum::Range(n, m) => {
                TokenKey::Compound(n, m, num.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphRecord {
    pub feats: Option<String>,
    pub head: Option<u32>,
    pub deprel: Option<String>,
    pub edeps: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalRecord {
    pub smwe: Option<(u32, u32)>,
    pub wmwe: Option<(u32, u32)>,
    pub lextag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    #[serde(rename = "#")]
    pub key: TokenKey,
    pub word: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: Option<String>,
    #[serde(flatten)]
    pub morph: Option<MorphRecord>,
    /// Outer `None` omits the field; inner `None` writes `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misc: Option<Option<String>>,
    #[serde(flatten)]
    pub lexical: Option<LexicalRecord>,
}

/// A single-word or strong multiword expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionRecord {
    pub lexlemma: Option<String>,
    pub lexcat: Option<String>,
    pub ss: Option<String>,
    pub ss2: Option<String>,
    pub toknums: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakExpressionRecord {
    pub lexlemma: Option<String>,
    pub lexcat: Option<String>,
    pub toknums: Vec<u32>,
}

/// One sentence of the output array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceDocument {
    pub sent_id: String,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, Option<String>>,
    pub toks: Vec<TokenRecord>,
    pub etoks: Vec<TokenRecord>,
    pub swes: BTreeMap<u32, ExpressionRecord>,
    pub smwes: BTreeMap<u32, ExpressionRecord>,
    pub wmwes: BTreeMap<u32, WeakExpressionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conllulex: Option<String>,
}

fn slot_value(slot: &Slot) -> Option<String> {
    slot.as_value().map(str::to_string)
}

impl From<&Expression> for ExpressionRecord {
    fn from(e: &Expression) -> Self {
        Self {
            lexlemma: slot_value(&e.lexlemma),
            lexcat: slot_value(&e.lexcat),
            ss: e.ss.clone(),
            ss2: e.ss2.clone(),
            toknums: e.toknums.clone(),
        }
    }
}

impl From<&Expression> for WeakExpressionRecord {
    fn from(e: &Expression) -> Self {
        Self {
            lexlemma: slot_value(&e.lexlemma),
            lexcat: slot_value(&e.lexcat),
            toknums: e.toknums.clone(),
        }
    }
}

fn token_record(token: &Token, options: &JsonOptions) -> FormatResult<TokenRecord> {
    let lexical = if token.is_word() {
        Some(LexicalRecord {
            smwe: token.smwe.map(|m| (m.group, m.position)),
            wmwe: token.wmwe.map(|m| (m.group, m.position)),
            lextag: normalize_lextag(token.lextag.as_column())?,
        })
    } else {
        None
    };
    Ok(TokenRecord {
        key: token.num.into(),
        word: token.form.clone(),
        lemma: token.lemma.clone(),
        upos: token.upos.clone(),
        xpos: token.xpos.clone(),
        morph: options.include_morph_deps.then(|| MorphRecord {
            feats: token.feats.clone(),
            head: token.head,
            deprel: token.deprel.clone(),
            edeps: token.deps.clone(),
        }),
        misc: options.include_misc.then(|| token.misc.clone()),
        lexical,
    })
}

fn stored_rows(sentence: &Sentence, store: StoreConllulex) -> Option<String> {
    let writer = RowWriter::new();
    match store {
        StoreConllulex::None => None,
        StoreConllulex::Full => Some(writer.write_sentence(sentence)),
        StoreConllulex::Toks => Some(
            sentence
                .tokens
                .iter()
                .filter(|t| !t.num.is_ellipsis())
                .map(|t| writer.write_token(t))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    }
}

/// Build one document from a sentence.
pub fn build_document(sentence: &Sentence, options: &JsonOptions) -> FormatResult<SentenceDocument> {
    let metadata = sentence
        .metadata
        .iter()
        .filter(|m| m.key != SENT_ID_KEY)
        .filter(|m| !BANNED_METADATA_KEYS.contains(&m.key.as_str()))
        .filter(|m| !SKIPPED_METADATA.iter().any(|skip| m.key.contains(skip)))
        .map(|m| (m.key.clone(), m.value.clone()))
        .collect();

    let mut toks = Vec::new();
    let mut etoks = Vec::new();
    for token in &sentence.tokens {
        match token.num {
            TokenNum::Word(_) => toks.push(token_record(token, options)?),
            TokenNum::Ellipsis(..) => etoks.push(token_record(token, options)?),
            TokenNum::Range(..) => {}
        }
    }

    let expressions = Expressions::from_sentence(sentence);
    Ok(SentenceDocument {
        sent_id: sentence.sent_id().to_string(),
        metadata,
        toks,
        etoks,
        swes: expressions.swes.iter().map(|(k, e)| (*k, e.into())).collect(),
        smwes: expressions.smwes.iter().map(|(k, e)| (*k, e.into())).collect(),
        wmwes: expressions.wmwes.iter().map(|(k, e)| (*k, e.into())).collect(),
        conllulex: stored_rows(sentence, options.store),
    })
}

/// Serialize documents as a pretty-printed JSON array.
pub fn write_documents(documents: &[SentenceDocument]) -> FormatResult<String> {
    Ok(serde_json::to_string_pretty(documents)?)
}

/// Parse a JSON array written by [`write_documents`].
pub fn read_documents(text: &str) -> FormatResult<Vec<SentenceDocument>> {
    Ok(serde_json::from_str(text)?)
}

fn slot_of(value: &Option<String>) -> Slot {
    value.as_deref().map(Slot::value).unwrap_or_default()
}

fn record_token(sent_id: &str, record: &TokenRecord) -> FormatResult<Token> {
    let num = match &record.key {
        TokenKey::Word(n) => TokenNum::Word(*n),
        TokenKey::Compound(_, _, label) => label
            .parse()
            .map_err(|e| FormatError::document(sent_id, e))?,
    };
    let mut token = Token::new(num, &record.word, &record.lemma, &record.upos);
    token.xpos = record.xpos.clone();
    if let Some(morph) = &record.morph {
        token.feats = morph.feats.clone();
        token.head = morph.head;
        token.deprel = morph.deprel.clone();
        token.deps = morph.edeps.clone();
    }
    token.misc = record.misc.clone().flatten();

    if let Some(lexical) = &record.lexical {
        token.smwe = lexical.smwe.map(|(group, position)| GroupMarker::new(group, position));
        token.wmwe = lexical.wmwe.map(|(group, position)| GroupMarker::new(group, position));
        token.lextag = Slot::from_column(&lexical.lextag, false);
    }
    if token.is_strong_continuation() {
        token.lexcat = Slot::Blank;
        token.lexlemma = Slot::Blank;
    }
    if token.is_word() && !token.wmwe.is_some_and(|m| m.is_initial()) {
        token.wcat = Slot::Blank;
        token.wlemma = Slot::Blank;
    }
    Ok(token)
}

/// Rebuild a sentence from a document.
///
/// Expression fields go back onto the first token of each expression.
/// Ellipsis tokens follow the word they were inserted after. Supertokens
/// are not part of a document and do not come back.
pub fn read_document(document: &SentenceDocument) -> FormatResult<Sentence> {
    let sent_id = document.sent_id.as_str();
    let mut sentence = Sentence::new(sent_id);
    sentence.metadata.extend(document.metadata.iter().map(|(key, value)| Metadatum {
        key: key.clone(),
        value: value.clone(),
    }));

    let mut tokens = document
        .toks
        .iter()
        .chain(&document.etoks)
        .map(|record| record_token(sent_id, record))
        .collect::<FormatResult<Vec<_>>>()?;
    tokens.sort_by_key(|t| match t.num {
        TokenNum::Word(n) => (n, 0),
        TokenNum::Ellipsis(n, m) | TokenNum::Range(n, m) => (n, m),
    });
    sentence.tokens = tokens;

    for record in document.swes.values().chain(document.smwes.values()) {
        let Some(token) = record.toknums.first().and_then(|id| sentence.word_mut(*id)) else {
            continue;
        };
        token.lexlemma = slot_of(&record.lexlemma);
        token.lexcat = slot_of(&record.lexcat);
        token.ss = record.ss.clone();
        token.ss2 = record.ss2.clone();
    }
    for record in document.wmwes.values() {
        let Some(token) = record.toknums.first().and_then(|id| sentence.word_mut(*id)) else {
            continue;
        };
        token.wlemma = slot_of(&record.lexlemma);
        token.wcat = slot_of(&record.lexcat);
    }
    Ok(sentence)
}
