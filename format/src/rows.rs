//! The 19-column row format.
//!
//! Ten dependency-treebank columns, then `smwe lexcat lexlemma ss ss2 wmwe
//! wcat wlemma lextag`. `# key = value` comment lines carry metadata and a
//! blank line ends a sentence.

use conllulex_core::{
    CoreError, GroupMarker, Metadatum, Sentence, Slot, Token, TokenNum, PLACEHOLDER,
};

use crate::{FormatError, FormatResult};

/// Columns per token row.
pub const COLUMN_COUNT: usize = 19;

/// Suffix marking a lexcat that needs review.
pub const REVIEW_MARK: char = '!';

fn optional(raw: &str) -> Option<String> {
    (raw != PLACEHOLDER).then(|| raw.to_string())
}

fn marker(raw: &str, line: usize) -> FormatResult<Option<GroupMarker>> {
    if raw == PLACEHOLDER {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e| FormatError::field(line, e))
}

fn head(raw: &str, line: usize) -> FormatResult<Option<u32>> {
    if raw == PLACEHOLDER {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| FormatError::field(line, CoreError::InvalidHead(raw.to_string())))
}

fn parse_token(row: &str, line: usize) -> FormatResult<Token> {
    let cols: Vec<&str> = row.split('\t').collect();
    if cols.len() != COLUMN_COUNT {
        return Err(FormatError::ColumnCount {
            line,
            found: cols.len(),
        });
    }

    let num: TokenNum = cols[0].parse().map_err(|e| FormatError::field(line, e))?;
    let mut token = Token::new(num, cols[1], cols[2], cols[3]);
    token.xpos = optional(cols[4]);
    token.feats = optional(cols[5]);
    token.head = head(cols[6], line)?;
    token.deprel = optional(cols[7]);
    token.deps = optional(cols[8]);
    token.misc = optional(cols[9]);

    token.smwe = marker(cols[10], line)?;
    token.wmwe = marker(cols[15], line)?;

    let strong_continuation = token.is_strong_continuation();
    let (lexcat, review) = match cols[11].strip_suffix(REVIEW_MARK) {
        Some(stripped) if !stripped.is_empty() => (stripped, true),
        _ => (cols[11], false),
    };
    token.lexcat = Slot::from_column(lexcat, strong_continuation);
    token.lexcat_review = review;
    token.lexlemma = Slot::from_column(cols[12], strong_continuation);
    token.ss = optional(cols[13]);
    token.ss2 = optional(cols[14]);

    let weak_placeholder = token.is_word() && token.wmwe.map(|m| !m.is_initial()).unwrap_or(true);
    token.wcat = Slot::from_column(cols[16], weak_placeholder);
    token.wlemma = Slot::from_column(cols[17], weak_placeholder);
    token.lextag = Slot::from_column(cols[18], false);
    Ok(token)
}

fn parse_metadatum(comment: &str) -> Metadatum {
    let body = comment.trim_start_matches('#').trim();
    match body.split_once(" = ") {
        Some((key, value)) => Metadatum::new(key.trim(), value.trim()),
        None => match body.strip_suffix(" =") {
            Some(key) => Metadatum::new(key.trim(), ""),
            None => Metadatum::bare(body),
        },
    }
}

/// Parse every sentence in a file's text.
pub fn parse_sentences(text: &str) -> FormatResult<Vec<Sentence>> {
    let mut sentences = Vec::new();
    let mut current = Sentence::default();
    let mut started_at = 0;

    let mut flush = |current: &mut Sentence, line: usize| -> FormatResult<()> {
        if current.tokens.is_empty() {
            if !current.metadata.is_empty() {
                return Err(FormatError::EmptySentence { line });
            }
            return Ok(());
        }
        sentences.push(std::mem::take(current));
        Ok(())
    };

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let row = raw.trim_end_matches('\r');
        if row.trim().is_empty() {
            flush(&mut current, started_at)?;
            continue;
        }
        if current.tokens.is_empty() && current.metadata.is_empty() {
            started_at = line;
        }
        if row.starts_with('#') {
            current.metadata.push(parse_metadatum(row));
        } else {
            current.tokens.push(parse_token(row, line)?);
        }
    }
    flush(&mut current, started_at)?;
    Ok(sentences)
}

/// Serializes sentences back to rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowWriter {
    review_marks: bool,
}

impl RowWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suffix needs-review categories with `!`.
    pub fn with_review_marks(mut self, enabled: bool) -> Self {
        self.review_marks = enabled;
        self
    }

    /// One token as a tab-separated row.
    pub fn write_token(&self, token: &Token) -> String {
        let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
        let marker = |m: &Option<GroupMarker>| {
            m.map(|m| m.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        };
        let mut lexcat = token.lexcat.as_column().to_string();
        if self.review_marks && token.lexcat_review && token.lexcat.is_value() {
            lexcat.push(REVIEW_MARK);
        }

        [
            token.num.to_string(),
            token.form.clone(),
            token.lemma.clone(),
            token.upos.clone(),
            opt(&token.xpos),
            opt(&token.feats),
            token
                .head
                .map(|h| h.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            opt(&token.deprel),
            opt(&token.deps),
            opt(&token.misc),
            marker(&token.smwe),
            lexcat,
            token.lexlemma.as_column().to_string(),
            opt(&token.ss),
            opt(&token.ss2),
            marker(&token.wmwe),
            token.wcat.as_column().to_string(),
            token.wlemma.as_column().to_string(),
            token.lextag.as_column().to_string(),
        ]
        .join("\t")
    }

    /// One sentence: metadata lines, token rows, then a blank line.
    pub fn write_sentence(&self, sentence: &Sentence) -> String {
        let mut out = String::new();
        for m in &sentence.metadata {
            match &m.value {
                Some(value) => out.push_str(&format!("# {} = {}\n", m.key, value)),
                None => out.push_str(&format!("# {}\n", m.key)),
            }
        }
        for token in &sentence.tokens {
            out.push_str(&self.write_token(token));
            out.push('\n');
        }
        out.push('\n');
        out
    }

    pub fn write_sentences(&self, sentences: &[Sentence]) -> String {
        sentences.iter().map(|s| self.write_sentence(s)).collect()
    }
}
