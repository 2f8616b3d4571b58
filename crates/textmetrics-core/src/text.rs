//! Tokenization.
//!
//! Provides word extraction, sentence splitting, and paragraph splitting for
//! use by the metrics pipeline. Every function here is total: input without
//! recognizable tokens yields empty output, never an error.
//!
//! # Sentence rule
//!
//! A run of `.`, `!` or `?` (optionally followed by closing quotes or
//! brackets) ends a sentence when the next character is whitespace or the end
//! of the text. Anything else after the terminator keeps the sentence open, so
//! `3.14` and `example.com` do not split. Abbreviations are not special-cased.

use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// Two or more consecutive line breaks.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){2,}").expect("valid regex"));

/// Words and sentences derived from one document.
///
/// Sentences borrow from the document; words are lowercased copies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet<'a> {
    /// Lowercase word tokens in document order.
    pub words: Vec<String>,
    /// Trimmed sentence slices in document order.
    pub sentences: Vec<&'a str>,
}

impl TokenSet<'_> {
    /// Number of word tokens.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

/// Tokenize a document into words and sentences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> TokenSet<'_> {
    let tokens = TokenSet {
        words: extract_words(text),
        sentences: split_sentences(text),
    };
    tracing::debug!(
        words = tokens.word_count(),
        sentences = tokens.sentence_count(),
        "tokenized document"
    );
    tokens
}

/// Extract lowercase word tokens.
///
/// The text is segmented on Unicode word boundaries and each segment is split
/// again on any non-alphanumeric character, so apostrophes and inner
/// punctuation separate tokens (`don't` yields `don` and `t`).
pub fn extract_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .unicode_words()
        .flat_map(|segment| segment.split(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Split text into trimmed sentence slices.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_sentence_terminator(ch) {
            continue;
        }

        let mut end = idx + ch.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !is_sentence_terminator(next) && !is_closing_mark(next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }

        if chars.peek().is_none_or(|&(_, next)| next.is_whitespace()) {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// Split text into paragraphs (separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closing_mark(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}' | '\u{00BB}')
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}
