//! Stop-word sets for word frequency analysis.
//!
//! The set is an explicit input to [`word_frequency`](crate::metrics::word_frequency);
//! nothing in the engine reads a global list. [`StopWords::english`] is the
//! documented default.

use std::collections::HashSet;

/// English stop words.
///
/// The common English function-word list, minus contraction forms: the
/// tokenizer splits on apostrophes, so only the fragments (`don`, `t`, `ll`,
/// ...) can ever match and those are listed.
pub const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who",
    "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and",
    "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for", "with",
    "about", "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don", "should",
    "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn", "hadn",
    "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn", "weren",
    "won", "wouldn",
];

/// A case-insensitive set of words excluded from frequency ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The default English set.
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// An empty set: nothing is filtered.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary words. Entries are trimmed and lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::none();
        set.extend(words);
        set
    }

    /// Parse a word list: one word per line, `#` starts a comment.
    pub fn parse_list(list: &str) -> Self {
        Self::from_words(
            list.lines()
                .map(|line| line.split('#').next().unwrap_or_default()),
        )
    }

    /// Add words to the set.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    /// Whether `word` is a stop word. Expects a lowercase token.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
