//! Report structs for the metrics pipeline.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Field
//! names are the persisted JSON contract, so renaming one is a breaking change
//! for anything that stored earlier reports.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A ranked `(item, count)` pair. Serializes as a two-element array.
pub type RankedCount = (String, usize);

// -- Basic Stats ------------------------------------------------------------

/// Segmentation counts and simple averages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BasicStats {
    /// Length of the document in Unicode code points.
    pub character_count: usize,
    /// Code points excluding space characters.
    pub character_count_no_spaces: usize,
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of non-empty blocks separated by blank lines.
    pub paragraph_count: usize,
    /// Mean words per sentence (0 when there are no sentences).
    pub average_words_per_sentence: f64,
    /// Mean code points per word (0 when there are no words).
    pub average_characters_per_word: f64,
}

// -- Word Frequency ---------------------------------------------------------

/// Content-word frequency ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordFrequency {
    /// Distinct words left after filtering.
    pub unique_words: usize,
    /// Top words by count, ties in first-seen order.
    pub most_common_words: Vec<RankedCount>,
    /// Word tokens left after filtering.
    pub total_words_analyzed: usize,
}

// -- Sentence Analysis ------------------------------------------------------

/// Sentence length distribution, in words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceAnalysis {
    /// Mean sentence length.
    pub average_sentence_length: f64,
    /// Shortest sentence length.
    pub shortest_sentence: usize,
    /// Longest sentence length.
    pub longest_sentence: usize,
    /// Length of every sentence, in document order.
    pub sentence_lengths: Vec<usize>,
}

// -- Character Analysis -----------------------------------------------------

/// Letter usage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CharacterAnalysis {
    /// Alphabetic characters in the document.
    pub total_letters: usize,
    /// Distinct case-folded letters.
    pub unique_letters: usize,
    /// Top letters by count, ties in first-seen order.
    pub most_common_letters: Vec<RankedCount>,
    /// Count for every case-folded letter, keyed in first-seen order.
    pub letter_distribution: IndexMap<String, usize>,
}
