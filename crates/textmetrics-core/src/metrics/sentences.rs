//! Sentence length distribution.

use crate::text;

use super::ratio;
use super::reports::SentenceAnalysis;

/// Measure every sentence in words.
///
/// Each sentence is re-tokenized with [`text::extract_words`], the same rule
/// the document-level word count uses.
#[tracing::instrument(skip_all, fields(sentence_count = sentences.len()))]
pub fn sentence_analysis(sentences: &[&str]) -> SentenceAnalysis {
    if sentences.is_empty() {
        return SentenceAnalysis::default();
    }

    let lengths: Vec<usize> = sentences
        .iter()
        .map(|s| text::extract_words(s).len())
        .collect();

    let total: usize = lengths.iter().sum();

    SentenceAnalysis {
        average_sentence_length: ratio(total, lengths.len()),
        shortest_sentence: lengths.iter().copied().min().unwrap_or(0),
        longest_sentence: lengths.iter().copied().max().unwrap_or(0),
        sentence_lengths: lengths,
    }
}
