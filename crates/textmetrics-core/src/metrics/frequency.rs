//! Word frequency ranking.

use std::collections::HashMap;
use std::hash::Hash;

use crate::stopwords::StopWords;

use super::reports::WordFrequency;

/// Rank words by frequency, excluding stop words and non-alphabetic tokens.
///
/// `most_common_words` holds at most `top_n` entries.
#[tracing::instrument(skip(words, stopwords), fields(word_count = words.len()))]
pub fn word_frequency(words: &[String], stopwords: &StopWords, top_n: usize) -> WordFrequency {
    let analyzed: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| is_alphabetic_word(w) && !stopwords.contains(w))
        .collect();

    let ranked = rank_by_count(analyzed.iter().copied());

    WordFrequency {
        unique_words: ranked.len(),
        most_common_words: ranked
            .into_iter()
            .take(top_n)
            .map(|(word, count)| (word.to_string(), count))
            .collect(),
        total_words_analyzed: analyzed.len(),
    }
}

/// Count items and rank them by descending count.
///
/// The sort is stable over first-seen order, so equal counts come out in the
/// order their item first appeared.
pub fn rank_by_count<I, K>(items: I) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash + Clone,
{
    let mut counts = count_first_seen(items);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Count items, keeping them in first-seen order.
pub(crate) fn count_first_seen<I, K>(items: I) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash + Clone,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        if let Some(&slot) = slots.get(&item) {
            counts[slot].1 += 1;
        } else {
            slots.insert(item.clone(), counts.len());
            counts.push((item, 1));
        }
    }

    counts
}

fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}
