//! Letter frequency analysis.

use indexmap::IndexMap;

use super::frequency::count_first_seen;
use super::reports::CharacterAnalysis;

/// Count alphabetic characters, case-folded.
///
/// Folding uses the full Unicode lowercase mapping, which can expand one
/// letter into several code points; keys are therefore strings.
/// `most_common_letters` holds at most `top_n` entries.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn character_analysis(text: &str, top_n: usize) -> CharacterAnalysis {
    let letters = text
        .chars()
        .filter(|c| c.is_alphabetic())
        .map(|c| c.to_lowercase().collect::<String>());

    let counts = count_first_seen(letters);
    let letter_distribution: IndexMap<String, usize> = counts.iter().cloned().collect();

    let mut ranked = counts;
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    CharacterAnalysis {
        total_letters: letter_distribution.values().sum(),
        unique_letters: letter_distribution.len(),
        most_common_letters: ranked.into_iter().take(top_n).collect(),
        letter_distribution,
    }
}
