//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier text. The score is clamped to `[0, 100]` and mapped
//! onto seven levels, from "very easy" (90+) down to "very difficult" (<30).
//!
//! Syllables come from a vowel-group heuristic ([`count_syllables`]) that is
//! tuned for English. Other languages still get a score, just a rougher one.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Discrete readability level derived from the Flesch score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ReadabilityLevel {
    /// Score 90 and above.
    #[serde(rename = "very easy")]
    VeryEasy,
    /// Score 80 to 89.9.
    #[serde(rename = "easy")]
    Easy,
    /// Score 70 to 79.9.
    #[serde(rename = "fairly easy")]
    FairlyEasy,
    /// Score 60 to 69.9.
    #[serde(rename = "standard")]
    Standard,
    /// Score 50 to 59.9.
    #[serde(rename = "fairly difficult")]
    FairlyDifficult,
    /// Score 30 to 49.9.
    #[serde(rename = "difficult")]
    Difficult,
    /// Score below 30.
    #[serde(rename = "very difficult")]
    VeryDifficult,
    /// The score could not be computed.
    #[serde(rename = "unscored")]
    Unscored,
}

impl ReadabilityLevel {
    /// Map a clamped Flesch score to its level, first match wins.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    /// Human-readable label, identical to the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "very easy",
            Self::Easy => "easy",
            Self::FairlyEasy => "fairly easy",
            Self::Standard => "standard",
            Self::FairlyDifficult => "fairly difficult",
            Self::Difficult => "difficult",
            Self::VeryDifficult => "very difficult",
            Self::Unscored => "unscored",
        }
    }
}

impl std::fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of readability scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityScore {
    /// Flesch Reading Ease, clamped to `[0, 100]` and rounded to one decimal.
    pub flesch_score: f64,
    /// Level label for the score.
    pub readability_level: ReadabilityLevel,
    /// Total syllables across all words.
    pub syllable_count: usize,
}

impl ReadabilityScore {
    /// The degraded result used when scoring cannot produce a finite number.
    pub const fn unscored() -> Self {
        Self {
            flesch_score: 0.0,
            readability_level: ReadabilityLevel::Unscored,
            syllable_count: 0,
        }
    }
}

/// Score readability of a tokenized document.
///
/// With no words or no sentences the score is `0` (level "very difficult");
/// the syllable count is still reported.
#[tracing::instrument(skip(words), fields(word_count = words.len()))]
pub fn readability(words: &[String], sentence_count: usize) -> ReadabilityScore {
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    let raw = if words.is_empty() || sentence_count == 0 {
        0.0
    } else {
        let words_per_sentence = words.len() as f64 / sentence_count as f64;
        let syllables_per_word = syllable_count as f64 / words.len() as f64;
        206.835 - 1.015f64.mul_add(words_per_sentence, 84.6 * syllables_per_word)
    };

    if !raw.is_finite() {
        tracing::warn!(raw, "readability score is not finite, reporting unscored");
        return ReadabilityScore::unscored();
    }

    let flesch_score = round1(raw.clamp(0.0, 100.0));
    ReadabilityScore {
        flesch_score,
        readability_level: ReadabilityLevel::from_score(flesch_score),
        syllable_count,
    }
}

/// Estimate the syllables in one word.
///
/// Counts transitions from a non-vowel into a vowel (`aeiouy`), drops one for
/// a trailing `e`, and never returns less than 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count: usize = 0;
    let mut on_vowel = false;

    for ch in word.chars() {
        let is_vowel = VOWELS.contains(&ch);
        if is_vowel && !on_vowel {
            count += 1;
        }
        on_vowel = is_vowel;
    }

    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }
    count.max(1)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
