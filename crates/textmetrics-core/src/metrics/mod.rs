//! The metrics pipeline.
//!
//! Five independent, stateless analyses over a tokenized document. Each is a
//! pure function in its own module; [`crate::report::analyze`] runs them all,
//! but callers can also invoke them individually.
//!
//! Every ratio in this module defaults to `0` when its denominator is empty,
//! and every ranking is stable: equal counts keep first-seen order.

pub mod basic;
pub mod characters;
pub mod frequency;
pub mod readability;
pub mod reports;
pub mod sentences;

pub use basic::basic_stats;
pub use characters::character_analysis;
pub use frequency::{rank_by_count, word_frequency};
pub use readability::{ReadabilityLevel, ReadabilityScore, count_syllables, readability};
pub use reports::{BasicStats, CharacterAnalysis, RankedCount, SentenceAnalysis, WordFrequency};
pub use sentences::sentence_analysis;

/// Default length of the ranked word and letter lists.
pub const DEFAULT_TOP_N: usize = 10;

/// Divide, returning `0.0` when the denominator is zero.
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
