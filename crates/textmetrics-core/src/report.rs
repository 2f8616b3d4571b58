//! Report assembly.
//!
//! [`analyze`] is the engine's entry point: it tokenizes the document, runs
//! the five metric analyses, asks the oracle for language and sentiment, and
//! merges everything with [`assemble`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::{
    self, BasicStats, CharacterAnalysis, DEFAULT_TOP_N, ReadabilityScore, SentenceAnalysis,
    WordFrequency,
};
use crate::oracle::{self, LanguageDetection, Oracle, SentimentScores};
use crate::stopwords::StopWords;
use crate::text;

/// Polarity above this is positive, below its negation negative.
const SENTIMENT_THRESHOLD: f64 = 0.1;

/// Tunables for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Words excluded from the frequency ranking.
    pub stopwords: StopWords,
    /// Length of `most_common_words`.
    pub top_words: usize,
    /// Length of `most_common_letters`.
    pub top_letters: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            stopwords: StopWords::english(),
            top_words: DEFAULT_TOP_N,
            top_letters: DEFAULT_TOP_N,
        }
    }
}

/// Sentiment label derived from polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Polarity above 0.1.
    Positive,
    /// Polarity below -0.1.
    Negative,
    /// Anything in between.
    Neutral,
}

impl SentimentLabel {
    /// Classify a polarity value.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > SENTIMENT_THRESHOLD {
            Self::Positive
        } else if polarity < -SENTIMENT_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Lowercase label, identical to the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment block of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentAnalysis {
    /// Polarity in `[-1, 1]`, rounded to three decimals.
    pub polarity: f64,
    /// Subjectivity in `[0, 1]`, rounded to three decimals.
    pub subjectivity: f64,
    /// Label derived from polarity.
    pub sentiment: SentimentLabel,
    /// Polarity mapped onto `[0, 100]`, rounded to one decimal.
    pub polarity_percentage: f64,
}

impl SentimentAnalysis {
    /// Format raw oracle scores for the report.
    pub fn from_scores(scores: SentimentScores) -> Self {
        Self {
            polarity: round3(scores.polarity),
            subjectivity: round3(scores.subjectivity),
            sentiment: SentimentLabel::from_polarity(scores.polarity),
            polarity_percentage: round1((scores.polarity + 1.0) * 50.0),
        }
    }
}

/// The full analysis of one document.
///
/// Identity is content only; persisted IDs belong to whatever stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Counts and averages.
    pub basic_stats: BasicStats,
    /// Oracle-supplied language.
    pub language_detection: LanguageDetection,
    /// Oracle-supplied sentiment, formatted.
    pub sentiment_analysis: SentimentAnalysis,
    /// Flesch Reading Ease.
    pub readability_score: ReadabilityScore,
    /// Content-word ranking.
    pub word_frequency: WordFrequency,
    /// Sentence length distribution.
    pub sentence_analysis: SentenceAnalysis,
    /// Letter usage.
    pub character_analysis: CharacterAnalysis,
}

/// Merge precomputed blocks into a report. No recomputation happens here.
pub fn assemble(
    basic_stats: BasicStats,
    readability_score: ReadabilityScore,
    word_frequency: WordFrequency,
    sentence_analysis: SentenceAnalysis,
    character_analysis: CharacterAnalysis,
    language_detection: LanguageDetection,
    sentiment: SentimentScores,
) -> AnalysisReport {
    AnalysisReport {
        basic_stats,
        language_detection,
        sentiment_analysis: SentimentAnalysis::from_scores(sentiment),
        readability_score,
        word_frequency,
        sentence_analysis,
        character_analysis,
    }
}

/// Run the whole pipeline over a document.
///
/// Whitespace-only documents skip the oracle and carry its fallback values.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze(text: &str, options: &AnalysisOptions, oracle: &dyn Oracle) -> AnalysisReport {
    let tokens = text::tokenize(text);

    let basic = metrics::basic_stats(text, &tokens);
    let readability = metrics::readability(&tokens.words, tokens.sentence_count());
    let frequency = metrics::word_frequency(&tokens.words, &options.stopwords, options.top_words);
    let sentences = metrics::sentence_analysis(&tokens.sentences);
    let characters = metrics::character_analysis(text, options.top_letters);

    let (language, sentiment) = if text.trim().is_empty() {
        (LanguageDetection::undetected(), SentimentScores::NEUTRAL)
    } else {
        (
            oracle::detect_language_or_fallback(oracle, text),
            oracle::score_sentiment_or_fallback(oracle, text),
        )
    };

    tracing::debug!(
        words = basic.word_count,
        sentences = basic.sentence_count,
        flesch = readability.flesch_score,
        language = %language.detected_language,
        "analysis complete"
    );

    assemble(
        basic,
        readability,
        frequency,
        sentences,
        characters,
        language,
        sentiment,
    )
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
