//! Language and sentiment oracle interface.
//!
//! Language identification and sentiment polarity are not computed by this
//! crate. They come from an [`Oracle`] supplied by the caller, and the engine
//! only folds the answers into the report.
//!
//! The `*_or_fallback` adapters are the only way the engine calls an oracle.
//! They fail closed: any error, or a score outside its documented range,
//! becomes the fallback value and a `warn` event.

use std::collections::HashMap;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};

/// Display names for the language codes the dashboard knows about.
static LANGUAGE_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("en", "English"),
        ("ja", "Japanese"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("it", "Italian"),
        ("pt", "Portuguese"),
        ("ru", "Russian"),
        ("zh", "Chinese"),
        ("ko", "Korean"),
    ]
    .into_iter()
    .collect()
});

/// Detected document language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LanguageDetection {
    /// Language code (ISO 639-1 where known), or `unknown`.
    pub detected_language: String,
    /// Display name for the language.
    pub language_name: String,
}

impl LanguageDetection {
    /// The fail-closed value.
    pub fn undetected() -> Self {
        Self {
            detected_language: "unknown".to_string(),
            language_name: "undetected".to_string(),
        }
    }

    /// Build a detection from a code, filling the display name from the
    /// built-in table. Unknown codes get `language code: <code>`.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_lowercase();
        let language_name = LANGUAGE_NAMES
            .get(code.as_str())
            .map_or_else(|| format!("language code: {code}"), |name| (*name).to_string());
        Self {
            detected_language: code,
            language_name,
        }
    }
}

impl Default for LanguageDetection {
    fn default() -> Self {
        Self::undetected()
    }
}

/// Raw sentiment scores as produced by an oracle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SentimentScores {
    /// Polarity in `[-1, 1]`; negative is unfavourable.
    pub polarity: f64,
    /// Subjectivity in `[0, 1]`; 0 is objective.
    pub subjectivity: f64,
}

impl SentimentScores {
    /// The fail-closed value: neutral and objective.
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    /// Reject scores outside their documented ranges, including NaN.
    pub fn validate(self) -> OracleResult<Self> {
        if !(-1.0..=1.0).contains(&self.polarity) {
            return Err(OracleError::OutOfRange {
                field: "polarity",
                value: self.polarity,
            });
        }
        if !(0.0..=1.0).contains(&self.subjectivity) {
            return Err(OracleError::OutOfRange {
                field: "subjectivity",
                value: self.subjectivity,
            });
        }
        Ok(self)
    }
}

/// An external language/sentiment capability.
///
/// Implementations may be slow (network, model inference); the engine holds
/// no locks while calling them.
pub trait Oracle: Send + Sync {
    /// Identify the document language.
    fn detect_language(&self, text: &str) -> OracleResult<LanguageDetection>;

    /// Score document sentiment.
    fn score_sentiment(&self, text: &str) -> OracleResult<SentimentScores>;
}

/// Ask the oracle for the language, falling back to "undetected".
pub fn detect_language_or_fallback(oracle: &dyn Oracle, text: &str) -> LanguageDetection {
    match oracle.detect_language(text) {
        Ok(detection) => detection,
        Err(err) => {
            log_fallback("language detection", &err);
            LanguageDetection::undetected()
        }
    }
}

/// Ask the oracle for sentiment scores, falling back to neutral.
pub fn score_sentiment_or_fallback(oracle: &dyn Oracle, text: &str) -> SentimentScores {
    match oracle.score_sentiment(text).and_then(SentimentScores::validate) {
        Ok(scores) => scores,
        Err(err) => {
            log_fallback("sentiment scoring", &err);
            SentimentScores::NEUTRAL
        }
    }
}

// Missing detector logs at debug, bad answers at warn.
fn log_fallback(what: &str, err: &OracleError) {
    if err.is_unavailable() {
        tracing::debug!(error = %err, "{what} unavailable, using fallback");
    } else {
        tracing::warn!(error = %err, "{what} failed, using fallback");
    }
}

/// An oracle with no backing detector. Every call fails, so reports always
/// carry the fallback values.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableOracle;

impl Oracle for UnavailableOracle {
    fn detect_language(&self, _text: &str) -> OracleResult<LanguageDetection> {
        Err(OracleError::Unavailable(
            "no language detector configured".to_string(),
        ))
    }

    fn score_sentiment(&self, _text: &str) -> OracleResult<SentimentScores> {
        Err(OracleError::Unavailable(
            "no sentiment model configured".to_string(),
        ))
    }
}

/// An oracle that returns the same answer for every document.
///
/// Used for tests and for callers that already know the language or sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedOracle {
    /// Language returned by [`Oracle::detect_language`].
    pub language: LanguageDetection,
    /// Scores returned by [`Oracle::score_sentiment`].
    pub sentiment: SentimentScores,
}

impl FixedOracle {
    /// Create a fixed oracle for a language code and sentiment scores.
    pub fn new(language_code: &str, sentiment: SentimentScores) -> Self {
        Self {
            language: LanguageDetection::from_code(language_code),
            sentiment,
        }
    }
}

impl Default for FixedOracle {
    fn default() -> Self {
        Self::new("en", SentimentScores::NEUTRAL)
    }
}

impl Oracle for FixedOracle {
    fn detect_language(&self, _text: &str) -> OracleResult<LanguageDetection> {
        Ok(self.language.clone())
    }

    fn score_sentiment(&self, _text: &str) -> OracleResult<SentimentScores> {
        Ok(self.sentiment)
    }
}
