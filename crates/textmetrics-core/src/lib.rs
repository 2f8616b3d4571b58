//! Core library for textmetrics.
//!
//! A deterministic text-statistics engine: given a document, it produces
//! counts, word and letter frequencies, a Flesch readability score, and a
//! sentence length distribution. Language and sentiment come from a
//! caller-supplied [`Oracle`] and are folded into the same report.
//!
//! # Modules
//!
//! - [`text`] - Word, sentence, and paragraph tokenization
//! - [`metrics`] - The five independent analyses
//! - [`oracle`] - Language/sentiment oracle interface and fallbacks
//! - [`report`] - Report assembly and the [`analyze`] entry point
//! - [`stopwords`] - Stop-word sets for frequency ranking
//! - [`export`] - CSV and plain-text renderings
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textmetrics_core::{AnalysisOptions, UnavailableOracle, analyze};
//!
//! let report = analyze(
//!     "The cat sat. The dog ran!",
//!     &AnalysisOptions::default(),
//!     &UnavailableOracle,
//! );
//! assert_eq!(report.basic_stats.sentence_count, 2);
//! assert_eq!(report.language_detection.detected_language, "unknown");
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod metrics;
pub mod oracle;
pub mod report;
pub mod stopwords;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, OracleError, OracleResult};
pub use export::{FlatRecord, OutputFormat, render, render_text, write_csv};
pub use metrics::{
    BasicStats, CharacterAnalysis, DEFAULT_TOP_N, ReadabilityLevel, ReadabilityScore,
    SentenceAnalysis, WordFrequency,
};
pub use oracle::{FixedOracle, LanguageDetection, Oracle, SentimentScores, UnavailableOracle};
pub use report::{AnalysisOptions, AnalysisReport, SentimentAnalysis, SentimentLabel, analyze};
pub use stopwords::StopWords;
pub use text::TokenSet;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
