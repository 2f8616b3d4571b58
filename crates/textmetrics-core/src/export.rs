//! Tabular and plain-text renderings of an [`AnalysisReport`].

use core::fmt::Write;
use std::borrow::Cow;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::report::AnalysisReport;

/// Label used in place of a file name when the text was entered directly.
pub const TEXT_INPUT_LABEL: &str = "text input";

/// Rendering format for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sectioned plain text.
    #[default]
    Text,
    /// The full report as pretty-printed JSON.
    Json,
    /// One flattened CSV row with header.
    Csv,
}

/// Column headers for [`write_csv`], in record field order.
const CSV_HEADER: &[&str] = &[
    "file_name",
    "character_count",
    "language",
    "sentiment",
    "polarity_percentage",
    "subjectivity",
    "word_count",
    "sentence_count",
    "paragraph_count",
    "average_words_per_sentence",
    "average_characters_per_word",
    "flesch_score",
    "readability_level",
    "unique_words",
];

/// One report flattened to scalar columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlatRecord {
    /// Source file name, or `text input`.
    pub file_name: String,
    /// Unicode code points in the document.
    pub character_count: usize,
    /// Display name of the detected language.
    pub language: String,
    /// Sentiment label.
    pub sentiment: String,
    /// Polarity on a 0-100 scale.
    pub polarity_percentage: f64,
    /// Subjectivity in `[0, 1]`.
    pub subjectivity: f64,
    /// Word tokens.
    pub word_count: usize,
    /// Sentences.
    pub sentence_count: usize,
    /// Paragraphs.
    pub paragraph_count: usize,
    /// Mean words per sentence.
    pub average_words_per_sentence: f64,
    /// Mean characters per word.
    pub average_characters_per_word: f64,
    /// Flesch Reading Ease.
    pub flesch_score: f64,
    /// Readability label.
    pub readability_level: String,
    /// Distinct content words.
    pub unique_words: usize,
}

impl FlatRecord {
    /// Flatten a report. `None` labels the record as direct text input.
    pub fn from_report(report: &AnalysisReport, file_name: Option<&str>) -> Self {
        let basic = &report.basic_stats;
        Self {
            file_name: file_name.unwrap_or(TEXT_INPUT_LABEL).to_string(),
            character_count: basic.character_count,
            language: report.language_detection.language_name.clone(),
            sentiment: report.sentiment_analysis.sentiment.to_string(),
            polarity_percentage: report.sentiment_analysis.polarity_percentage,
            subjectivity: report.sentiment_analysis.subjectivity,
            word_count: basic.word_count,
            sentence_count: basic.sentence_count,
            paragraph_count: basic.paragraph_count,
            average_words_per_sentence: basic.average_words_per_sentence,
            average_characters_per_word: basic.average_characters_per_word,
            flesch_score: report.readability_score.flesch_score,
            readability_level: report.readability_score.readability_level.to_string(),
            unique_words: report.word_frequency.unique_words,
        }
    }
}

/// Write records as CSV with a header row.
pub fn write_csv<W: Write>(records: &[FlatRecord], writer: &mut W) -> core::fmt::Result {
    writeln!(writer, "{}", CSV_HEADER.join(","))?;

    for r in records {
        writeln!(
            writer,
            "{},{},{},{},{:.1},{:.3},{},{},{},{:.1},{:.1},{:.1},{},{}",
            escape_csv(&r.file_name),
            r.character_count,
            escape_csv(&r.language),
            escape_csv(&r.sentiment),
            r.polarity_percentage,
            r.subjectivity,
            r.word_count,
            r.sentence_count,
            r.paragraph_count,
            r.average_words_per_sentence,
            r.average_characters_per_word,
            r.flesch_score,
            escape_csv(&r.readability_level),
            r.unique_words,
        )?;
    }

    Ok(())
}

/// Write the sectioned plain-text rendering of a report.
pub fn write_text<W: Write>(
    report: &AnalysisReport,
    file_name: Option<&str>,
    w: &mut W,
) -> core::fmt::Result {
    let basic = &report.basic_stats;
    let language = &report.language_detection;
    let sentiment = &report.sentiment_analysis;
    let readability = &report.readability_score;
    let words = &report.word_frequency;
    let sentences = &report.sentence_analysis;
    let chars = &report.character_analysis;

    writeln!(w, "File: {}", file_name.unwrap_or(TEXT_INPUT_LABEL))?;
    writeln!(w)?;

    writeln!(w, "[Basic statistics]")?;
    writeln!(w, "Characters: {}", basic.character_count)?;
    writeln!(w, "Characters (no spaces): {}", basic.character_count_no_spaces)?;
    writeln!(w, "Words: {}", basic.word_count)?;
    writeln!(w, "Sentences: {}", basic.sentence_count)?;
    writeln!(w, "Paragraphs: {}", basic.paragraph_count)?;
    writeln!(w, "Words per sentence: {:.1}", basic.average_words_per_sentence)?;
    writeln!(w, "Characters per word: {:.1}", basic.average_characters_per_word)?;
    writeln!(w)?;

    writeln!(w, "[Language]")?;
    writeln!(
        w,
        "Language: {} ({})",
        language.language_name, language.detected_language
    )?;
    writeln!(w)?;

    writeln!(w, "[Sentiment]")?;
    writeln!(w, "Sentiment: {}", sentiment.sentiment)?;
    writeln!(w, "Positivity: {:.1}%", sentiment.polarity_percentage)?;
    writeln!(w, "Subjectivity: {:.3}", sentiment.subjectivity)?;
    writeln!(w)?;

    writeln!(w, "[Readability]")?;
    writeln!(w, "Flesch score: {:.1}", readability.flesch_score)?;
    writeln!(w, "Level: {}", readability.readability_level)?;
    writeln!(w, "Syllables: {}", readability.syllable_count)?;
    writeln!(w)?;

    writeln!(w, "[Word frequency]")?;
    writeln!(w, "Unique words: {}", words.unique_words)?;
    writeln!(w, "Words analyzed: {}", words.total_words_analyzed)?;
    for (word, count) in &words.most_common_words {
        writeln!(w, "  {word}: {count}")?;
    }
    writeln!(w)?;

    writeln!(w, "[Sentences]")?;
    writeln!(
        w,
        "Average length: {:.1} words",
        sentences.average_sentence_length
    )?;
    writeln!(w, "Shortest: {} words", sentences.shortest_sentence)?;
    writeln!(w, "Longest: {} words", sentences.longest_sentence)?;
    writeln!(w)?;

    writeln!(w, "[Characters]")?;
    writeln!(w, "Letters: {}", chars.total_letters)?;
    writeln!(w, "Unique letters: {}", chars.unique_letters)?;
    for (letter, count) in &chars.most_common_letters {
        writeln!(w, "  {letter}: {count}")?;
    }

    Ok(())
}

/// Render a report as plain text.
pub fn render_text(report: &AnalysisReport, file_name: Option<&str>) -> String {
    let mut out = String::new();
    // Formatting into a String cannot fail.
    let _ = write_text(report, file_name, &mut out);
    out
}

/// Render one report in the given format.
pub fn render(
    report: &AnalysisReport,
    file_name: Option<&str>,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, file_name)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Csv => {
            let mut out = String::new();
            // Formatting into a String cannot fail.
            let _ = write_csv(&[FlatRecord::from_report(report, file_name)], &mut out);
            Ok(out)
        }
    }
}

/// Escape a value for RFC 4180 CSV output.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
