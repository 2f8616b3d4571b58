//! Readability command: Flesch Reading Ease with an optional floor.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use textmetrics_core::metrics::{self, ReadabilityScore};
use textmetrics_core::text;

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Minimum acceptable Flesch score (0-100).
    #[arg(long)]
    pub min_score: Option<f64>,
}

#[derive(Serialize)]
struct ReadabilityOutput<'a> {
    file: &'a str,
    #[serde(flatten)]
    score: &'a ReadabilityScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<f64>,
    below_min: bool,
}

/// Score a file; fails when the score is below the minimum.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_min_score: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let tokens = text::tokenize(&content);
    let score = metrics::readability(&tokens.words, tokens.sentence_count());

    let min_score = args.min_score.or(config_min_score);
    let below_min = min_score.is_some_and(|min| score.flesch_score < min);

    if global_json {
        let output = ReadabilityOutput {
            file: args.file.as_str(),
            score: &score,
            min_score,
            below_min,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        if below_min {
            bail!("{} is below the minimum readability score", args.file);
        }
    } else if let Some(min) = min_score {
        if below_min {
            bail!(
                "{} scores {:.1} ({}), below the minimum of {:.1}. Shorten sentences or use simpler words.",
                args.file,
                score.flesch_score,
                score.readability_level,
                min,
            );
        }
        println!(
            "{} {} scores {:.1} ({}, min: {:.1})",
            "PASS:".green(),
            args.file,
            score.flesch_score,
            score.readability_level,
            min,
        );
    } else {
        println!("{:.1} ({})", score.flesch_score, score.readability_level);
    }

    Ok(())
}
