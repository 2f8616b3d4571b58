//! Frequency command: ranked content words or letters.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textmetrics_core::metrics::{self, RankedCount};
use textmetrics_core::{AnalysisOptions, text};

use super::read_input_file;

/// Arguments for the `frequency` subcommand.
#[derive(Args, Debug)]
pub struct FrequencyArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Number of entries to list.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Rank letters instead of words.
    #[arg(long)]
    pub letters: bool,
}

/// Print the most frequent words (or letters) in a file.
#[instrument(name = "cmd_frequency", skip_all, fields(file = %args.file, letters = args.letters))]
pub fn cmd_frequency(
    args: FrequencyArgs,
    global_json: bool,
    options: &AnalysisOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, top = ?args.top, "executing frequency command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    if args.letters {
        let top = args.top.unwrap_or(options.top_letters);
        let report = metrics::character_analysis(&content, top);
        if global_json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "{} {} letters, {} unique",
                args.file.bold(),
                report.total_letters,
                report.unique_letters,
            );
            print_ranked(&report.most_common_letters);
        }
    } else {
        let top = args.top.unwrap_or(options.top_words);
        let words = text::extract_words(&content);
        let report = metrics::word_frequency(&words, &options.stopwords, top);
        if global_json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "{} {} words analyzed, {} unique",
                args.file.bold(),
                report.total_words_analyzed,
                report.unique_words,
            );
            print_ranked(&report.most_common_words);
        }
    }

    Ok(())
}

fn print_ranked(entries: &[RankedCount]) {
    let width = entries
        .iter()
        .map(|(item, _)| item.chars().count())
        .max()
        .unwrap_or(0);
    for (item, count) in entries {
        println!("  {item:<width$}  {}", count.cyan());
    }
}
