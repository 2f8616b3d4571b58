//! Analyze command: the full report for one file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textmetrics_core::export::{self, OutputFormat};
use textmetrics_core::{AnalysisOptions, UnavailableOracle, analyze};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Output format. `--json` is shorthand for `--format json`.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of top words and letters to list.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

/// Run every analysis on a file and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    options: &AnalysisOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, format = ?args.format, top = ?args.top, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let options = match args.top {
        Some(n) => AnalysisOptions {
            top_words: n,
            top_letters: n,
            ..options.clone()
        },
        None => options.clone(),
    };

    let format = if global_json {
        OutputFormat::Json
    } else {
        args.format.unwrap_or_default()
    };

    let report = analyze(&content, &options, &UnavailableOracle);
    let file_name = args.file.file_name();

    match format {
        OutputFormat::Text => {
            for line in export::render_text(&report, file_name).lines() {
                if line.starts_with('[') {
                    println!("{}", line.cyan().bold());
                } else {
                    println!("{line}");
                }
            }
        }
        OutputFormat::Json | OutputFormat::Csv => {
            print!("{}", export::render(&report, file_name, format)?);
            if format == OutputFormat::Json {
                println!();
            }
        }
    }

    Ok(())
}
