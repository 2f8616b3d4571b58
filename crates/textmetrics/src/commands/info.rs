//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use textmetrics_core::config::{Config, ConfigSources};
use textmetrics_core::{DEFAULT_MAX_INPUT_BYTES, DEFAULT_TOP_N};
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    top_words: usize,
    top_letters: usize,
    stopwords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_flesch_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let mut stopwords = if let Some(ref file) = config.stopwords_file {
            format!("file {file}")
        } else if let Some(ref words) = config.stopwords {
            format!("custom ({} words)", words.len())
        } else {
            "english".to_string()
        };
        if let Some(ref extra) = config.extra_stopwords {
            stopwords.push_str(&format!(" + {} extra", extra.len()));
        }

        let max_input_bytes = if config.disable_input_limit {
            None
        } else {
            Some(config.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        };

        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            top_words: config.top_words.unwrap_or(DEFAULT_TOP_N),
            top_letters: config.top_letters.unwrap_or(DEFAULT_TOP_N),
            stopwords,
            min_flesch_score: config.min_flesch_score,
            max_input_bytes,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = cfg.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Analysis".bold().underline());
    println!("{}: {}", "Top words".dimmed(), cfg.top_words);
    println!("{}: {}", "Top letters".dimmed(), cfg.top_letters);
    println!("{}: {}", "Stop words".dimmed(), cfg.stopwords);
    match cfg.min_flesch_score {
        Some(v) => println!("{}: {:.1}", "Min Flesch score".dimmed(), v),
        None => println!("{}: {}", "Min Flesch score".dimmed(), "(not set)".dimmed()),
    }
    match cfg.max_input_bytes {
        Some(v) => println!("{}: {} bytes", "Input limit".dimmed(), v),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    Ok(())
}
