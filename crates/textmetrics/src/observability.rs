//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr so stdout stays clean for reports and
//! the MCP stdio transport. An optional JSONL log file is written through a
//! non-blocking `tracing-appender` writer when a log path or directory is set.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Explicit log file path. Wins over every directory setting.
const ENV_LOG_PATH: &str = "TEXTMETRICS_LOG_PATH";
/// Log directory for daily-rolled files. Wins over config `log_dir`.
const ENV_LOG_DIR: &str = "TEXTMETRICS_LOG_DIR";
/// File name prefix for daily-rolled log files.
const LOG_FILE_PREFIX: &str = "textmetrics.jsonl";

/// Where the JSONL log file goes, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Console only.
    None,
    /// A single fixed file.
    File(PathBuf),
    /// Daily-rolled files inside a directory.
    Directory(PathBuf),
}

/// Resolved observability settings.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// JSONL log destination.
    pub target: LogTarget,
}

impl ObservabilityConfig {
    /// Read `TEXTMETRICS_LOG_PATH` / `TEXTMETRICS_LOG_DIR`, falling back to the
    /// configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(ENV_LOG_PATH).map(PathBuf::from);
        let log_dir = std::env::var_os(ENV_LOG_DIR).map(PathBuf::from);
        Self {
            target: resolve_target(log_path, log_dir, config_log_dir),
        }
    }
}

fn resolve_target(
    log_path: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> LogTarget {
    let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();
    if let Some(path) = log_path.filter(non_empty) {
        LogTarget::File(path)
    } else if let Some(dir) = env_dir.filter(non_empty).or(config_dir) {
        LogTarget::Directory(dir)
    } else {
        LogTarget::None
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, `-v` debug,
/// `-vv` trace, and no flag uses the configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    EnvFilter::new(level_for(quiet, verbose, default_level))
}

fn level_for(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Keeps the non-blocking log writer flushing until dropped.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let (file_layer, guard) = match config.target {
        LogTarget::None => (None, None),
        LogTarget::File(ref path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(ensure_dir(dir)?, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(json_layer(writer)), Some(guard))
        }
        LogTarget::Directory(ref dir) => {
            let appender = tracing_appender::rolling::daily(ensure_dir(dir)?, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(json_layer(writer)), Some(guard))
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(ObservabilityGuard { _file: guard })
}

fn json_layer<S>(
    writer: tracing_appender::non_blocking::NonBlocking,
) -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(writer)
}

fn ensure_dir(dir: &Path) -> anyhow::Result<&Path> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_wins() {
        let target = resolve_target(
            Some(PathBuf::from("/tmp/x.jsonl")),
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(target, LogTarget::File(PathBuf::from("/tmp/x.jsonl")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let target = resolve_target(
            None,
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(target, LogTarget::Directory(PathBuf::from("/tmp/env")));
    }

    #[test]
    fn empty_env_values_ignored() {
        let target = resolve_target(
            Some(PathBuf::new()),
            Some(PathBuf::new()),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(target, LogTarget::Directory(PathBuf::from("/tmp/config")));
    }

    #[test]
    fn nothing_set_means_console_only() {
        assert_eq!(resolve_target(None, None, None), LogTarget::None);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(false, 0, "warn"), "warn");
        assert_eq!(level_for(false, 1, "warn"), "debug");
        assert_eq!(level_for(false, 3, "warn"), "trace");
        assert_eq!(level_for(true, 2, "warn"), "error");
    }
}
