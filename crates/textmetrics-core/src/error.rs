//! Error types for textmetrics-core.
//!
//! The metrics pipeline itself is infallible. Errors only arise while loading
//! configuration or inside an [`Oracle`](crate::oracle::Oracle), and oracle
//! errors never leave the engine.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A configured stop-word file could not be read.
    #[error("failed to read stop-word file {path}: {source}")]
    StopwordFile {
        /// The resolved path that failed to read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors an oracle may report for language or sentiment scoring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    /// The backing detector is missing, timed out, or failed internally.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle produced a score outside its documented range.
    #[error("{field} out of range: {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The value that was returned.
        value: f64,
    },
}

impl OracleError {
    /// True when no detector answered at all, as opposed to a bad answer.
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Result type alias using [`OracleError`].
pub type OracleResult<T> = Result<T, OracleError>;
