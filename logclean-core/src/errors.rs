//! errors.rs - Custom error types for the logclean-core library.
//!
//! Every fatal condition in the cleaning pipeline maps to one variant here, so
//! the binary can decide on messages and exit codes in a single place.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// Problems found while interpreting an already-read config document.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid JSON. Carries the parser diagnostic.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document is JSON but does not follow the `files` layout.
    #[error("Invalid config: {0}")]
    Schema(String),
}

/// All fatal error types in the `logclean-core` library.
///
/// A failed rename of the cleaned file over the original is deliberately not
/// part of this enum; it is reported through
/// [`ReplaceStatus`](crate::rewriter::ReplaceStatus) instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LogCleanError {
    #[error("Unable to open the config file {}. Check spelling and that it exists: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file '{}' is {size} bytes, which exceeds the {limit} byte limit", path.display())]
    ConfigTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("No config set in config file '{}'", path.display())]
    EmptyConfig { path: PathBuf },

    #[error("{source} (in '{}')", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error(
        "Could not find config information for log file '{file_name}'.\nCheck the '{}' file for a '{file_name}' section.",
        config_path.display()
    )]
    ConfigNotFound {
        file_name: String,
        config_path: PathBuf,
    },

    #[error("Error {operation} '{}': {source}", path.display())]
    LogIo {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' does not name a log file", path.display())]
    InvalidLogPath { path: PathBuf },
}

impl LogCleanError {
    pub(crate) fn log_io(path: impl Into<PathBuf>, operation: &'static str, source: std::io::Error) -> Self {
        LogCleanError::LogIo {
            path: path.into(),
            operation,
            source,
        }
    }
}
