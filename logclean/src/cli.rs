// logclean/src/cli.rs
//! This file defines the command-line interface (CLI) for log-cleaner and the
//! conversion from parsed arguments to core [`Settings`].
//! License: MIT OR Apache-2.0

use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use logclean_core::{Settings, DEFAULT_MAX_CONFIG_SIZE};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "log-cleaner",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Remove unwanted lines from a log file in place",
    long_about = "log-cleaner removes every line of a log file that matches one of the identifier groups \
configured for that file's name, then replaces the original with the cleaned copy. A line matches a group \
when it contains every string in the group.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// The log file to clean. Its file name selects the config section.
    #[arg(value_name = "LOG_FILEPATH")]
    pub log_filepath: PathBuf,

    /// JSON config mapping log file names to identifier groups.
    #[arg(value_name = "CONFIG_FILEPATH")]
    pub config_filepath: PathBuf,

    /// Save removed lines next to the log as removed_<name>_<timestamp>.log
    #[arg(
        long,
        short = 'r',
        help = "Saves the removed log entries to a separate file in the same directory as the original log file. 'removed_<log_file_name>_<timestamp>.log'"
    )]
    pub retain: bool,

    /// Disable per-line notices, the summary and logging
    #[arg(long, short = 'q', help = "Suppress removed-line notices, the summary and all logging.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Reject config files larger than this many bytes.
    #[arg(
        long = "max-config-size",
        value_name = "BYTES",
        env = "LOG_CLEANER_MAX_CONFIG_SIZE",
        default_value_t = DEFAULT_MAX_CONFIG_SIZE,
        help = "Reject config files larger than this many bytes."
    )]
    pub max_config_size: u64,
}

impl Cli {
    /// The clap command with `-v/--version` in place of clap's default `-V`.
    pub fn command_with_version() -> clap::Command {
        Self::command().disable_version_flag(true).arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Show version information"),
        )
    }

    /// Parses `std::env::args_os`, exiting with usage on error.
    pub fn parse_args() -> Self {
        Self::parse_from_iter(std::env::args_os())
    }

    pub fn parse_from_iter<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command_with_version().get_matches_from(args);
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse_from_iter<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command_with_version().try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    pub fn settings(&self) -> Settings {
        Settings::new(&self.log_filepath, &self.config_filepath)
            .retain_removed(self.retain)
            .max_config_size(self.max_config_size)
    }
}
