// logclean-core/src/lib.rs
//! # log-cleaner Core Library
//!
//! `logclean-core` holds the platform-independent logic for removing unwanted
//! lines from log files. It resolves per-file identifier groups from a JSON
//! config, classifies lines against them, and rewrites a log file in place via
//! a timestamped staging file and a rename.
//!
//! The library never prints and never exits the process. Fallible operations
//! return [`LogCleanError`]; the binary decides what to show and which exit
//! code to use.
//!
//! ## Modules
//!
//! * `config`: [`IdentifierGroup`], [`Config`] and the JSON [`resolve`] step.
//! * `classifier`: the [`LineClassifier`] trait and the [`classify`] rule.
//! * `naming`: basename lookup and `cleaned_…`/`removed_…` path derivation.
//! * `rewriter`: the streaming rewrite and the final replace.
//! * `settings`: [`Settings`] produced by the CLI.
//! * `headless`: one call from [`Settings`] to a finished rewrite.
//! * `errors`: [`LogCleanError`] and [`ConfigError`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use logclean_core::{headless_clean_file, Settings};
//!
//! fn main() -> Result<(), logclean_core::LogCleanError> {
//!     let settings = Settings::new("/var/log/app.log", "cleaner.json").retain_removed(true);
//!     let report = headless_clean_file(&settings, |line| println!("Removed: {line}"))?;
//!     println!("kept {} lines", report.lines_kept);
//!     Ok(())
//! }
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod classifier;
pub mod config;
pub mod errors;
pub mod headless;
pub mod naming;
pub mod rewriter;
pub mod settings;

pub use classifier::{classify, LineClassifier, Verdict};
pub use config::{resolve, Config, IdentifierGroup, DEFAULT_MAX_CONFIG_SIZE};
pub use errors::{ConfigError, LogCleanError};
pub use headless::headless_clean_file;
pub use naming::{file_basename, sequenced_path, timestamped_path, OutputPaths};
pub use rewriter::{
    rewrite, rewrite_with, RenameReplace, ReplaceStatus, ReplaceStrategy, RewriteOptions, RewriteReport,
};
pub use settings::Settings;
