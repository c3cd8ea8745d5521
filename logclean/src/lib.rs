// logclean/src/lib.rs
//! # log-cleaner CLI
//!
//! Command-line front end for `logclean-core`. Parses arguments into
//! [`Settings`](logclean_core::Settings), sets up logging, runs the cleaning
//! pipeline and reports the outcome on the terminal.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::clean::{run_clean, CleanOptions};
