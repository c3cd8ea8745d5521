//! Command implementations for the log-cleaner CLI.

pub mod clean;
