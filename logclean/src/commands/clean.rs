//! The clean command: runs the core pipeline and reports to the terminal.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};

use logclean_core::{headless_clean_file, RewriteReport, Settings};

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Presentation options that do not affect the cleaning itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Suppress `Removed:` notices and the summary.
    pub quiet: bool,
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Cleans the log named in `settings` and prints the outcome.
///
/// Fatal problems are returned as errors. A failed replace is printed as a
/// warning and still returns `Ok`.
pub fn run_clean(settings: &Settings, opts: CleanOptions, theme_map: &ThemeMap) -> Result<RewriteReport> {
    info!("Starting log-cleaner operation.");
    debug!("Settings: {:?}", settings);

    let stdout = io::stdout();
    let stdout_supports_color = stdout.is_terminal();
    let mut notices = stdout.lock();

    let report = headless_clean_file(settings, |line| {
        if !opts.quiet {
            let _ = output_format::print_removed_line(&mut notices, line, theme_map, stdout_supports_color);
        }
    })?;
    notices.flush().context("Failed to flush stdout")?;
    drop(notices);

    let stderr_supports_color = io::stderr().is_terminal();
    let mut stderr = io::stderr().lock();
    if !opts.quiet {
        output_format::print_summary(&report, &mut stderr, theme_map, stderr_supports_color)?;
    }
    if !opts.quiet || !report.replaced() {
        output_format::print_replace_status(&report, &mut stderr, theme_map, stderr_supports_color)?;
    }

    info!("log-cleaner operation completed.");
    Ok(report)
}
