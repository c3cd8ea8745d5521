//! Formatting helpers for everything log-cleaner prints.
//!
//! All functions write to a caller-supplied writer so tests can capture the
//! output. Color is applied only when `enable_colors` is true.

use std::io::{self, Write};

use logclean_core::{ReplaceStatus, RewriteReport};
use owo_colors::OwoColorize;

use crate::ui::theme::{ThemeEntry, ThemeMap};

fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg) {
        Some(color) => text.color(color).to_string(),
        None => text.to_string(),
    }
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(msg, ThemeEntry::Success, theme, enable_colors))
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(&format!("Warning: {msg}"), ThemeEntry::Warn, theme, enable_colors))
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(&format!("Error: {msg}"), ThemeEntry::Error, theme, enable_colors))
}

/// `Removed: <line>` notice for a dropped line.
pub fn print_removed_line<W: Write>(writer: &mut W, line: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(&format!("Removed: {line}"), ThemeEntry::RemovedLine, theme, enable_colors))
}

/// Counts and output locations of a finished rewrite.
pub fn print_summary<W: Write>(
    report: &RewriteReport,
    writer: &mut W,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "\n{}", paint("--- Clean Summary ---", ThemeEntry::Header, theme, enable_colors))?;

    let rows = [
        ("Lines kept", report.lines_kept),
        ("Lines removed", report.lines_removed),
        ("Empty lines skipped", report.empty_lines_skipped),
    ];
    for (label, count) in rows {
        writeln!(
            writer,
            "{}: {}",
            paint(label, ThemeEntry::SummaryLabel, theme, enable_colors),
            paint(&count.to_string(), ThemeEntry::SummaryCount, theme, enable_colors)
        )?;
    }

    if let Some(path) = &report.removed_path {
        writeln!(
            writer,
            "{}: {}",
            paint("Removed lines saved to", ThemeEntry::SummaryLabel, theme, enable_colors),
            path.display()
        )?;
    }
    writeln!(writer, "{}", paint("---------------------", ThemeEntry::Header, theme, enable_colors))
}

/// Reports the result of moving the cleaned file over the original.
pub fn print_replace_status<W: Write>(
    report: &RewriteReport,
    writer: &mut W,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    match &report.replace {
        ReplaceStatus::Replaced => print_success_message(
            writer,
            &format!("Cleaned '{}'.", report.source.display()),
            theme,
            enable_colors,
        ),
        ReplaceStatus::Failed(e) => print_warn_message(
            writer,
            &format!(
                "Unable to replace '{}' with the cleaned log file '{}' ({e}).\n\
                 File is likely locked by another process.\n\
                 This file will need to be replaced manually.",
                report.source.display(),
                report.cleaned_path.display()
            ),
            theme,
            enable_colors,
        ),
    }
}
