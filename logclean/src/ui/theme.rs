//! Color theme for log-cleaner's terminal output.
//!
//! Each [`ThemeEntry`] is a logical kind of output (errors, the summary
//! header, removed-line notices) mapped to a 16-color ANSI foreground.

use owo_colors::AnsiColors;
use std::collections::HashMap;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    /// Section titles such as the summary header.
    Header,
    /// A completed replace.
    Success,
    Warn,
    Error,
    /// `Removed: …` notices for each dropped line.
    RemovedLine,
    SummaryLabel,
    SummaryCount,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 7] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::RemovedLine,
        ThemeEntry::SummaryLabel,
        ThemeEntry::SummaryCount,
    ];
}

/// Style for one `ThemeEntry`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeStyle {
    pub fg: Option<AnsiColors>,
}

impl ThemeStyle {
    fn fg(color: AnsiColors) -> Self {
        ThemeStyle { fg: Some(color) }
    }

    /// The built-in color mapping.
    pub fn default_theme_map() -> ThemeMap {
        let mut theme = HashMap::new();
        theme.insert(ThemeEntry::Header, ThemeStyle::fg(AnsiColors::Cyan));
        theme.insert(ThemeEntry::Success, ThemeStyle::fg(AnsiColors::Green));
        theme.insert(ThemeEntry::Warn, ThemeStyle::fg(AnsiColors::Yellow));
        theme.insert(ThemeEntry::Error, ThemeStyle::fg(AnsiColors::Red));
        theme.insert(ThemeEntry::RemovedLine, ThemeStyle::fg(AnsiColors::BrightBlack));
        theme.insert(ThemeEntry::SummaryCount, ThemeStyle::fg(AnsiColors::BrightYellow));

        for entry in ThemeEntry::ALL {
            theme.entry(entry).or_insert_with(|| ThemeStyle::fg(AnsiColors::White));
        }
        theme
    }
}
