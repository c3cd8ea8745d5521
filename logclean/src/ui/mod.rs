//! Terminal presentation: colors and message formatting.

pub mod output_format;
pub mod theme;
