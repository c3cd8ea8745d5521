// logclean/src/main.rs
//! log-cleaner entry point.
//!
//! Parses arguments, initializes logging and runs the clean command. Every
//! fatal error ends up here and becomes a message plus exit code 1.

use std::process::ExitCode;

use logclean::cli::Cli;
use logclean::commands::clean::{error_msg, run_clean, CleanOptions};
use logclean::logger;
use logclean::ui::theme::ThemeStyle;

fn main() -> ExitCode {
    let args = Cli::parse_args();

    logger::init_logger(logger::level_override(args.quiet, args.debug));
    log::debug!("log-cleaner started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = ThemeStyle::default_theme_map();
    let settings = args.settings();

    match run_clean(&settings, CleanOptions { quiet: args.quiet }, &theme_map) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(e.to_string(), &theme_map);
            ExitCode::FAILURE
        }
    }
}
