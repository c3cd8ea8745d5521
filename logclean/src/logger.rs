// logclean/src/logger.rs
//! Logger setup for the `log-cleaner` binary.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when neither `RUST_LOG` nor a CLI override is present.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes `env_logger` on stderr.
///
/// `RUST_LOG` is honored unless `level` overrides it. Safe to call more than
/// once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .ok();
}

/// Maps the `--quiet` / `--debug` flags to a level override.
pub fn level_override(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
