//! Resolved run settings handed from the CLI layer to the core.

use std::path::PathBuf;

use crate::config::DEFAULT_MAX_CONFIG_SIZE;

/// Everything the core needs to clean one log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The log file to clean in place.
    pub file_path: PathBuf,
    /// JSON config holding the identifier groups.
    pub config_file: PathBuf,
    /// Keep removed lines in a `removed_…` side file.
    pub retain_removed: bool,
    /// Config files larger than this many bytes are rejected.
    pub max_config_size: u64,
}

impl Settings {
    pub fn new(file_path: impl Into<PathBuf>, config_file: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            config_file: config_file.into(),
            retain_removed: false,
            max_config_size: DEFAULT_MAX_CONFIG_SIZE,
        }
    }

    pub fn retain_removed(mut self, retain: bool) -> Self {
        self.retain_removed = retain;
        self
    }

    pub fn max_config_size(mut self, bytes: u64) -> Self {
        self.max_config_size = bytes;
        self
    }
}
