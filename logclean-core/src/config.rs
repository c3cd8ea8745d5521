//! Configuration management for `logclean-core`.
//!
//! A config document is a JSON object of the form
//!
//! ```json
//! { "files": { "app.log": [ ["ERROR", "timeout"], ["DEBUG"] ] } }
//! ```
//!
//! Each key under `files` is a log file basename. Each inner array is an
//! [`IdentifierGroup`]: a line matches the group when it contains every term.
//! A line is removed when it matches any group of its file's entry.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::{ConfigError, LogCleanError};

/// Default ceiling for the size of a config file, in bytes.
pub const DEFAULT_MAX_CONFIG_SIZE: u64 = 4096;

/// Top-level key holding the per-file identifier groups.
pub const FILES_KEY: &str = "files";

/// A set of substrings that must all be present for a line to match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IdentifierGroup {
    terms: Vec<String>,
}

impl IdentifierGroup {
    /// Builds a group from its terms.
    ///
    /// Returns a schema error if `terms` is empty or contains an empty string,
    /// since either would make the group match every line.
    pub fn new<I, S>(terms: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        if terms.is_empty() {
            return Err(ConfigError::Schema("identifier group has no terms".to_string()));
        }
        if terms.iter().any(String::is_empty) {
            return Err(ConfigError::Schema("identifier group contains an empty term".to_string()));
        }
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when every term occurs somewhere in `line`.
    pub fn matches(&self, line: &str) -> bool {
        self.terms.iter().all(|term| line.contains(term.as_str()))
    }
}

/// The identifier groups that apply to one log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// The basename this config was resolved for.
    pub log_file: String,
    /// Groups in document order. Never empty.
    pub identifiers: Vec<IdentifierGroup>,
}

impl Config {
    /// Builds a config directly, enforcing the at-least-one-group invariant.
    pub fn new(log_file: impl Into<String>, identifiers: Vec<IdentifierGroup>) -> Result<Self, ConfigError> {
        let log_file = log_file.into();
        if identifiers.is_empty() {
            return Err(ConfigError::Schema(format!(
                "no identifier groups for '{}'",
                log_file
            )));
        }
        Ok(Self { log_file, identifiers })
    }

    pub fn identifier_count(&self) -> usize {
        self.identifiers.len()
    }

    /// Reads the config file at `config_path` and resolves the section for `file_name`.
    ///
    /// Files larger than `max_size` bytes are rejected rather than truncated.
    /// A missing section becomes [`LogCleanError::ConfigNotFound`].
    pub fn load<P: AsRef<Path>>(config_path: P, file_name: &str, max_size: u64) -> Result<Self, LogCleanError> {
        let config_path = config_path.as_ref();
        info!("Loading identifier config from: {}", config_path.display());

        let document = read_bounded(config_path, max_size)?;

        let config = resolve(&document, file_name)
            .map_err(|source| LogCleanError::Config {
                path: config_path.to_path_buf(),
                source,
            })?
            .ok_or_else(|| LogCleanError::ConfigNotFound {
                file_name: file_name.to_string(),
                config_path: config_path.to_path_buf(),
            })?;

        info!(
            "Loaded {} identifier groups for '{}' from {}.",
            config.identifier_count(),
            file_name,
            config_path.display()
        );
        Ok(config)
    }
}

fn read_bounded(path: &Path, max_size: u64) -> Result<Vec<u8>, LogCleanError> {
    let io_err = |source| LogCleanError::ConfigIo {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;

    // One byte past the limit is enough to tell an oversized file apart.
    let mut document = Vec::new();
    file.take(max_size.saturating_add(1))
        .read_to_end(&mut document)
        .map_err(io_err)?;

    let size = document.len() as u64;
    if size > max_size {
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(size);
        return Err(LogCleanError::ConfigTooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_size,
        });
    }
    if document.iter().all(u8::is_ascii_whitespace) {
        return Err(LogCleanError::EmptyConfig {
            path: path.to_path_buf(),
        });
    }

    debug!("Read {} bytes of config from {}", size, path.display());
    Ok(document)
}

/// Resolves the identifier groups for `file_name` from a raw JSON document.
///
/// Returns `Ok(None)` when the document is well formed but has no entry for
/// `file_name`. Non-array group entries and non-string terms are skipped with
/// a warning; a group left without terms is an error.
pub fn resolve(document: &[u8], file_name: &str) -> Result<Option<Config>, ConfigError> {
    let root: Value = serde_json::from_slice(document)?;

    let files = root
        .get(FILES_KEY)
        .and_then(Value::as_object)
        .ok_or_else(|| ConfigError::Schema(format!("Invalid '{}' object.", FILES_KEY)))?;

    let Some(entry) = files.get(file_name) else {
        debug!("No '{}' section under '{}'", file_name, FILES_KEY);
        return Ok(None);
    };

    let groups = entry.as_array().ok_or_else(|| {
        ConfigError::Schema(format!(
            "identifiers for '{}' must be an array of arrays of strings",
            file_name
        ))
    })?;
    if groups.is_empty() {
        return Err(ConfigError::Schema(format!(
            "No identifier items set for '{}' in config",
            file_name
        )));
    }

    let mut identifiers = Vec::with_capacity(groups.len());
    for (group_idx, group) in groups.iter().enumerate() {
        let Some(items) = group.as_array() else {
            warn!(
                "Skipping identifier group {} for '{}': expected an array, found {}",
                group_idx,
                file_name,
                json_kind(group)
            );
            continue;
        };

        let mut terms = Vec::with_capacity(items.len());
        for (item_idx, item) in items.iter().enumerate() {
            match item.as_str() {
                Some("") => warn!(
                    "Skipping empty term {} in identifier group {} for '{}'",
                    item_idx, group_idx, file_name
                ),
                Some(term) => terms.push(term.to_string()),
                None => warn!(
                    "Skipping term {} in identifier group {} for '{}': expected a string, found {}",
                    item_idx,
                    group_idx,
                    file_name,
                    json_kind(item)
                ),
            }
        }

        if terms.is_empty() {
            return Err(ConfigError::Schema(format!(
                "identifier group {} for '{}' has no usable terms",
                group_idx, file_name
            )));
        }
        debug!("Identifier group {} for '{}': {:?}", group_idx, file_name, terms);
        identifiers.push(IdentifierGroup { terms });
    }

    Config::new(file_name, identifiers).map(Some)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
