//! Output path naming for the rewriter.
//!
//! `dir/name.log` becomes `dir/<prefix>_name_<YYYYMMDD_HHMMSS>.log`. Only a
//! trailing `.log` is stripped from the original basename; any other suffix
//! stays part of the base name. When a name from the same second is already
//! taken, a sequence number follows the stamp: `<prefix>_name_<stamp>_1.log`.

use chrono::{DateTime, TimeZone};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

pub const CLEANED_PREFIX: &str = "cleaned";
pub const REMOVED_PREFIX: &str = "removed";

const LOG_SUFFIX: &str = ".log";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// The final component of `path`, used as the config lookup key.
///
/// Returns `None` for paths without a file name, such as `/` or `..`.
pub fn file_basename(path: &Path) -> Option<Cow<'_, str>> {
    path.file_name().map(|name| name.to_string_lossy())
}

/// Builds a sibling path of `file_path` named after `prefix` and `timestamp`.
pub fn timestamped_path<Tz>(file_path: &Path, prefix: &str, timestamp: &DateTime<Tz>) -> Option<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    sequenced_path(file_path, prefix, timestamp, 0)
}

/// [`timestamped_path`] with `_<seq>` after the stamp. `seq == 0` adds nothing.
pub fn sequenced_path<Tz>(file_path: &Path, prefix: &str, timestamp: &DateTime<Tz>, seq: u32) -> Option<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let name = file_basename(file_path)?;
    let base = name.strip_suffix(LOG_SUFFIX).unwrap_or(&*name);
    let stamp = timestamp.format(TIMESTAMP_FORMAT);
    let new_name = if seq == 0 {
        format!("{prefix}_{base}_{stamp}{LOG_SUFFIX}")
    } else {
        format!("{prefix}_{base}_{stamp}_{seq}{LOG_SUFFIX}")
    };

    Some(match file_path.parent() {
        Some(dir) => dir.join(new_name),
        None => PathBuf::from(new_name),
    })
}

/// Paths for one rewrite, sharing a single timestamp and sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub cleaned: PathBuf,
    pub removed: PathBuf,
}

impl OutputPaths {
    pub fn at<Tz>(file_path: &Path, timestamp: &DateTime<Tz>) -> Option<Self>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self::sequenced(file_path, timestamp, 0)
    }

    pub fn sequenced<Tz>(file_path: &Path, timestamp: &DateTime<Tz>, seq: u32) -> Option<Self>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Some(Self {
            cleaned: sequenced_path(file_path, CLEANED_PREFIX, timestamp, seq)?,
            removed: sequenced_path(file_path, REMOVED_PREFIX, timestamp, seq)?,
        })
    }
}
