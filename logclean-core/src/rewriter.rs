// logclean-core/src/rewriter.rs
//! Streaming log rewriter.
//!
//! The source file is read one line at a time. Kept lines go to a fresh
//! `cleaned_…` file next to the source; removed lines optionally go to a
//! `removed_…` file. Once both are fully written and closed, the cleaned file
//! is renamed over the original so the original path never holds a partial
//! write. Output files are always created fresh; a name already taken by an
//! earlier run in the same second gets a sequence number instead.
//!
//! A failed rename is not fatal. It is reported in [`RewriteReport::replace`]
//! and the cleaned file stays on disk under its timestamped name.
//!
//! License: MIT OR APACHE 2.0

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::classifier::{LineClassifier, Verdict};
use crate::errors::LogCleanError;
use crate::naming::OutputPaths;

/// How many sequence numbers to try before giving up on a timestamp.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Moves a finished staging file over its target.
pub trait ReplaceStrategy {
    fn replace(&self, staged: &Path, target: &Path) -> io::Result<()>;
}

/// Same-filesystem rename via [`std::fs::rename`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RenameReplace;

impl ReplaceStrategy for RenameReplace {
    fn replace(&self, staged: &Path, target: &Path) -> io::Result<()> {
        fs::rename(staged, target)
    }
}

/// Knobs for a single rewrite.
#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    /// Write removed lines to a `removed_…` side file.
    pub retain_removed: bool,
    /// Timestamp for output names. Defaults to the local time at rewrite start.
    pub timestamp: Option<DateTime<Local>>,
}

impl RewriteOptions {
    pub fn retaining(retain_removed: bool) -> Self {
        Self {
            retain_removed,
            ..Self::default()
        }
    }
}

/// Whether the cleaned file made it over the original.
#[derive(Debug)]
pub enum ReplaceStatus {
    Replaced,
    Failed(io::Error),
}

/// Summary of a finished rewrite.
#[derive(Debug)]
pub struct RewriteReport {
    pub source: PathBuf,
    /// Where the cleaned output was staged. After a successful replace this
    /// path no longer exists; its content lives at `source`.
    pub cleaned_path: PathBuf,
    /// Present only when removed lines were retained.
    pub removed_path: Option<PathBuf>,
    pub lines_kept: usize,
    pub lines_removed: usize,
    pub empty_lines_skipped: usize,
    pub replace: ReplaceStatus,
}

impl RewriteReport {
    pub fn replaced(&self) -> bool {
        matches!(self.replace, ReplaceStatus::Replaced)
    }
}

/// Rewrites `file_path` in place, dropping every line `classifier` marks for removal.
///
/// Removed lines are logged at debug level. Use [`rewrite_with`] to observe
/// them or to swap the replace strategy.
pub fn rewrite<C: LineClassifier>(
    file_path: &Path,
    classifier: C,
    retain_removed: bool,
) -> Result<RewriteReport, LogCleanError> {
    rewrite_with(
        file_path,
        classifier,
        &RewriteOptions::retaining(retain_removed),
        &RenameReplace,
        |line| debug!("Removed: {}", line),
    )
}

/// Full form of [`rewrite`].
///
/// `on_removed` is called with the text of every removed line, in file order.
pub fn rewrite_with<C, R, F>(
    file_path: &Path,
    classifier: C,
    options: &RewriteOptions,
    replacer: &R,
    mut on_removed: F,
) -> Result<RewriteReport, LogCleanError>
where
    C: LineClassifier,
    R: ReplaceStrategy + ?Sized,
    F: FnMut(&str),
{
    info!("Cleaning log file: {}", file_path.display());

    let source = File::open(file_path).map_err(|e| LogCleanError::log_io(file_path, "opening file", e))?;

    let timestamp = options.timestamp.unwrap_or_else(Local::now);
    let (paths, mut cleaned, mut removed) = create_outputs(file_path, &timestamp, options.retain_removed)?;

    let mut reader = BufReader::new(source);
    let mut buf = Vec::new();
    let mut lines_kept = 0;
    let mut lines_removed = 0;
    let mut empty_lines_skipped = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| LogCleanError::log_io(file_path, "reading", e))?;
        if read == 0 {
            break;
        }

        let (content, delimiter) = split_delimiter(&buf);
        if content.is_empty() {
            empty_lines_skipped += 1;
            continue;
        }

        let text = String::from_utf8_lossy(content);
        match classifier.classify(&text) {
            Verdict::Keep => {
                write_line(&mut cleaned, content, delimiter, &paths.cleaned)?;
                lines_kept += 1;
            }
            Verdict::Remove => {
                if let Some(out) = removed.as_mut() {
                    write_line(out, content, delimiter, &paths.removed)?;
                }
                on_removed(&text);
                lines_removed += 1;
            }
        }
    }

    finish_output(cleaned, &paths.cleaned)?;
    if let Some(out) = removed {
        finish_output(out, &paths.removed)?;
    }
    drop(reader);

    debug!(
        "Kept {} lines, removed {}, skipped {} empty",
        lines_kept, lines_removed, empty_lines_skipped
    );

    let replace = match replacer.replace(&paths.cleaned, file_path) {
        Ok(()) => {
            info!("Replaced {} with cleaned output.", file_path.display());
            ReplaceStatus::Replaced
        }
        Err(e) => {
            warn!(
                "Unable to replace '{}' with '{}': {}",
                file_path.display(),
                paths.cleaned.display(),
                e
            );
            ReplaceStatus::Failed(e)
        }
    };

    Ok(RewriteReport {
        source: file_path.to_path_buf(),
        cleaned_path: paths.cleaned,
        removed_path: options.retain_removed.then_some(paths.removed),
        lines_kept,
        lines_removed,
        empty_lines_skipped,
        replace,
    })
}

/// Splits a raw line into its content and its line terminator.
///
/// A final line without a terminator gets `\n` so every written line ends
/// with one.
fn split_delimiter(raw: &[u8]) -> (&[u8], &'static [u8]) {
    if let Some(content) = raw.strip_suffix(b"\r\n") {
        (content, b"\r\n")
    } else if let Some(content) = raw.strip_suffix(b"\n") {
        (content, b"\n")
    } else {
        (raw, b"\n")
    }
}

/// Creates the cleaned output, plus the removed output when retaining, under
/// the first sequence number whose names are all free.
fn create_outputs(
    file_path: &Path,
    timestamp: &DateTime<Local>,
    retain_removed: bool,
) -> Result<(OutputPaths, BufWriter<File>, Option<BufWriter<File>>), LogCleanError> {
    let mut taken = file_path.to_path_buf();

    for seq in 0..MAX_NAME_ATTEMPTS {
        let paths = OutputPaths::sequenced(file_path, timestamp, seq).ok_or_else(|| LogCleanError::InvalidLogPath {
            path: file_path.to_path_buf(),
        })?;

        let Some(cleaned) = create_output(&paths.cleaned)? else {
            taken = paths.cleaned;
            continue;
        };
        if !retain_removed {
            return Ok((paths, cleaned, None));
        }

        match create_output(&paths.removed)? {
            Some(removed) => return Ok((paths, cleaned, Some(removed))),
            None => {
                // Give back the cleaned name claimed above.
                drop(cleaned);
                if let Err(e) = fs::remove_file(&paths.cleaned) {
                    warn!("Could not remove unused output '{}': {}", paths.cleaned.display(), e);
                }
                taken = paths.removed;
            }
        }
    }

    Err(LogCleanError::log_io(
        taken,
        "creating",
        io::Error::new(io::ErrorKind::AlreadyExists, "no free output file name for this timestamp"),
    ))
}

/// Opens `path` for writing only if it does not exist yet. `Ok(None)` means it does.
fn create_output(path: &Path) -> Result<Option<BufWriter<File>>, LogCleanError> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => {
            debug!("Created output file {}", path.display());
            Ok(Some(BufWriter::new(file)))
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!("Output file {} already exists", path.display());
            Ok(None)
        }
        Err(e) => Err(LogCleanError::log_io(path, "opening", e)),
    }
}

fn write_line(out: &mut BufWriter<File>, content: &[u8], delimiter: &[u8], path: &Path) -> Result<(), LogCleanError> {
    out.write_all(content)
        .and_then(|()| out.write_all(delimiter))
        .map_err(|e| LogCleanError::log_io(path, "writing", e))
}

fn finish_output(mut out: BufWriter<File>, path: &Path) -> Result<(), LogCleanError> {
    out.flush().map_err(|e| LogCleanError::log_io(path, "writing", e))
}
