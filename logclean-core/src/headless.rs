// logclean-core/src/headless.rs

//! `headless.rs`
//! One-shot wrapper that runs the whole cleaning pipeline from [`Settings`]:
//! basename lookup, config resolution, then the in-place rewrite.

use log::debug;

use crate::config::Config;
use crate::errors::LogCleanError;
use crate::naming::file_basename;
use crate::rewriter::{rewrite_with, RenameReplace, RewriteOptions, RewriteReport};
use crate::settings::Settings;

/// Cleans `settings.file_path` using the section of `settings.config_file`
/// named after the log file's basename.
///
/// `on_removed` sees the text of every removed line. Nothing is created or
/// modified on disk if the config cannot be resolved.
pub fn headless_clean_file<F>(settings: &Settings, on_removed: F) -> Result<RewriteReport, LogCleanError>
where
    F: FnMut(&str),
{
    let file_name = file_basename(&settings.file_path).ok_or_else(|| LogCleanError::InvalidLogPath {
        path: settings.file_path.clone(),
    })?;
    debug!("Resolving config section '{}'", file_name);

    let config = Config::load(&settings.config_file, &file_name, settings.max_config_size)?;

    rewrite_with(
        &settings.file_path,
        &config,
        &RewriteOptions::retaining(settings.retain_removed),
        &RenameReplace,
        on_removed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn cleans_file_end_to_end() -> Result<()> {
        let dir = tempdir()?;
        let log = dir.path().join("app.log");
        let cfg = dir.path().join("config.json");
        fs::write(&log, "2024 ERROR timeout occurred\n2024 INFO ok\n\n")?;
        fs::write(&cfg, r#"{"files":{"app.log":[["ERROR","timeout"]]}}"#)?;

        let mut seen = Vec::new();
        let report = headless_clean_file(&Settings::new(&log, &cfg), |line| seen.push(line.to_string()))?;

        assert!(report.replaced());
        assert_eq!(fs::read_to_string(&log)?, "2024 INFO ok\n");
        assert_eq!(seen, ["2024 ERROR timeout occurred"]);
        Ok(())
    }

    #[test]
    fn missing_section_touches_nothing() -> Result<()> {
        let dir = tempdir()?;
        let log = dir.path().join("app.log");
        let cfg = dir.path().join("config.json");
        fs::write(&log, "line\n")?;
        fs::write(&cfg, r#"{"files":{"other.log":[["x"]]}}"#)?;

        let err = headless_clean_file(&Settings::new(&log, &cfg), |_| {}).unwrap_err();

        assert!(matches!(err, LogCleanError::ConfigNotFound { ref file_name, .. } if file_name == "app.log"));
        assert_eq!(fs::read_dir(dir.path())?.count(), 2);
        Ok(())
    }
}
