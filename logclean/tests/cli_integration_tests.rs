// logclean/tests/cli_integration_tests.rs
//! Command-line integration tests for the `log-cleaner` binary.
//!
//! Each test builds a scratch directory with a log file and a JSON config,
//! runs the real executable through `assert_cmd`, and then inspects both the
//! process output and the files left on disk.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use strip_ansi_escapes::strip as strip_ansi_escapes_fn;
use tempfile::{tempdir, TempDir};

const TIMEOUT_CONFIG: &str = r#"{"files":{"app.log":[["ERROR","timeout"]]}}"#;
const SAMPLE_LOG: &str = "2024 ERROR timeout occurred\n2024 INFO ok\n\n";

struct Workspace {
    dir: TempDir,
    log: PathBuf,
    config: PathBuf,
}

fn workspace(log_content: &str, config_content: &str) -> Result<Workspace> {
    let dir = tempdir()?;
    let log = dir.path().join("app.log");
    let config = dir.path().join("cleaner.json");
    fs::write(&log, log_content)?;
    fs::write(&config, config_content)?;
    Ok(Workspace { dir, log, config })
}

fn log_cleaner() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("log-cleaner"));
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("LOG_CLEANER_MAX_CONFIG_SIZE");
    cmd
}

/// Output is plain when not attached to a terminal, but strip escapes anyway
/// so assertions hold if colors are forced on.
fn strip_ansi(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes_fn(bytes)).to_string()
}

fn files_with_prefix(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with(prefix) {
            found.push(entry.path());
        }
    }
    Ok(found)
}

#[test]
fn test_cleans_and_retains_removed_lines() -> Result<()> {
    let ws = workspace(SAMPLE_LOG, TIMEOUT_CONFIG)?;

    let assert_result = log_cleaner()
        .arg("--retain")
        .arg(&ws.log)
        .arg(&ws.config)
        .assert()
        .success();
    let stdout = strip_ansi(&assert_result.get_output().stdout);
    let stderr = strip_ansi(&assert_result.get_output().stderr);

    assert_eq!(stdout, "Removed: 2024 ERROR timeout occurred\n");
    assert!(stderr.contains("--- Clean Summary ---"), "{stderr}");
    assert!(stderr.contains("Lines kept: 1"));
    assert!(stderr.contains("Lines removed: 1"));
    assert!(stderr.contains("Empty lines skipped: 1"));

    assert_eq!(fs::read_to_string(&ws.log)?, "2024 INFO ok\n");

    let removed = files_with_prefix(ws.dir.path(), "removed_app_")?;
    assert_eq!(removed.len(), 1);
    assert_eq!(fs::read_to_string(&removed[0])?, "2024 ERROR timeout occurred\n");
    assert!(files_with_prefix(ws.dir.path(), "cleaned_")?.is_empty());
    Ok(())
}

#[test]
fn test_without_retain_creates_no_removed_file() -> Result<()> {
    let ws = workspace(SAMPLE_LOG, TIMEOUT_CONFIG)?;

    log_cleaner().arg(&ws.log).arg(&ws.config).assert().success();

    assert_eq!(fs::read_to_string(&ws.log)?, "2024 INFO ok\n");
    assert!(files_with_prefix(ws.dir.path(), "removed_")?.is_empty());
    assert_eq!(fs::read_dir(ws.dir.path())?.count(), 2);
    Ok(())
}

#[test]
fn test_missing_section_fails_and_leaves_log_untouched() -> Result<()> {
    let ws = workspace(SAMPLE_LOG, r#"{"files":{"other.log":[["x"]]}}"#)?;

    log_cleaner()
        .arg(&ws.log)
        .arg(&ws.config)
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Could not find config information for log file 'app.log'")
                .and(predicate::str::contains("cleaner.json")),
        );

    assert_eq!(fs::read_to_string(&ws.log)?, SAMPLE_LOG);
    assert_eq!(fs::read_dir(ws.dir.path())?.count(), 2);
    Ok(())
}

#[test]
fn test_empty_identifier_list_is_fatal() -> Result<()> {
    let ws = workspace(SAMPLE_LOG, r#"{"files":{"app.log":[]}}"#)?;

    log_cleaner()
        .arg(&ws.log)
        .arg(&ws.config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No identifier items set for 'app.log'"));

    assert_eq!(fs::read_to_string(&ws.log)?, SAMPLE_LOG);
    assert_eq!(fs::read_dir(ws.dir.path())?.count(), 2);
    Ok(())
}

#[test]
fn test_malformed_config_reports_parse_error() -> Result<()> {
    let ws = workspace(SAMPLE_LOG, r#"{"files": "#)?;

    log_cleaner()
        .arg(&ws.log)
        .arg(&ws.config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
    Ok(())
}

#[test]
fn test_oversized_config_is_rejected() -> Result<()> {
    let ws = workspace(SAMPLE_LOG, TIMEOUT_CONFIG)?;

    log_cleaner()
        .args(["--max-config-size", "10"])
        .arg(&ws.log)
        .arg(&ws.config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the 10 byte limit"));

    assert_eq!(fs::read_to_string(&ws.log)?, SAMPLE_LOG);
    Ok(())
}

#[test]
fn test_missing_log_file_is_fatal() -> Result<()> {
    let ws = workspace(SAMPLE_LOG, TIMEOUT_CONFIG)?;
    fs::remove_file(&ws.log)?;

    log_cleaner()
        .arg(&ws.log)
        .arg(&ws.config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error opening file"));
    Ok(())
}

#[test]
fn test_quiet_suppresses_notices_and_summary() -> Result<()> {
    let ws = workspace(SAMPLE_LOG, TIMEOUT_CONFIG)?;

    log_cleaner()
        .arg("-q")
        .arg(&ws.log)
        .arg(&ws.config)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&ws.log)?, "2024 INFO ok\n");
    Ok(())
}

#[test]
fn test_lenient_config_warns_on_skipped_terms() -> Result<()> {
    let ws = workspace(SAMPLE_LOG, r#"{"files":{"app.log":[["ERROR", 7, "timeout"]]}}"#)?;

    log_cleaner()
        .arg(&ws.log)
        .arg(&ws.config)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping term 1 in identifier group 0"));

    assert_eq!(fs::read_to_string(&ws.log)?, "2024 INFO ok\n");
    Ok(())
}

#[test]
fn test_version_flags() {
    for flag in ["-v", "--version"] {
        log_cleaner()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_help_flag() {
    log_cleaner()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Usage:")
                .and(predicate::str::contains("--retain"))
                .and(predicate::str::contains("<LOG_FILEPATH>")),
        );
}

#[test]
fn test_missing_positional_is_usage_error() {
    log_cleaner()
        .arg("app.log")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_FILEPATH"));
}
