//! End-to-end CLI tests for the `conf` binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn conf() -> Command {
    Command::cargo_bin("conf").expect("binary exists")
}

fn write_doc(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, content).unwrap();
    path
}

const CONSISTENT: &str = "\
[black]
line-length = 100

[flake8]
max-line-length = 100
";

const CONFLICTED: &str = "\
[black]
line-length = 100

[flake8]
max-line-length = 120
";

#[test]
fn test_validate_consistent_document_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, CONSISTENT);

    conf()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("consistent"));
}

#[test]
fn test_validate_conflict_exits_one() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, CONFLICTED);

    conf()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("line_length"))
        .stdout(predicate::str::contains("contradictions"));
}

#[test]
fn test_validate_warnings_do_not_fail() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "[ruff]\nline-length = 100\n");

    conf()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning"));
}

#[test]
fn test_validate_json_emits_bundle() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, CONSISTENT);

    conf()
        .arg("validate")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"input_digest\""))
        .stdout(predicate::str::contains("\"line_length\""));
}

#[test]
fn test_resolve_prints_repaired_document() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, CONFLICTED);

    conf()
        .arg("resolve")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("max-line-length = 100"));
}

#[test]
fn test_resolve_diff_previews_changes() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, CONFLICTED);

    conf()
        .arg("resolve")
        .arg(&path)
        .arg("--diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("-max-line-length = 120"))
        .stdout(predicate::str::contains("+max-line-length = 100"));
}

#[test]
fn test_resolve_write_repairs_in_place() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, CONFLICTED);

    conf().arg("resolve").arg(&path).arg("--write").assert().success();

    let repaired = std::fs::read_to_string(&path).unwrap();
    assert!(repaired.contains("max-line-length = 100"));

    // The repaired document now validates cleanly.
    conf().arg("validate").arg(&path).assert().success();
}

#[test]
fn test_resolve_write_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, CONFLICTED);

    conf().arg("resolve").arg(&path).arg("--write").assert().success();
    let first = std::fs::read_to_string(&path).unwrap();

    conf()
        .arg("resolve")
        .arg(&path)
        .arg("--write")
        .assert()
        .success()
        .stderr(predicate::str::contains("Nothing to change"));
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_file_reports_error() {
    conf()
        .arg("validate")
        .arg("no-such-file.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_malformed_document_reports_error() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "[black\nline-length = 100\n");

    conf()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed document"));
}

#[test]
fn test_no_command_shows_hint() {
    conf()
        .assert()
        .success()
        .stdout(predicate::str::contains("conf --help"));
}
