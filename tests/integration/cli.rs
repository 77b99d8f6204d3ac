//! Integration tests for the `typewise` binary

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn typewise(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typewise"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_check_all() {
    let output = typewise(&["check"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("type-map"));
    assert!(stdout.contains("types"));
    assert!(stdout.contains("values"));
    assert!(stdout.contains("34 passed, 0 failed, 0 skipped"));
}

#[test]
fn test_check_one_exercise() {
    let output = typewise(&["check", "--exercise", "values"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sum of {1, 2, 3} is 6"));
    assert!(!stdout.contains("A should map to int"));
    assert!(stdout.contains("9 passed"));
}

#[test]
fn test_check_unknown_exercise() {
    let output = typewise(&["check", "--exercise", "maps"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown exercise"));
}

#[test]
fn test_check_with_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typewise.toml");
    fs::write(&path, "[check]\nexercises = [\"types\"]\n").unwrap();

    let output = typewise(&["check", "--config", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("9 passed"));
}

#[test]
fn test_check_no_fail_fast_over_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typewise.toml");
    fs::write(&path, "[check]\nfail_fast = true\n").unwrap();

    let output = typewise(&["check", "--config", path.to_str().unwrap(), "--no-fail-fast"]);
    assert!(output.status.success());

    // The later flag wins
    let output = typewise(&["check", "-e", "types", "--no-fail-fast", "--fail-fast"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("9 passed"));
}

#[test]
fn test_check_bad_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typewise.toml");
    fs::write(&path, "[check\n").unwrap();

    let output = typewise(&["check", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"));
}

#[test]
fn test_list() {
    let output = typewise(&["list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("type-map"));
    assert!(lines[0].contains("16"));
}

#[test]
fn test_version() {
    let output = typewise(&["version"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
