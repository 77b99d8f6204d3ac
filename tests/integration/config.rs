//! Configuration loading through the public API

use std::fs;

use tempfile::TempDir;
use typewise::util::config::{load_or_default, ConfigError};
use typewise::util::logger::LogLevel;
use typewise::{run_checks, Exercise};

#[test]
fn test_config_drives_selection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typewise.toml");
    fs::write(
        &path,
        r#"
[log]
level = "warn"

[check]
exercises = ["types", "type-map"]
"#,
    )
    .unwrap();

    let config = load_or_default(Some(&path)).unwrap();
    assert_eq!(config.log.level, LogLevel::Warn);

    let summary = run_checks(&config.check.exercises, config.check.fail_fast);
    let order: Vec<Exercise> = summary.reports.keys().copied().collect();
    assert_eq!(order, [Exercise::Types, Exercise::TypeMap]);
    assert_eq!(summary.totals().total(), 25);
}

#[test]
fn test_unknown_field_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typewise.toml");
    fs::write(&path, "[check]\nfailfast = true\n").unwrap();

    let err = load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("typewise.toml"));
}
