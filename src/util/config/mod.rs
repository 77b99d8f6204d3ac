//! Configuration for the `typewise` binary
//!
//! A single TOML file, every field optional:
//!
//! ```toml
//! [log]
//! level = "info"          # debug | info | warn | error
//!
//! [check]
//! exercises = []          # empty = all
//! fail_fast = false
//! ```
//!
//! Command line flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::exercises::Exercise;
use crate::util::logger::LogLevel;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
    /// Battery settings
    #[serde(default)]
    pub check: CheckConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Battery configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Exercises to run; empty runs all of them
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    /// Stop at the first failed assertion
    #[serde(default)]
    pub fail_fast: bool,
}

impl CheckConfig {
    /// Apply a command line `--fail-fast` / `--no-fail-fast`; `None` keeps
    /// the configured value
    pub fn override_fail_fast(
        &mut self,
        flag: Option<bool>,
    ) {
        if let Some(fail_fast) = flag {
            self.fail_fast = fail_fast;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration from `path`, or the defaults when there is none
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}
