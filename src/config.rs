//! Environment-driven configuration.
//!
//! - `TASKLIST_TITLE` sets the header title.
//! - `TASKLIST_LOG_DIR` enables file logging into that directory.
//! - `TASKLIST_LOG_LEVEL` is one of `error`, `warn`, `info`, `debug`, `trace`.

use crate::error::AppError;
use std::path::PathBuf;

pub const TITLE_VAR: &str = "TASKLIST_TITLE";
pub const LOG_DIR_VAR: &str = "TASKLIST_LOG_DIR";
pub const LOG_LEVEL_VAR: &str = "TASKLIST_LOG_LEVEL";

pub const DEFAULT_TITLE: &str = "My Task List";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    pub log_dir: Option<PathBuf>,
    pub log_level: &'static str,
}

impl Config {
    pub fn from_env() -> Result<Config, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let title = get(TITLE_VAR).unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let log_dir = get(LOG_DIR_VAR).map(PathBuf::from);
        let log_level = match get(LOG_LEVEL_VAR) {
            Some(level) => normalize_level(&level)?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Config {
            title,
            log_dir,
            log_level,
        })
    }
}

fn normalize_level(level: &str) -> Result<&'static str, AppError> {
    let lowered = level.to_ascii_lowercase();
    LOG_LEVELS
        .iter()
        .copied()
        .find(|known| *known == lowered)
        .ok_or_else(|| AppError::Config {
            key: LOG_LEVEL_VAR,
            message: format!("unsupported log level `{level}`"),
        })
}
