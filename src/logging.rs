//! File-based logging.
//!
//! The terminal belongs to the UI while the app runs, so log records go to
//! a rotating file and never to stdout or stderr.

use crate::config::Config;
use crate::error::AppError;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use std::path::Path;

const LOG_FILE_BASENAME: &str = "tasklist";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts file logging when `config.log_dir` is set.
///
/// The returned handle must be kept alive for as long as records should be
/// written. Returns `Ok(None)` when no log directory is configured.
pub fn init_logging(config: &Config) -> Result<Option<LoggerHandle>, AppError> {
    match &config.log_dir {
        Some(dir) => start_file_logger(config.log_level, dir).map(Some),
        None => Ok(None),
    }
}

fn start_file_logger(level: &str, dir: &Path) -> Result<LoggerHandle, AppError> {
    std::fs::create_dir_all(dir).map_err(|err| {
        AppError::Logging(format!(
            "failed to create log directory `{}`: {err}",
            dir.display()
        ))
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| AppError::Logging(format!("invalid log level `{level}`: {err}")))?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| AppError::Logging(format!("failed to start logger: {err}")))?;

    info!(
        "event=logging_started level={} log_dir={} version={}",
        level,
        dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(handle)
}
