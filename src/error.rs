use std::io;
use thiserror::Error;

/// Process-level failures. Task store operations never produce these.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("invalid configuration for {key}: {message}")]
    Config { key: &'static str, message: String },
}
