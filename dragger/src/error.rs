//! Error types.

use thiserror::Error;

/// Rejected configuration.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// Speed must be a finite number above zero.
    #[error("speed must be a finite number greater than zero, got {0}")]
    InvalidSpeed(f64),

    /// The tractor edge band cannot be negative.
    #[error("tractor edge size must be a finite, non-negative number, got {0}")]
    InvalidEdgeSize(f64),

    #[error("tractor interval must be at least 1ms")]
    ZeroInterval,

    /// The options document is not valid JSON for the recognized keys.
    #[error("invalid options: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors reported by a [`Dragger`](crate::Dragger).
#[derive(Debug, Error)]
pub enum DraggerError {
    #[error(transparent)]
    Options(#[from] OptionsError),
}

/// Errors installing the file logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("a logger is already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}
