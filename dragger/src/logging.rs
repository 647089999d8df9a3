//! File logging for hosts that own the terminal.

use std::fs::File;
use std::path::Path;

use simplelog::{Config, WriteLogger};

pub use simplelog::LevelFilter;

use crate::error::LoggingError;

/// Install a process-wide logger writing to `path`.
///
/// Terminal hosts cannot log to stdout while they draw, so diagnostics go to a file.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggingError> {
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)?;
    log::info!("[dragger] logging at {level}");
    Ok(())
}
