//! Logging setup
//!
//! The terminal is owned by the UI, so log records go to a file under the
//! user's cache directory instead of stderr. `RUST_LOG` overrides the
//! default `info` filter.

use crate::{Result, SetZeroError, APP_NAME, LOG_FILE};
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Get the standard log file path
pub fn log_file_path() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir().ok_or_else(|| {
        SetZeroError::LoggingError("Unable to determine cache directory".to_string())
    })?;

    Ok(cache_dir.join(APP_NAME).join(LOG_FILE))
}

/// Install the global logger writing to the standard log file
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    init_logging_to(&path)?;
    Ok(path)
}

/// Install the global logger appending to `path`
pub fn init_logging_to(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| SetZeroError::LoggingError(e.to_string()))
}
