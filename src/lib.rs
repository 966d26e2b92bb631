//! SET-ZERO - set theory quiz for the terminal
//!
//! A TUI game that drills union, intersection, difference and symmetric
//! difference through timed multiple-choice questions, with a menu and a
//! paginated tutorial.

use thiserror::Error;

pub mod app;
pub mod config;
pub mod logging;
pub mod quiz;
pub mod sets;

// Common error types
#[derive(Debug, Error)]
pub enum SetZeroError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Requested set size cannot be drawn from the universe
    #[error("Invalid set bounds: sizes {min}..={max} do not fit a universe of {universe}")]
    InvalidSetBounds {
        min: usize,
        max: usize,
        universe: usize,
    },
    /// Question generation gave up after the attempt cap
    #[error("Question generation error: {0}")]
    GenerationError(String),
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    TuiError(String),
    /// Logger could not be installed
    #[error("Logging error: {0}")]
    LoggingError(String),
}

impl From<std::io::Error> for SetZeroError {
    fn from(err: std::io::Error) -> Self {
        SetZeroError::IoError(err)
    }
}

impl From<toml::de::Error> for SetZeroError {
    fn from(err: toml::de::Error) -> Self {
        SetZeroError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for SET-ZERO operations
pub type Result<T> = std::result::Result<T, SetZeroError>;

/// Error handling utilities
pub mod error {
    use super::SetZeroError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &SetZeroError) -> String {
        match error {
            SetZeroError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your setzero.toml.", msg)
            }
            SetZeroError::InvalidSetBounds { .. } | SetZeroError::GenerationError(_) => {
                "Could not build a question with the current settings. Try the default configuration."
                    .to_string()
            }
            SetZeroError::TuiError(_) => {
                "Terminal setup failed. Make sure you are running in an interactive terminal."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "setzero";
pub const CONFIG_FILE: &str = "setzero.toml";
pub const LOG_FILE: &str = "setzero.log";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds_message() {
        let err = SetZeroError::InvalidSetBounds {
            min: 8,
            max: 12,
            universe: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid set bounds: sizes 8..=12 do not fit a universe of 10"
        );
    }

    #[test]
    fn test_toml_error_becomes_config_error() {
        let parse = toml::from_str::<toml::Value>("question_seconds = ").unwrap_err();
        let err = SetZeroError::from(parse);
        assert!(matches!(err, SetZeroError::ConfigError(_)));
        assert!(error::user_friendly_message(&err).contains("setzero.toml"));
    }

    #[test]
    fn test_io_errors_pass_through() {
        let err = SetZeroError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(error::user_friendly_message(&err), "I/O error: missing");
    }
}
