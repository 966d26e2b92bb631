//! Configuration management module
//!
//! Handles loading and validation of game settings from the user's
//! `setzero.toml`.

use crate::quiz::{QuestionGenerator, RoundRules};
use crate::quiz::generator::{DEFAULT_MAX_ATTEMPTS, MIN_MAX_ATTEMPTS};
use crate::{Result, SetZeroError, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Game configuration; every field may be omitted from the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Countdown window per question, in seconds
    pub question_seconds: u32,
    /// Feedback display time after an answer, in milliseconds
    pub feedback_ms: u64,
    /// Points for a correct answer
    pub points_per_correct: u32,
    /// Frames drawn per second
    pub frame_rate: u32,
    /// Cap on random draws spent building one question
    pub max_generation_attempts: usize,
    /// Fixed RNG seed for reproducible rounds
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let rules = RoundRules::default();
        Self {
            question_seconds: rules.question_seconds,
            feedback_ms: rules.feedback_ms,
            points_per_correct: rules.points_per_correct,
            frame_rate: 60,
            max_generation_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        const MAX_QUESTION_SECONDS: u32 = 600;
        if self.question_seconds == 0 || self.question_seconds > MAX_QUESTION_SECONDS {
            return Err(SetZeroError::ConfigError(format!(
                "question_seconds must be between 1 and {}",
                MAX_QUESTION_SECONDS
            )));
        }

        if self.feedback_ms == 0 {
            return Err(SetZeroError::ConfigError(
                "feedback_ms must be greater than 0".to_string(),
            ));
        }

        if self.points_per_correct == 0 {
            return Err(SetZeroError::ConfigError(
                "points_per_correct must be greater than 0".to_string(),
            ));
        }

        const MAX_FRAME_RATE: u32 = 240;
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(SetZeroError::ConfigError(format!(
                "frame_rate must be between 1 and {}",
                MAX_FRAME_RATE
            )));
        }

        if self.max_generation_attempts < MIN_MAX_ATTEMPTS {
            return Err(SetZeroError::ConfigError(format!(
                "max_generation_attempts must be at least {}",
                MIN_MAX_ATTEMPTS
            )));
        }

        Ok(())
    }

    /// Set the countdown window
    pub fn with_question_seconds(mut self, seconds: u32) -> Self {
        self.question_seconds = seconds;
        self
    }

    /// Set the feedback duration
    pub fn with_feedback_ms(mut self, millis: u64) -> Self {
        self.feedback_ms = millis;
        self
    }

    /// Set the frame rate
    pub fn with_frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = fps;
        self
    }

    /// Use a fixed RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Timing and scoring rules for a session
    pub fn round_rules(&self) -> RoundRules {
        RoundRules {
            question_seconds: self.question_seconds,
            feedback_ms: self.feedback_ms,
            points_per_correct: self.points_per_correct,
        }
    }

    /// Question generator honouring `seed` and the attempt cap
    pub fn question_generator(&self) -> QuestionGenerator {
        let generator = match self.seed {
            Some(seed) => QuestionGenerator::with_seed(seed),
            None => QuestionGenerator::new(),
        };
        generator.with_max_attempts(self.max_generation_attempts)
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SetZeroError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            SetZeroError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/setzero/setzero.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            SetZeroError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_game_rules() {
        let config = GameConfig::default();
        assert_eq!(config.question_seconds, 15);
        assert_eq!(config.feedback_ms, 1000);
        assert_eq!(config.points_per_correct, 10);
        assert_eq!(config.frame_rate, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "question_seconds = 20\nseed = 7").unwrap();

        let config = GameConfig::load_from(file.path()).unwrap();
        assert_eq!(config.question_seconds, 20);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.feedback_ms, 1000);
        assert_eq!(config.round_rules().question_seconds, 20);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(GameConfig::new().with_question_seconds(0).validate().is_err());
        assert!(GameConfig::new().with_feedback_ms(0).validate().is_err());
        assert!(GameConfig::new().with_frame_rate(1000).validate().is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_generation_attempts = 4").unwrap();
        assert!(matches!(
            GameConfig::load_from(file.path()),
            Err(SetZeroError::ConfigError(_))
        ));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "question_seconds = \"soon\"").unwrap();
        assert!(matches!(
            GameConfig::load_from(file.path()),
            Err(SetZeroError::ConfigError(_))
        ));
    }

    #[test]
    fn test_seeded_generators_agree() {
        let config = GameConfig::new().with_seed(3);
        let first = config.question_generator().generate_question().unwrap();
        let second = config.question_generator().generate_question().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generator_uses_configured_cap() {
        let mut config = GameConfig::new();
        assert_eq!(config.question_generator().max_attempts(), DEFAULT_MAX_ATTEMPTS);

        config.max_generation_attempts = MIN_MAX_ATTEMPTS;
        assert!(config.validate().is_ok());
        assert_eq!(config.question_generator().max_attempts(), MIN_MAX_ATTEMPTS);
    }

    #[test]
    fn test_config_file_path() {
        let path = GameConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("setzero"));
        assert!(path.to_string_lossy().contains("setzero.toml"));
    }
}
