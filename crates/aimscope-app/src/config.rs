//! Host configuration, loaded from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use aimscope_core::constants::{BOUNCE_LIMIT_X, DEFAULT_SESSION_SECS, TICK_RATE};
use aimscope_sim::SessionConfig;

/// Errors raised by the host layer. The engine itself never fails; these
/// cover configuration and the plumbing around the game loop thread.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("game loop already running")]
    AlreadyRunning,

    #[error("game loop not started")]
    NotStarted,

    #[error("game loop channel closed")]
    ChannelClosed,

    #[error("shared state lock poisoned")]
    StatePoisoned,

    #[error("failed to spawn game loop thread: {0}")]
    ThreadSpawn(#[source] std::io::Error),
}

impl AppError {
    /// Whether the caller can retry or carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::AlreadyRunning | Self::NotStarted)
    }
}

/// Engine settings as they appear in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub seed: u64,
    pub sensitivity: f64,
    pub bounce_limit_x: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            sensitivity: 1.0,
            bounce_limit_x: BOUNCE_LIMIT_X,
        }
    }
}

impl From<&SessionSettings> for SessionConfig {
    fn from(s: &SessionSettings) -> Self {
        SessionConfig {
            seed: s.seed,
            sensitivity: s.sensitivity,
            bounce_limit_x: s.bounce_limit_x,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionSettings,
    /// Game loop frequency.
    pub tick_rate_hz: u32,
    /// Length of the countdown after which the loop ends the session.
    pub session_secs: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: SessionSettings::default(),
            tick_rate_hz: TICK_RATE,
            session_secs: DEFAULT_SESSION_SECS,
        }
    }
}

impl AppConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.tick_rate_hz == 0 {
            return Err(AppError::InvalidConfig("tick_rate_hz must be positive".into()));
        }
        if !(self.session_secs.is_finite() && self.session_secs > 0.0) {
            return Err(AppError::InvalidConfig(
                "session_secs must be a positive number".into(),
            ));
        }
        if !(self.session.bounce_limit_x.is_finite() && self.session.bounce_limit_x > 0.0) {
            return Err(AppError::InvalidConfig(
                "bounce_limit_x must be a positive number".into(),
            ));
        }
        Ok(())
    }

    /// Seconds of simulated time per game loop tick.
    pub fn tick_secs(&self) -> f64 {
        1.0 / self.tick_rate_hz as f64
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::from(&self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = AppConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.seed, 42);
        assert_eq!(config.tick_rate_hz, 60);
    }

    #[test]
    fn test_partial_session_block() {
        let config =
            AppConfig::from_json_str(r#"{"session":{"seed":7},"session_secs":30.0}"#).unwrap();
        assert_eq!(config.session.seed, 7);
        assert_eq!(config.session.sensitivity, 1.0);
        assert_eq!(config.session_secs, 30.0);

        let engine_config = config.session_config();
        assert_eq!(engine_config.seed, 7);
        assert_eq!(engine_config.bounce_limit_x, 8.0);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let err = AppConfig::from_json_str(r#"{"tick_rate_hz":0}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_negative_session_length_rejected() {
        let err = AppConfig::from_json_str(r#"{"session_secs":-1.0}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = AppConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load("/nonexistent/aimscope.json").unwrap_err();
        assert!(matches!(err, AppError::ConfigIo { .. }));
        assert!(err.to_string().contains("aimscope.json"));
    }

    #[test]
    fn test_tick_secs() {
        let config = AppConfig {
            tick_rate_hz: 50,
            ..Default::default()
        };
        assert!((config.tick_secs() - 0.02).abs() < 1e-12);
    }
}
