//! Application configuration

use crate::controller::Mode;
use crate::utils::error::LineJoinerError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const SETTINGS_FILE: &str = "settings.json";

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Delay between polls after processing, a failure, or while in manual mode (ms)
    pub poll_interval_ms: u64,

    /// Delay after a poll that found nothing new (ms)
    pub idle_backoff_ms: u64,

    /// Mode the watcher starts in
    pub start_mode: Mode,

    /// Capacity of the watcher's command and event channels
    pub event_buffer: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            idle_backoff_ms: 500,
            start_mode: Mode::Automatic,
            event_buffer: 64,
        }
    }
}

impl AppSettings {
    /// Default location of the settings file, `<config dir>/linejoiner/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("linejoiner").join(SETTINGS_FILE))
    }

    /// Load settings.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// read when present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, LineJoinerError> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No settings file found, using defaults");
                    Self::default()
                }
            },
        };

        Ok(settings.validated())
    }

    /// Parse a settings file
    pub fn from_file(path: &Path) -> Result<Self, LineJoinerError> {
        let raw = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&raw)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Enforce sane minimums
    pub fn validated(mut self) -> Self {
        if self.poll_interval_ms == 0 {
            self.poll_interval_ms = 1;
        }
        if self.idle_backoff_ms == 0 {
            self.idle_backoff_ms = 1;
        }
        if self.event_buffer == 0 {
            self.event_buffer = 1;
        }
        self
    }

    /// Override the poll interval, rejecting zero
    pub fn with_poll_interval(mut self, interval_ms: u64) -> Result<Self, LineJoinerError> {
        if interval_ms == 0 {
            return Err(LineJoinerError::InvalidSetting(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        self.poll_interval_ms = interval_ms;
        Ok(self)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn idle_backoff(&self) -> Duration {
        Duration::from_millis(self.idle_backoff_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.idle_backoff(), Duration::from_millis(500));
        assert_eq!(config.start_mode, Mode::Automatic);
        assert!(config.event_buffer > 0);
    }

    #[test]
    fn test_validated_enforces_minimums() {
        let config = AppSettings {
            poll_interval_ms: 0,
            idle_backoff_ms: 0,
            start_mode: Mode::Manual,
            event_buffer: 0,
        }
        .validated();

        assert_eq!(config.poll_interval_ms, 1);
        assert_eq!(config.idle_backoff_ms, 1);
        assert_eq!(config.event_buffer, 1);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "poll_interval_ms": 250, "start_mode": "manual" }}"#).unwrap();

        let config = AppSettings::load(Some(file.path())).unwrap();

        assert_eq!(config.poll_interval_ms, 250);
        assert_eq!(config.start_mode, Mode::Manual);
        assert_eq!(config.idle_backoff_ms, 500);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let result = AppSettings::load(Some(missing.as_path()));
        assert!(matches!(result, Err(LineJoinerError::IoError(_))));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = AppSettings::load(Some(file.path()));
        assert!(matches!(result, Err(LineJoinerError::SerializationError(_))));
    }

    #[test]
    fn test_zero_cli_interval_is_rejected() {
        assert!(AppSettings::default().with_poll_interval(0).is_err());
        let config = AppSettings::default().with_poll_interval(200).unwrap();
        assert_eq!(config.poll_interval_ms, 200);
    }
}
