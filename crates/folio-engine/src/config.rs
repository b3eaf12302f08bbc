//! Configuration types for the folio controller.
//!
//! This module defines the tuning knobs for divider snapping, eased
//! animation, keyboard stepping and the scroll/resize debounce windows.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Distance (in percent) from 0, 50 or 100 within which a released
    /// divider snaps.
    #[serde(default = "default_snap_threshold")]
    pub snap_threshold: f64,

    /// Length of an eased divider animation in milliseconds.
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,

    /// Quiet period after the last scroll event before the current
    /// milestone is recomputed.
    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,

    /// Quiet period after the last resize event before layout-derived
    /// state is recomputed.
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,

    /// Divider step (in percent) for the Left/Right keys.
    #[serde(default = "default_keyboard_step")]
    pub keyboard_step: f64,

    /// Divider position applied when the page becomes ready.
    #[serde(default = "default_initial_divider_position")]
    pub initial_divider_position: f64,
}

fn default_snap_threshold() -> f64 {
    5.0
}

fn default_animation_duration_ms() -> u64 {
    300
}

fn default_scroll_debounce_ms() -> u64 {
    100
}

fn default_resize_debounce_ms() -> u64 {
    250
}

fn default_keyboard_step() -> f64 {
    5.0
}

fn default_initial_divider_position() -> f64 {
    50.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snap_threshold: default_snap_threshold(),
            animation_duration_ms: default_animation_duration_ms(),
            scroll_debounce_ms: default_scroll_debounce_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            keyboard_step: default_keyboard_step(),
            initial_divider_position: default_initial_divider_position(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Initial divider position, clamped to the valid range.
    pub fn initial_position(&self) -> f64 {
        self.initial_divider_position.clamp(0.0, 100.0)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!((config.snap_threshold - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.animation_duration(), Duration::from_millis(300));
        assert_eq!(config.scroll_debounce(), Duration::from_millis(100));
        assert_eq!(config.resize_debounce(), Duration::from_millis(250));
        assert!((config.keyboard_step - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"snap_threshold": 8.0}"#).unwrap();
        assert!((config.snap_threshold - 8.0).abs() < f64::EPSILON);
        assert_eq!(config.animation_duration_ms, 300);
        assert_eq!(config.resize_debounce_ms, 250);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".folio").join("config.json");

        let config = Config {
            keyboard_step: 10.0,
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_initial_position_clamped() {
        let config = Config {
            initial_divider_position: 140.0,
            ..Config::default()
        };
        assert!((config.initial_position() - 100.0).abs() < f64::EPSILON);
    }
}
