// SPDX-License-Identifier: MPL-2.0
//! This module handles the player configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use scout_lens::config::{self, PlayerConfig};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.skip_step_secs = 5.0;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.skip_step_secs, 5.0);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::LogCapacity;
use crate::domain::playback::{PlaybackRate, SkipStep, Volume};
use crate::domain::timeline::HighlightWindow;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ScoutLens";

/// Player preferences.
///
/// Missing keys fall back to their defaults, so older settings files keep
/// loading after new options are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Seconds before a load that never reached Ready fails.
    pub load_timeout_secs: u64,
    /// Seconds after which a pending load is reported as slow.
    pub slow_load_hint_secs: u64,
    /// Highlight window for tags without an explicit end.
    pub highlight_window_secs: f64,
    /// Seconds covered by one arrow-key skip.
    pub skip_step_secs: f64,
    /// Initial volume (0.0 to 1.0).
    pub volume: f32,
    /// Initial mute state.
    pub muted: bool,
    /// Initial playback rate.
    pub playback_rate: f64,
    /// Number of events kept in the activity log.
    pub activity_log_capacity: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            load_timeout_secs: DEFAULT_LOAD_TIMEOUT_SECS,
            slow_load_hint_secs: DEFAULT_SLOW_LOAD_HINT_SECS,
            highlight_window_secs: DEFAULT_HIGHLIGHT_WINDOW_SECS,
            skip_step_secs: DEFAULT_SKIP_STEP_SECS,
            volume: DEFAULT_VOLUME,
            muted: false,
            playback_rate: 1.0,
            activity_log_capacity: DEFAULT_ACTIVITY_LOG_CAPACITY,
        }
    }
}

impl PlayerConfig {
    /// Load timeout, clamped to the supported range.
    #[must_use]
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(
            self.load_timeout_secs
                .clamp(MIN_LOAD_TIMEOUT_SECS, MAX_LOAD_TIMEOUT_SECS),
        )
    }

    /// Delay before a pending load is reported as slow. Never exceeds the
    /// load timeout.
    #[must_use]
    pub fn slow_load_hint(&self) -> Duration {
        Duration::from_secs(self.slow_load_hint_secs).min(self.load_timeout())
    }

    #[must_use]
    pub fn highlight_window(&self) -> HighlightWindow {
        HighlightWindow::new(self.highlight_window_secs)
    }

    #[must_use]
    pub fn skip_step(&self) -> SkipStep {
        SkipStep::new(self.skip_step_secs)
    }

    #[must_use]
    pub fn initial_volume(&self) -> Volume {
        Volume::new(self.volume)
    }

    #[must_use]
    pub fn initial_rate(&self) -> PlaybackRate {
        PlaybackRate::new(self.playback_rate)
    }

    #[must_use]
    pub fn activity_log_capacity(&self) -> LogCapacity {
        LogCapacity::new(self.activity_log_capacity)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<PlayerConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(PlayerConfig::default())
}

pub fn save(config: &PlayerConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a settings file. Invalid TOML yields the default configuration.
pub fn load_from_path(path: &Path) -> Result<PlayerConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(PlayerConfig::default())
        }
    }
}

pub fn save_to_path(config: &PlayerConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let config = PlayerConfig {
            load_timeout_secs: 45,
            skip_step_secs: 5.0,
            muted: true,
            ..PlayerConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, PlayerConfig::default());
    }

    #[test]
    fn missing_keys_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "skip_step_secs = 15.0\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.skip_step_secs, 15.0);
        assert_eq!(loaded.load_timeout_secs, DEFAULT_LOAD_TIMEOUT_SECS);
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = PlayerConfig {
            load_timeout_secs: 0,
            slow_load_hint_secs: 600,
            volume: 3.0,
            playback_rate: 1.3,
            ..PlayerConfig::default()
        };
        assert_eq!(config.load_timeout(), Duration::from_secs(MIN_LOAD_TIMEOUT_SECS));
        assert_eq!(config.slow_load_hint(), config.load_timeout());
        assert_eq!(config.initial_volume().value(), 1.0);
        assert_eq!(config.initial_rate().value(), 1.25);
    }

    #[test]
    fn default_config_matches_constants() {
        let config = PlayerConfig::default();
        assert_eq!(config.load_timeout(), Duration::from_secs(30));
        assert_eq!(config.slow_load_hint(), Duration::from_secs(10));
        assert_eq!(config.highlight_window().value(), 5.0);
        assert_eq!(config.skip_step().value(), 10.0);
    }
}
