//! Dashboard configuration.
//!
//! Loaded from a JSON file, then overridden by command-line flags. A missing
//! default file is not an error; a missing explicit file is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::clock::{default_zones, ClockZone};
use crate::sound::NotificationSounds;
use crate::types::{LayoutMode, TimerConfig};

/// Name of the application directory under the config and data dirs.
pub const APP_DIR: &str = "tdash";

// ============================================================================
// ConfigError
// ============================================================================

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for [`DashboardConfig`].
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Values parsed but are out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// ============================================================================
// DashboardConfig
// ============================================================================

/// Timer durations in minutes, as users write them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    pub work_minutes: u32,
    pub break_minutes: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
        }
    }
}

/// Notification sound settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    /// Whether notification sounds play at all
    pub enabled: bool,
    /// Sound played when a work phase ends
    pub break_starting: Option<PathBuf>,
    /// Sound played when a break phase ends
    pub back_to_work: Option<PathBuf>,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            break_starting: None,
            back_to_work: None,
        }
    }
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub timer: TimerSettings,
    pub layout: LayoutMode,
    pub sound: SoundSettings,
    /// Zones the clock panel cycles through, first one shown at startup
    pub clock_zones: Vec<ClockZone>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            timer: TimerSettings::default(),
            layout: LayoutMode::default(),
            sound: SoundSettings::default(),
            clock_zones: default_zones(),
        }
    }
}

impl DashboardConfig {
    /// Loads configuration.
    ///
    /// With `path`, the file must exist. Without it, the default location is
    /// tried and defaults are used when nothing is there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::NotFound(path));
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        config.validate()?;

        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a duration is below one minute
    /// or no clock zone is listed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timer_config().validate().map_err(ConfigError::Invalid)?;
        if self.clock_zones.is_empty() {
            return Err(ConfigError::Invalid(
                "clock_zones must list at least one zone".to_string(),
            ));
        }
        Ok(())
    }

    /// Durations in seconds for the timer engine.
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::from_minutes(self.timer.work_minutes, self.timer.break_minutes)
    }

    /// Resolved notification sounds.
    pub fn notification_sounds(&self) -> NotificationSounds {
        NotificationSounds::from_paths(
            self.sound.break_starting.clone(),
            self.sound.back_to_work.clone(),
        )
    }
}

/// `<config dir>/tdash/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.json"))
}

/// `<data dir>/tdash/tdash.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR).join("tdash.log"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.timer_config(), TimerConfig::default());
        assert_eq!(config.layout, LayoutMode::Full);
        assert!(config.sound.enabled);
        assert_eq!(
            config.clock_zones,
            vec![
                ClockZone::Named(Tz::Europe__Paris),
                ClockZone::Named(Tz::Europe__London)
            ]
        );
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"{
                "timer": { "work_minutes": 50, "break_minutes": 10 },
                "layout": "compact",
                "sound": { "enabled": false, "break_starting": "/s/bell.mp3" },
                "clock_zones": ["UTC", "local", "America/New_York"]
            }"#,
        );

        let config = DashboardConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.timer_config(), TimerConfig::from_minutes(50, 10));
        assert_eq!(config.layout, LayoutMode::Compact);
        assert!(!config.sound.enabled);
        assert_eq!(
            config.sound.break_starting,
            Some(PathBuf::from("/s/bell.mp3"))
        );
        assert_eq!(
            config.clock_zones,
            vec![
                ClockZone::UTC,
                ClockZone::Local,
                ClockZone::Named(Tz::America__New_York)
            ]
        );
    }

    #[test]
    fn test_load_rejects_unknown_zone() {
        let file = write_config(r#"{ "clock_zones": ["Europe/Paris", "Mars/Olympus"] }"#);
        let err = DashboardConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn test_load_rejects_empty_zone_list() {
        let file = write_config(r#"{ "clock_zones": [] }"#);
        let err = DashboardConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_config(r#"{ "timer": { "work_minutes": 45 } }"#);

        let config = DashboardConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.timer.work_minutes, 45);
        assert_eq!(config.timer.break_minutes, 5);
        assert!(config.sound.enabled);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = DashboardConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_config("{ not json");
        let err = DashboardConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_zero_break() {
        let file = write_config(r#"{ "timer": { "break_minutes": 0 } }"#);
        let err = DashboardConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_notification_sounds_use_overrides() {
        let mut config = DashboardConfig::default();
        config.sound.back_to_work = Some(PathBuf::from("/s/work.wav"));

        let sounds = config.notification_sounds();
        assert_eq!(sounds.back_to_work.path(), Some(Path::new("/s/work.wav")));
    }

    #[test]
    fn test_default_paths_are_under_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("tdash/config.json"));
        }
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("tdash/tdash.log"));
        }
    }
}
