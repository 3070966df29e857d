//! Configuration management for power-tray.
//!
//! Handles loading and saving the TOML configuration file with
//! cross-platform paths and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{AppearanceConfig, CONFIG_FILE_NAME, SlotsConfig},
};

use power_tray_core::{Language, PersistedState};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Slot bindings.
    #[serde(default)]
    pub slots: SlotsConfig,
    /// Icon set and language.
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Config {
    /// Load the user's configuration.
    ///
    /// Never fails: a missing file yields defaults, and an unreadable or
    /// unparseable one is logged and replaced by defaults so the tray still
    /// starts. Nothing is written until the first change.
    #[instrument]
    pub fn load() -> Self {
        let loaded = Self::config_path().and_then(|path| Self::load_from(&path));
        match loaded {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Load from an explicit path; a missing file yields defaults.
    #[track_caller]
    #[instrument]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            info!(config_path = ?path, "No config found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Save configuration to `path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process dies during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(config_dir) = path.parent()
            && !config_dir.exists()
        {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Runtime state, using `detected` when no language is stored.
    pub fn to_state(&self, detected: Language) -> PersistedState {
        PersistedState {
            slots: self.slots.to_registry(),
            icon_preference: self.appearance.icon_preference(),
            language: self.appearance.language().unwrap_or(detected),
        }
    }

    /// On-disk form of the runtime state.
    pub fn from_state(state: &PersistedState) -> Self {
        Self {
            slots: SlotsConfig::from_registry(&state.slots),
            appearance: AppearanceConfig {
                icon_set: state.icon_preference.key().to_string(),
                language: Some(state.language.code().to_string()),
            },
        }
    }

    #[track_caller]
    pub(crate) fn config_path() -> AppResult<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("com", "power-tray", "Power-Tray").ok_or_else(|| {
                AppError::ConfigError {
                    reason: "Failed to get config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
