use crate::config::Config;

use power_tray_core::{PersistedState, SettingsStore};

use std::path::PathBuf;

use tracing::warn;

/// Writes the runtime state back to `config.toml` after every change.
pub struct ConfigStore {
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Store writing to `path`. With `None` changes only live in memory.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl SettingsStore for ConfigStore {
    fn save(&self, state: &PersistedState) {
        let Some(path) = &self.path else {
            warn!("No config path available, change not persisted");
            return;
        };

        if let Err(e) = Config::from_state(state).save_to(path) {
            warn!(error = %e, "Failed to persist config");
        }
    }
}
