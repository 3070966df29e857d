mod appearance_config;
#[allow(clippy::module_inception)]
mod config;
mod config_store;
mod slots_config;

pub(crate) use {
    appearance_config::AppearanceConfig, config::Config, config_store::ConfigStore,
    slots_config::SlotsConfig,
};

use std::time::Duration;

pub(crate) const CONFIG_FILE_NAME: &str = "config.toml";
pub(crate) const DEFAULT_ICON_SET: &str = "auto";

/// How often the tray re-reads the active scheme and system theme.
pub(crate) const POLL_INTERVAL: Duration = Duration::from_millis(2000);
/// Startup refresh attempts while the power service comes up.
pub(crate) const STARTUP_ATTEMPTS: u32 = 5;
pub(crate) const STARTUP_RETRY_DELAY: Duration = Duration::from_millis(250);

pub(crate) fn default_icon_set() -> String {
    DEFAULT_ICON_SET.to_string()
}
