use crate::config::default_icon_set;

use power_tray_core::{IconPreference, Language};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Icon and language choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// `auto`, `light` or `dark`, case-insensitive.
    #[serde(default = "default_icon_set")]
    pub icon_set: String,
    /// `en` or `es`; detected from the OS when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            icon_set: default_icon_set(),
            language: None,
        }
    }
}

impl AppearanceConfig {
    /// Stored preference; unrecognised values fall back to Auto.
    pub(crate) fn icon_preference(&self) -> IconPreference {
        IconPreference::parse(&self.icon_set).unwrap_or_else(|| {
            warn!(icon_set = %self.icon_set, "Unknown icon_set, using auto");
            IconPreference::Auto
        })
    }

    /// Stored language, if it names a supported one.
    pub(crate) fn language(&self) -> Option<Language> {
        let raw = self.language.as_deref()?;
        let language = Language::parse(raw);
        if language.is_none() {
            warn!(language = raw, "Unknown language, detecting from OS");
        }
        language
    }
}
