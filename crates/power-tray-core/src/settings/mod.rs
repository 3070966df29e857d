mod power_setting;
mod timeout;

pub use {
    power_setting::{ButtonLidAction, PowerSetting, PowerSource, SettingKind},
    timeout::{
        TIMEOUT_PRESET_MINUTES, TimeoutPrompt, parse_custom_minutes, prompt_custom_timeout,
        timeout_label,
    },
};
