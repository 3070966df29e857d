use crate::Language;

use uuid::{Uuid, uuid};

const SUB_BUTTONS: Uuid = uuid!("4f971e89-eebd-4455-a8de-9e59040e7347");
const SUB_VIDEO: Uuid = uuid!("7516b95f-f776-4464-8c53-06167f40cc99");
const SUB_SLEEP: Uuid = uuid!("238c9fa8-0aad-41ed-83f4-97be242c8f20");

/// Per-scheme settings the tray can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerSetting {
    /// Power button action.
    PowerButton,
    /// Sleep button action.
    SleepButton,
    /// Lid close action.
    LidClose,
    /// Turn off display after.
    DisplayOff,
    /// Display off timeout while the console is locked.
    ConsoleLockDisplayOff,
    /// Sleep after.
    SleepAfter,
    /// Hibernate after.
    HibernateAfter,
    /// System unattended sleep timeout.
    UnattendedSleep,
}

/// What kind of value a setting holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// A [`ButtonLidAction`] index.
    Action,
    /// A timeout in seconds, 0 meaning never.
    Timeout,
}

impl PowerSetting {
    /// Button and lid actions, in menu order.
    pub const ACTIONS: [PowerSetting; 3] = [
        PowerSetting::PowerButton,
        PowerSetting::SleepButton,
        PowerSetting::LidClose,
    ];

    /// Display timeouts, in menu order.
    pub const DISPLAY_TIMEOUTS: [PowerSetting; 2] =
        [PowerSetting::DisplayOff, PowerSetting::ConsoleLockDisplayOff];

    /// Sleep timeouts, in menu order.
    pub const SLEEP_TIMEOUTS: [PowerSetting; 3] = [
        PowerSetting::SleepAfter,
        PowerSetting::HibernateAfter,
        PowerSetting::UnattendedSleep,
    ];

    /// Every setting.
    pub const ALL: [PowerSetting; 8] = [
        PowerSetting::PowerButton,
        PowerSetting::SleepButton,
        PowerSetting::LidClose,
        PowerSetting::DisplayOff,
        PowerSetting::ConsoleLockDisplayOff,
        PowerSetting::SleepAfter,
        PowerSetting::HibernateAfter,
        PowerSetting::UnattendedSleep,
    ];

    /// Subgroup GUID the setting lives under.
    pub fn subgroup(self) -> Uuid {
        match self {
            PowerSetting::PowerButton | PowerSetting::SleepButton | PowerSetting::LidClose => {
                SUB_BUTTONS
            }
            PowerSetting::DisplayOff | PowerSetting::ConsoleLockDisplayOff => SUB_VIDEO,
            PowerSetting::SleepAfter
            | PowerSetting::HibernateAfter
            | PowerSetting::UnattendedSleep => SUB_SLEEP,
        }
    }

    /// Setting GUID.
    pub fn guid(self) -> Uuid {
        match self {
            PowerSetting::PowerButton => uuid!("7648efa3-dd9c-4e3e-b566-50f929386280"),
            PowerSetting::SleepButton => uuid!("96996bc0-ad50-47ec-923b-6f41874dd9eb"),
            PowerSetting::LidClose => uuid!("5ca83367-6e45-459f-a27b-476b1d01c936"),
            PowerSetting::DisplayOff => uuid!("3c0bc021-c8a8-4e07-a973-6b14cbcb2b7e"),
            PowerSetting::ConsoleLockDisplayOff => uuid!("8ec4b3a5-6868-48c2-be75-4f3044be88a7"),
            PowerSetting::SleepAfter => uuid!("29f6c1db-86da-48c5-9fdb-f2b67b1f44da"),
            PowerSetting::HibernateAfter => uuid!("9d7815a6-7ee4-497e-8888-515a05f02364"),
            PowerSetting::UnattendedSleep => uuid!("7bc4a2f9-d8fc-4469-b07b-33eb785aaca0"),
        }
    }

    /// Whether the value is an action index or a timeout.
    pub fn kind(self) -> SettingKind {
        match self {
            PowerSetting::PowerButton | PowerSetting::SleepButton | PowerSetting::LidClose => {
                SettingKind::Action
            }
            _ => SettingKind::Timeout,
        }
    }

    /// Stable key used in menu ids.
    pub fn key(self) -> &'static str {
        match self {
            PowerSetting::PowerButton => "power-button",
            PowerSetting::SleepButton => "sleep-button",
            PowerSetting::LidClose => "lid",
            PowerSetting::DisplayOff => "display-off",
            PowerSetting::ConsoleLockDisplayOff => "console-lock-display-off",
            PowerSetting::SleepAfter => "sleep-after",
            PowerSetting::HibernateAfter => "hibernate-after",
            PowerSetting::UnattendedSleep => "unattended-sleep",
        }
    }

    /// Inverse of [`PowerSetting::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        PowerSetting::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Localized caption.
    pub fn caption(self, language: Language) -> &'static str {
        match self {
            PowerSetting::PowerButton => language.pick("Power button", "Botón de encendido"),
            PowerSetting::SleepButton => language.pick("Sleep button", "Botón de suspensión"),
            PowerSetting::LidClose => language.pick("Closing lid", "Cerrar tapa"),
            PowerSetting::DisplayOff => {
                language.pick("Display off timeout", "Tiempo para apagar pantalla")
            }
            PowerSetting::ConsoleLockDisplayOff => language.pick(
                "Console lock display off timeout",
                "Tiempo de pantalla al bloquear",
            ),
            PowerSetting::SleepAfter => language.pick("Sleep after", "Suspender después de"),
            PowerSetting::HibernateAfter => language.pick("Hibernate after", "Hibernar después de"),
            PowerSetting::UnattendedSleep => language.pick(
                "Unattended sleep timeout",
                "Tiempo de suspensión desatendida",
            ),
        }
    }
}

/// Power source a setting value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerSource {
    /// Plugged in.
    Ac,
    /// On battery.
    Dc,
}

impl PowerSource {
    /// Both sources, AC first.
    pub const ALL: [PowerSource; 2] = [PowerSource::Ac, PowerSource::Dc];

    /// Key used in menu ids.
    pub fn key(self) -> &'static str {
        match self {
            PowerSource::Ac => "ac",
            PowerSource::Dc => "dc",
        }
    }

    /// Inverse of [`PowerSource::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        PowerSource::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Localized submenu caption.
    pub fn caption(self, language: Language) -> &'static str {
        match self {
            PowerSource::Ac => language.pick("On AC", "Con corriente"),
            PowerSource::Dc => language.pick("On battery", "Con batería"),
        }
    }
}

/// Button and lid actions, matching the Control Panel choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonLidAction {
    /// Do nothing.
    DoNothing,
    /// Sleep.
    Sleep,
    /// Hibernate.
    Hibernate,
    /// Shut down.
    ShutDown,
}

impl ButtonLidAction {
    /// All actions in menu order.
    pub const ALL: [ButtonLidAction; 4] = [
        ButtonLidAction::DoNothing,
        ButtonLidAction::Sleep,
        ButtonLidAction::Hibernate,
        ButtonLidAction::ShutDown,
    ];

    /// Raw index stored by the OS.
    pub fn value(self) -> u32 {
        match self {
            ButtonLidAction::DoNothing => 0,
            ButtonLidAction::Sleep => 1,
            ButtonLidAction::Hibernate => 2,
            ButtonLidAction::ShutDown => 3,
        }
    }

    /// Map a raw index; values outside 0..=3 have no named action.
    pub fn from_value(value: u32) -> Option<Self> {
        ButtonLidAction::ALL.into_iter().find(|a| a.value() == value)
    }

    /// Localized caption.
    pub fn caption(self, language: Language) -> &'static str {
        match self {
            ButtonLidAction::DoNothing => language.pick("Do nothing", "No hacer nada"),
            ButtonLidAction::Sleep => language.pick("Sleep", "Suspender"),
            ButtonLidAction::Hibernate => language.pick("Hibernate", "Hibernar"),
            ButtonLidAction::ShutDown => language.pick("Shut down", "Apagar"),
        }
    }

    /// Caption for a raw value, numeric when the value is unknown.
    pub fn describe(value: u32, language: Language) -> String {
        match ButtonLidAction::from_value(value) {
            Some(action) => action.caption(language).to_string(),
            None => value.to_string(),
        }
    }
}
