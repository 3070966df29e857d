//! Tagged commands produced by the tray and consumed by the controller.
//!
//! Each command round-trips through a compact menu-item id so the tray
//! toolkit only ever carries strings. Scheme ids always come last in the id
//! so they are never split.

use crate::{
    ButtonLidAction, CoreError, IconPreference, Language, PowerSetting, PowerSource, SchemeId,
    SettingKind, Slot,
};

use std::{panic::Location, str::FromStr};

use error_location::ErrorLocation;

/// Everything the user can ask the tray to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate the next assigned scheme.
    Cycle,
    /// Bind a slot to a scheme.
    AssignSlot {
        /// Slot to bind.
        slot: Slot,
        /// Scheme to bind it to.
        id: SchemeId,
    },
    /// Unbind a slot.
    ClearSlot {
        /// Slot to clear.
        slot: Slot,
    },
    /// Activate a specific scheme.
    SwitchTo {
        /// Scheme to activate.
        id: SchemeId,
    },
    /// Change the icon contrast preference.
    SetPreference {
        /// New preference.
        preference: IconPreference,
    },
    /// Change the UI language.
    SetLanguage {
        /// New language.
        language: Language,
    },
    /// Set a button or lid action on a scheme.
    SetAction {
        /// Scheme to edit.
        scheme: SchemeId,
        /// Button or lid setting.
        setting: PowerSetting,
        /// AC or DC value.
        source: PowerSource,
        /// Action to store.
        action: ButtonLidAction,
    },
    /// Set a display or sleep timeout on a scheme.
    SetTimeout {
        /// Scheme to edit.
        scheme: SchemeId,
        /// Timeout setting.
        setting: PowerSetting,
        /// AC or DC value.
        source: PowerSource,
        /// Timeout in seconds, 0 meaning never.
        seconds: u32,
    },
    /// Ask the user for a custom display or sleep timeout.
    PromptTimeout {
        /// Scheme to edit.
        scheme: SchemeId,
        /// Timeout setting.
        setting: PowerSetting,
        /// AC or DC value.
        source: PowerSource,
    },
    /// Open the OS power options panel.
    OpenPowerOptions,
    /// Quit the tray.
    Exit,
}

impl Command {
    /// Encode as a menu-item id. Inverse of [`Command::from_str`].
    pub fn menu_id(&self) -> String {
        match self {
            Command::Cycle => "cycle".to_string(),
            Command::AssignSlot { slot, id } => format!("assign:{}:{}", slot.key(), id),
            Command::ClearSlot { slot } => format!("clear:{}", slot.key()),
            Command::SwitchTo { id } => format!("switch:{}", id),
            Command::SetPreference { preference } => format!("pref:{}", preference.key()),
            Command::SetLanguage { language } => format!("lang:{}", language.code()),
            Command::SetAction {
                scheme,
                setting,
                source,
                action,
            } => format!(
                "action:{}:{}:{}:{}",
                setting.key(),
                source.key(),
                action.value(),
                scheme
            ),
            Command::SetTimeout {
                scheme,
                setting,
                source,
                seconds,
            } => format!(
                "timeout:{}:{}:{}:{}",
                setting.key(),
                source.key(),
                seconds,
                scheme
            ),
            Command::PromptTimeout {
                scheme,
                setting,
                source,
            } => format!("custom:{}:{}:{}", setting.key(), source.key(), scheme),
            Command::OpenPowerOptions => "power-options".to_string(),
            Command::Exit => "exit".to_string(),
        }
    }

    fn parse(id: &str) -> Option<Self> {
        let (verb, rest) = id.split_once(':').unwrap_or((id, ""));

        match verb {
            "cycle" if rest.is_empty() => Some(Command::Cycle),
            "power-options" if rest.is_empty() => Some(Command::OpenPowerOptions),
            "exit" if rest.is_empty() => Some(Command::Exit),
            "assign" => {
                let (slot, scheme) = rest.split_once(':')?;
                Some(Command::AssignSlot {
                    slot: Slot::from_key(slot)?,
                    id: SchemeId::new(scheme)?,
                })
            }
            "clear" => Some(Command::ClearSlot {
                slot: Slot::from_key(rest)?,
            }),
            "switch" => Some(Command::SwitchTo {
                id: SchemeId::new(rest)?,
            }),
            "pref" => Some(Command::SetPreference {
                preference: IconPreference::parse(rest)?,
            }),
            "lang" => Some(Command::SetLanguage {
                language: Language::parse(rest)?,
            }),
            "action" => {
                let (setting, source, value, scheme) = split_setting_fields(rest)?;
                if setting.kind() != SettingKind::Action {
                    return None;
                }
                let action = ButtonLidAction::from_value(value.parse().ok()?)?;
                Some(Command::SetAction {
                    scheme,
                    setting,
                    source,
                    action,
                })
            }
            "timeout" => {
                let (setting, source, value, scheme) = split_setting_fields(rest)?;
                if setting.kind() != SettingKind::Timeout {
                    return None;
                }
                Some(Command::SetTimeout {
                    scheme,
                    setting,
                    source,
                    seconds: value.parse().ok()?,
                })
            }
            "custom" => {
                let mut fields = rest.splitn(3, ':');
                let setting = PowerSetting::from_key(fields.next()?)?;
                let source = PowerSource::from_key(fields.next()?)?;
                let scheme = SchemeId::new(fields.next()?)?;
                if setting.kind() != SettingKind::Timeout {
                    return None;
                }
                Some(Command::PromptTimeout {
                    scheme,
                    setting,
                    source,
                })
            }
            _ => None,
        }
    }
}

fn split_setting_fields(rest: &str) -> Option<(PowerSetting, PowerSource, &str, SchemeId)> {
    let mut fields = rest.splitn(4, ':');
    let setting = PowerSetting::from_key(fields.next()?)?;
    let source = PowerSource::from_key(fields.next()?)?;
    let value = fields.next()?;
    let scheme = SchemeId::new(fields.next()?)?;
    Some((setting, source, value, scheme))
}

impl FromStr for Command {
    type Err = CoreError;

    #[track_caller]
    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Command::parse(id).ok_or_else(|| CoreError::UnknownCommand {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
