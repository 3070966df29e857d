//! Toolkit-independent description of the tray context menu.

use crate::{
    ActiveState, ButtonLidAction, Command, IconPreference, Language, PowerSetting, PowerSource,
    SchemeId, Slot, SlotRegistry, TIMEOUT_PRESET_MINUTES, timeout_label,
};

/// One entry in a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// A clickable or informational item.
    Item(MenuItemModel),
    /// A nested menu.
    Submenu(SubmenuModel),
    /// A separator line.
    Separator,
}

/// A leaf menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemModel {
    /// Command id sent back when clicked; `None` for informational items.
    pub id: Option<String>,
    /// Caption.
    pub label: String,
    /// `Some` for check items, carrying the check state.
    pub checked: Option<bool>,
    /// Whether the item can be clicked.
    pub enabled: bool,
}

/// A submenu with its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmenuModel {
    /// Caption.
    pub label: String,
    /// Child entries.
    pub entries: Vec<MenuEntry>,
}

/// The whole context menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuModel {
    /// Top-level entries.
    pub entries: Vec<MenuEntry>,
}

impl MenuModel {
    /// Depth-first search for the item carrying `id`.
    pub fn find(&self, id: &str) -> Option<&MenuItemModel> {
        find_in(&self.entries, id)
    }
}

fn find_in<'a>(entries: &'a [MenuEntry], id: &str) -> Option<&'a MenuItemModel> {
    entries.iter().find_map(|entry| match entry {
        MenuEntry::Item(item) if item.id.as_deref() == Some(id) => Some(item),
        MenuEntry::Item(_) | MenuEntry::Separator => None,
        MenuEntry::Submenu(sub) => find_in(&sub.entries, id),
    })
}

fn command(command: Command, label: impl Into<String>) -> MenuEntry {
    MenuEntry::Item(MenuItemModel {
        id: Some(command.menu_id()),
        label: label.into(),
        checked: None,
        enabled: true,
    })
}

fn check(command: Command, label: impl Into<String>, checked: bool) -> MenuEntry {
    MenuEntry::Item(MenuItemModel {
        id: Some(command.menu_id()),
        label: label.into(),
        checked: Some(checked),
        enabled: true,
    })
}

fn note(label: impl Into<String>) -> MenuEntry {
    MenuEntry::Item(MenuItemModel {
        id: None,
        label: label.into(),
        checked: None,
        enabled: false,
    })
}

fn submenu(label: impl Into<String>, entries: Vec<MenuEntry>) -> MenuEntry {
    MenuEntry::Submenu(SubmenuModel {
        label: label.into(),
        entries,
    })
}

/// Inputs for building the menu.
pub struct MenuContext<'a> {
    /// Freshly resolved scheme list and active scheme.
    pub state: &'a ActiveState,
    /// Current slot bindings.
    pub slots: &'a SlotRegistry,
    /// Current icon preference.
    pub preference: IconPreference,
    /// Current UI language.
    pub language: Language,
    /// Reads a per-scheme setting; failures read as 0.
    pub read_setting: &'a dyn Fn(&SchemeId, PowerSetting, PowerSource) -> u32,
}

impl MenuContext<'_> {
    /// Build the full context menu.
    pub fn build(&self) -> MenuModel {
        let lang = self.language;
        let mut entries = vec![command(Command::Cycle, lang.pick("Toggle now", "Cambiar ahora"))];

        entries.extend(self.slots.iter().map(|(slot, _)| self.assign_submenu(slot)));
        entries.push(MenuEntry::Separator);
        entries.push(self.switch_submenu());
        entries.push(MenuEntry::Separator);
        entries.push(self.contrast_submenu());
        entries.push(MenuEntry::Separator);
        entries.push(self.language_submenu());
        entries.push(MenuEntry::Separator);
        entries.push(self.buttons_submenu());
        entries.push(self.display_sleep_submenu());
        entries.push(MenuEntry::Separator);
        entries.push(command(
            Command::OpenPowerOptions,
            lang.pick("Open Power Options…", "Abrir opciones de energía…"),
        ));
        entries.push(MenuEntry::Separator);
        entries.push(command(
            Command::Exit,
            lang.pick("Exit (Close Program)", "Salir (Cerrar Programa)"),
        ));

        MenuModel { entries }
    }

    fn scheme_label(&self, name: &str, is_active: bool) -> String {
        if is_active {
            format!("{}  ({})", name, self.language.pick("Active", "Activo"))
        } else {
            name.to_string()
        }
    }

    fn assign_submenu(&self, slot: Slot) -> MenuEntry {
        let lang = self.language;
        let label = match lang {
            Language::English => format!("Assign Slot {} ({} icon)", slot.key(), slot.caption(lang)),
            Language::Spanish => {
                format!("Asignar ranura {} (Ícono-{})", slot.key(), slot.caption(lang))
            }
        };

        let bound = self.slots.get(slot);
        let mut entries = self
            .state
            .schemes
            .iter()
            .map(|scheme| {
                check(
                    Command::AssignSlot {
                        slot,
                        id: scheme.id.clone(),
                    },
                    self.scheme_label(scheme.display_name(), scheme.is_active),
                    bound == Some(&scheme.id),
                )
            })
            .collect::<Vec<_>>();

        if !entries.is_empty() {
            entries.push(MenuEntry::Separator);
        }
        entries.push(command(
            Command::ClearSlot { slot },
            lang.pick("Clear this slot", "Limpiar esta ranura"),
        ));

        submenu(label, entries)
    }

    fn switch_submenu(&self) -> MenuEntry {
        let lang = self.language;
        let mut entries = self
            .slots
            .iter()
            .filter_map(|(slot, id)| id.map(|id| (slot, id)))
            .map(|(slot, id)| {
                check(
                    Command::SwitchTo { id: id.clone() },
                    format!(
                        "{} ({}): {}",
                        slot.key(),
                        slot.caption(lang),
                        self.state.display_name(id)
                    ),
                    self.state.active_id.as_ref() == Some(id),
                )
            })
            .collect::<Vec<_>>();

        if entries.is_empty() {
            entries.push(note(lang.pick("(no slots assigned)", "(sin ranuras asignadas)")));
        }

        submenu(lang.pick("Switch to…", "Cambiar a…"), entries)
    }

    fn contrast_submenu(&self) -> MenuEntry {
        let lang = self.language;
        let entries = IconPreference::ALL
            .into_iter()
            .map(|preference| {
                check(
                    Command::SetPreference { preference },
                    preference.caption(lang),
                    preference == self.preference,
                )
            })
            .collect();

        submenu(lang.pick("Icon contrast", "Contraste de iconos"), entries)
    }

    fn language_submenu(&self) -> MenuEntry {
        let entries = [(Language::English, "English"), (Language::Spanish, "Español")]
            .into_iter()
            .map(|(language, label)| {
                check(
                    Command::SetLanguage { language },
                    label,
                    language == self.language,
                )
            })
            .collect();

        submenu(self.language.pick("Language", "Idioma"), entries)
    }

    fn no_plans(&self) -> MenuEntry {
        note(self.language.pick(
            "(no power plans found)",
            "(no se encontraron planes de energía)",
        ))
    }

    fn buttons_submenu(&self) -> MenuEntry {
        let lang = self.language;
        let mut entries = self
            .state
            .schemes
            .iter()
            .map(|scheme| {
                let settings = PowerSetting::ACTIONS
                    .into_iter()
                    .map(|setting| self.action_setting_submenu(&scheme.id, setting))
                    .collect();
                submenu(
                    self.scheme_label(scheme.display_name(), scheme.is_active),
                    settings,
                )
            })
            .collect::<Vec<_>>();

        if entries.is_empty() {
            entries.push(self.no_plans());
        }

        submenu(
            lang.pick(
                "Customize (Buttons and Lid)",
                "Personalizar (Botones y tapa)",
            ),
            entries,
        )
    }

    fn action_setting_submenu(&self, scheme: &SchemeId, setting: PowerSetting) -> MenuEntry {
        let lang = self.language;
        let sources = PowerSource::ALL
            .into_iter()
            .map(|source| {
                let current = (self.read_setting)(scheme, setting, source);
                let mut choices = ButtonLidAction::ALL
                    .into_iter()
                    .map(|action| {
                        check(
                            Command::SetAction {
                                scheme: scheme.clone(),
                                setting,
                                source,
                                action,
                            },
                            action.caption(lang),
                            action.value() == current,
                        )
                    })
                    .collect::<Vec<_>>();

                if ButtonLidAction::from_value(current).is_none() {
                    choices.push(MenuEntry::Separator);
                    choices.push(note(ButtonLidAction::describe(current, lang)));
                }

                submenu(source.caption(lang), choices)
            })
            .collect();

        submenu(setting.caption(lang), sources)
    }

    fn display_sleep_submenu(&self) -> MenuEntry {
        let lang = self.language;
        let mut entries = self
            .state
            .schemes
            .iter()
            .map(|scheme| {
                let mut settings = PowerSetting::DISPLAY_TIMEOUTS
                    .into_iter()
                    .map(|setting| self.timeout_setting_submenu(&scheme.id, setting))
                    .collect::<Vec<_>>();
                settings.push(MenuEntry::Separator);
                settings.extend(
                    PowerSetting::SLEEP_TIMEOUTS
                        .into_iter()
                        .map(|setting| self.timeout_setting_submenu(&scheme.id, setting)),
                );
                submenu(
                    self.scheme_label(scheme.display_name(), scheme.is_active),
                    settings,
                )
            })
            .collect::<Vec<_>>();

        if entries.is_empty() {
            entries.push(self.no_plans());
        }

        submenu(
            lang.pick(
                "Customize (Display and Sleep)",
                "Personalizar (Pantalla y suspensión)",
            ),
            entries,
        )
    }

    fn timeout_setting_submenu(&self, scheme: &SchemeId, setting: PowerSetting) -> MenuEntry {
        let lang = self.language;
        let sources = PowerSource::ALL
            .into_iter()
            .map(|source| {
                let current = (self.read_setting)(scheme, setting, source);
                let mut choices = TIMEOUT_PRESET_MINUTES
                    .into_iter()
                    .map(|minutes| {
                        let seconds = minutes * 60;
                        check(
                            Command::SetTimeout {
                                scheme: scheme.clone(),
                                setting,
                                source,
                                seconds,
                            },
                            timeout_label(minutes, lang),
                            seconds == current,
                        )
                    })
                    .collect::<Vec<_>>();

                choices.push(MenuEntry::Separator);
                if !TIMEOUT_PRESET_MINUTES
                    .iter()
                    .any(|minutes| minutes * 60 == current)
                {
                    let value = if current % 60 == 0 {
                        timeout_label(current / 60, lang)
                    } else {
                        format!("{} s", current)
                    };
                    choices.push(note(format!(
                        "{}: {}",
                        lang.pick("Custom", "Personalizado"),
                        value
                    )));
                }
                choices.push(command(
                    Command::PromptTimeout {
                        scheme: scheme.clone(),
                        setting,
                        source,
                    },
                    lang.pick("Custom…", "Personalizado…"),
                ));

                submenu(source.caption(lang), choices)
            })
            .collect();

        submenu(setting.caption(lang), sources)
    }
}
