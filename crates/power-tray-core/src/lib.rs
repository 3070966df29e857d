//! Power Tray Core Library
//!
//! Platform-independent power plan slot manager: discovers schemes through a
//! [`SchemeRepository`], binds them to four fixed [`Slot`]s, cycles the active
//! scheme through the assigned slots, and derives the tray icon from slot
//! assignment, active scheme and contrast preference.
//!
//! # Example
//!
//! ```no_run
//! use power_tray_core::{Command, Controller};
//!
//! fn on_menu_item(controller: &mut Controller, id: &str) {
//!     match id.parse::<Command>() {
//!         Ok(command) => {
//!             let refresh = controller.handle(command);
//!             println!("Tooltip: {}", refresh.view.tooltip);
//!         }
//!         Err(e) => eprintln!("Ignoring menu item: {}", e),
//!     }
//! }
//! ```

mod command;
mod controller;
mod cycle;
mod error;
mod i18n;
mod notice;
mod presentation;
mod resolver;
mod scheme;
mod settings;
mod shutdown_guard;
mod slots;
mod tray;

pub use {
    command::Command,
    controller::{
        Controller, ControllerParts, Effect, PersistedState, Refresh, SettingsStore, ThemeProbe,
    },
    cycle::{Activation, BusyFlag, BusyGuard, CycleEngine, CycleOutcome, next_target},
    error::{CoreError, Result as CoreResult},
    i18n::Language,
    notice::{Notice, NoticeKind, Notifier},
    presentation::{IconPreference, IconVariant, PresentationKey, derive, resolve_variant},
    resolver::{ActiveState, ActiveStateResolver},
    scheme::{Scheme, SchemeId, SchemeRepository, SessionProbe},
    settings::{
        ButtonLidAction, PowerSetting, PowerSource, SettingKind, TIMEOUT_PRESET_MINUTES,
        TimeoutPrompt, parse_custom_minutes, prompt_custom_timeout, timeout_label,
    },
    shutdown_guard::{ShutdownGuard, WriteGate},
    slots::{Slot, SlotRegistry},
    tray::{
        MenuContext, MenuEntry, MenuItemModel, MenuModel, SubmenuModel, TOOLTIP_MAX_CHARS,
        TrayView, tray_tooltip,
    },
};

#[cfg(test)]
mod tests;
