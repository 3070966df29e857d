//! Single explicit handler for every tray command.
//!
//! All state transitions run here, serialized by the caller's event loop.

use crate::{
    ActiveState, ActiveStateResolver, BusyFlag, Command, CycleEngine, CycleOutcome,
    IconPreference, Language, MenuContext, MenuModel, Notifier, PowerSetting, PowerSource,
    SchemeId, SchemeRepository, ShutdownGuard, SlotRegistry, TrayView, WriteGate, derive,
    tray_tooltip,
};

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

/// User state that survives restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    /// Slot bindings.
    pub slots: SlotRegistry,
    /// Icon contrast preference.
    pub icon_preference: IconPreference,
    /// UI language.
    pub language: Language,
}

/// Persists [`PersistedState`] after every mutation.
pub trait SettingsStore {
    /// Save the state. Failures are the store's to log; they never reach
    /// the user.
    fn save(&self, state: &PersistedState);
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn save(&self, state: &PersistedState) {
        (**self).save(state)
    }
}

/// Reports whether the OS uses a light theme.
pub trait ThemeProbe {
    /// `true` for a light system theme. Defaults to light when unknown.
    fn system_is_light(&self) -> bool;
}

impl<T: ThemeProbe + ?Sized> ThemeProbe for Arc<T> {
    fn system_is_light(&self) -> bool {
        (**self).system_is_light()
    }
}

/// Side effects the caller performs outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the custom timeout dialog, then dispatch
    /// [`Command::SetTimeout`] with the accepted value.
    PromptTimeout {
        /// Scheme to edit.
        scheme: SchemeId,
        /// Timeout setting.
        setting: PowerSetting,
        /// AC or DC value.
        source: PowerSource,
        /// Value shown when the dialog opens, in seconds.
        current_seconds: u32,
    },
    /// Launch the OS power options panel.
    OpenPowerOptions,
    /// Tear down the tray and exit.
    Exit,
}

/// What the tray should display after a command or poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refresh {
    /// Icon and tooltip.
    pub view: TrayView,
    /// Rebuilt menu, when its contents may have changed.
    pub menu: Option<MenuModel>,
    /// Side effect requested by the command.
    pub effect: Option<Effect>,
}

/// Collaborators and initial state for a [`Controller`].
pub struct ControllerParts {
    /// OS power-configuration store.
    pub repository: Box<dyn SchemeRepository + Send>,
    /// Shutdown latch plus OS session probe.
    pub gate: WriteGate,
    /// System theme signal.
    pub theme: Box<dyn ThemeProbe + Send>,
    /// Persistence for slots and preferences.
    pub store: Box<dyn SettingsStore + Send>,
    /// User notices.
    pub notifier: Box<dyn Notifier + Send>,
    /// State loaded at startup.
    pub state: PersistedState,
}

/// Owns the slot registry and preferences and dispatches [`Command`]s.
pub struct Controller {
    repository: Box<dyn SchemeRepository + Send>,
    gate: WriteGate,
    theme: Box<dyn ThemeProbe + Send>,
    store: Box<dyn SettingsStore + Send>,
    notifier: Box<dyn Notifier + Send>,
    busy: BusyFlag,
    state: PersistedState,
    last_state: Option<ActiveState>,
    last_view: Option<TrayView>,
}

impl Controller {
    /// Build a controller from its parts.
    pub fn new(parts: ControllerParts) -> Self {
        Self {
            repository: parts.repository,
            gate: parts.gate,
            theme: parts.theme,
            store: parts.store,
            notifier: parts.notifier,
            busy: BusyFlag::new(),
            state: parts.state,
            last_state: None,
            last_view: None,
        }
    }

    /// Current persisted state.
    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    /// The shared shutdown latch.
    pub fn guard(&self) -> &ShutdownGuard {
        self.gate.guard()
    }

    /// Active scheme seen by the most recent refresh or poll.
    pub fn last_active_id(&self) -> Option<&SchemeId> {
        self.last_state.as_ref()?.active_id.as_ref()
    }

    /// Re-read OS state and rebuild the whole view and menu.
    #[instrument(skip(self))]
    pub fn refresh(&mut self) -> Refresh {
        self.render(None, None)
    }

    /// Periodic tick. Re-derives the view and returns it only when the icon,
    /// tooltip or scheme list changed. Does nothing once shutdown has begun.
    pub fn poll(&mut self) -> Option<Refresh> {
        if self.gate.guard().is_set() {
            return None;
        }

        let state = self.resolver().resolve();
        let view = self.view_for(&state, None);

        let state_changed = self.last_state.as_ref() != Some(&state);
        let view_changed = self.last_view.as_ref() != Some(&view);
        if !state_changed && !view_changed {
            return None;
        }

        debug!(state_changed, view_changed, "Poll detected a change");

        let menu = state_changed.then(|| self.build_menu(&state));
        self.last_state = Some(state);
        self.last_view = Some(view.clone());

        Some(Refresh {
            view,
            menu,
            effect: None,
        })
    }

    /// Dispatch one command and return the refreshed presentation.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Refresh {
        match command {
            Command::Cycle => {
                let outcome = self
                    .engine()
                    .cycle_to_next(&self.state.slots, self.state.language);
                match outcome {
                    CycleOutcome::Busy => self.current(),
                    outcome => self.render(outcome.target().cloned(), None),
                }
            }
            Command::AssignSlot { slot, id } => {
                info!(slot = slot.key(), scheme_id = %id, "Assigning slot");
                self.state.slots.set(slot, Some(id));
                self.persist();
                self.render(None, None)
            }
            Command::ClearSlot { slot } => {
                info!(slot = slot.key(), "Clearing slot");
                self.state.slots.set(slot, None);
                self.persist();
                self.render(None, None)
            }
            Command::SwitchTo { id } => {
                let activation = self.engine().activate(&id);
                info!(scheme_id = %id, ?activation, "Switching power scheme");
                self.render(Some(id), None)
            }
            Command::SetPreference { preference } => {
                info!(preference = preference.key(), "Icon preference changed");
                self.state.icon_preference = preference;
                self.persist();
                self.render(None, None)
            }
            Command::SetLanguage { language } => {
                info!(language = language.code(), "Language changed");
                self.state.language = language;
                self.persist();
                self.render(None, None)
            }
            Command::SetAction {
                scheme,
                setting,
                source,
                action,
            } => {
                self.write_setting(&scheme, setting, source, action.value());
                self.render(None, None)
            }
            Command::SetTimeout {
                scheme,
                setting,
                source,
                seconds,
            } => {
                self.write_setting(&scheme, setting, source, seconds);
                self.render(None, None)
            }
            Command::PromptTimeout {
                scheme,
                setting,
                source,
            } => {
                if !self.gate.is_open() {
                    info!("Write gate closed, not prompting for a timeout");
                    return self.current();
                }
                let current_seconds = self
                    .repository
                    .read_setting(&scheme, setting, source)
                    .unwrap_or(0);
                debug!(
                    setting = setting.key(),
                    source = source.key(),
                    current_seconds,
                    "Prompting for custom timeout"
                );
                Refresh {
                    view: self.current().view,
                    menu: None,
                    effect: Some(Effect::PromptTimeout {
                        scheme,
                        setting,
                        source,
                        current_seconds,
                    }),
                }
            }
            Command::OpenPowerOptions => self.render(None, Some(Effect::OpenPowerOptions)),
            Command::Exit => {
                self.gate.guard().begin("menu-exit");
                Refresh {
                    view: self.current().view,
                    menu: None,
                    effect: Some(Effect::Exit),
                }
            }
        }
    }

    fn resolver(&self) -> ActiveStateResolver<'_> {
        ActiveStateResolver::new(self.repository.as_ref(), &self.gate)
    }

    fn engine(&self) -> CycleEngine<'_> {
        CycleEngine::new(
            self.repository.as_ref(),
            &self.gate,
            &self.busy,
            self.notifier.as_ref(),
        )
    }

    fn persist(&self) {
        self.store.save(&self.state);
    }

    /// Last rendered view without touching the OS.
    fn current(&self) -> Refresh {
        let view = self.last_view.clone().unwrap_or_else(|| TrayView {
            icon: None,
            tooltip: tray_tooltip(None, self.state.language),
        });
        Refresh {
            view,
            menu: None,
            effect: None,
        }
    }

    /// Write a per-scheme setting through the gate, re-applying the scheme
    /// when it is the active one so the change takes effect immediately.
    #[instrument(skip(self), fields(scheme_id = %scheme))]
    fn write_setting(
        &self,
        scheme: &SchemeId,
        setting: PowerSetting,
        source: PowerSource,
        value: u32,
    ) {
        if !self.gate.is_open() {
            info!("Write gate closed, skipping setting write");
            return;
        }

        if !self.repository.write_setting(scheme, setting, source, value) {
            warn!(setting = setting.key(), source = source.key(), value, "Setting write failed");
            return;
        }

        info!(setting = setting.key(), source = source.key(), value, "Setting written");

        if self.repository.active_scheme_id().as_ref() == Some(scheme) {
            let activation = self.engine().activate(scheme);
            debug!(?activation, "Re-applied active scheme after edit");
        }
    }

    fn view_for(&self, state: &ActiveState, intended: Option<&SchemeId>) -> TrayView {
        // A skipped or deferred activation still shows the intended target.
        let shown = state.active_id.as_ref().or(intended);
        let icon = derive(
            shown,
            &self.state.slots,
            self.state.icon_preference,
            self.theme.system_is_light(),
        );
        let tooltip = tray_tooltip(shown.map(|id| state.display_name(id)), self.state.language);
        TrayView { icon, tooltip }
    }

    fn build_menu(&self, state: &ActiveState) -> MenuModel {
        let read_setting = |scheme: &SchemeId, setting: PowerSetting, source: PowerSource| {
            self.repository
                .read_setting(scheme, setting, source)
                .unwrap_or(0)
        };
        MenuContext {
            state,
            slots: &self.state.slots,
            preference: self.state.icon_preference,
            language: self.state.language,
            read_setting: &read_setting,
        }
        .build()
    }

    fn render(&mut self, intended: Option<SchemeId>, effect: Option<Effect>) -> Refresh {
        let state = self.resolver().resolve();
        let view = self.view_for(&state, intended.as_ref());
        let menu = self.build_menu(&state);

        self.last_state = Some(state);
        self.last_view = Some(view.clone());

        Refresh {
            view,
            menu: Some(menu),
            effect,
        }
    }
}
