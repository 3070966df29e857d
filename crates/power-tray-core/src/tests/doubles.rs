use crate::{
    Notice, Notifier, PersistedState, PowerSetting, PowerSource, Scheme, SchemeId,
    SchemeRepository, SessionProbe, SettingsStore, ThemeProbe,
};

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

pub(crate) const SCHEME_1: &str = "381b4222-f694-41f0-9685-ff5bb260df2e";
pub(crate) const SCHEME_2: &str = "8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c";
pub(crate) const SCHEME_3: &str = "a1841308-3541-4fab-bc81-f71556f20b4a";

#[allow(clippy::unwrap_used)]
pub(crate) fn id(raw: &str) -> SchemeId {
    SchemeId::new(raw).unwrap()
}

#[derive(Default)]
struct RepositoryState {
    schemes: Vec<Scheme>,
    active: Option<SchemeId>,
    settings: HashMap<(SchemeId, PowerSetting, PowerSource), u32>,
    activations: Vec<SchemeId>,
    writes: Vec<(SchemeId, PowerSetting, PowerSource, u32)>,
    list_calls: usize,
    fail_activation: bool,
    lag_activation: bool,
}

/// In-memory power store that records every call.
#[derive(Default)]
pub(crate) struct FakeRepository {
    state: Mutex<RepositoryState>,
}

#[allow(clippy::unwrap_used)]
impl FakeRepository {
    pub(crate) fn with_schemes(schemes: &[(&str, &str)]) -> Arc<Self> {
        let repo = Self::default();
        repo.state.lock().unwrap().schemes = schemes
            .iter()
            .map(|(raw, name)| Scheme::new(id(raw), *name))
            .collect();
        Arc::new(repo)
    }

    pub(crate) fn set_active(&self, active: Option<&str>) {
        self.state.lock().unwrap().active = active.map(id);
    }

    pub(crate) fn set_setting(&self, scheme: &str, setting: PowerSetting, source: PowerSource, value: u32) {
        self.state
            .lock()
            .unwrap()
            .settings
            .insert((id(scheme), setting, source), value);
    }

    pub(crate) fn fail_activation(&self) {
        self.state.lock().unwrap().fail_activation = true;
    }

    /// Accept activations without changing the reported active scheme.
    pub(crate) fn lag_activation(&self) {
        self.state.lock().unwrap().lag_activation = true;
    }

    pub(crate) fn activations(&self) -> Vec<SchemeId> {
        self.state.lock().unwrap().activations.clone()
    }

    pub(crate) fn writes(&self) -> Vec<(SchemeId, PowerSetting, PowerSource, u32)> {
        self.state.lock().unwrap().writes.clone()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }
}

#[allow(clippy::unwrap_used)]
impl SchemeRepository for FakeRepository {
    fn list_schemes(&self) -> Vec<Scheme> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        state.schemes.clone()
    }

    fn active_scheme_id(&self) -> Option<SchemeId> {
        self.state.lock().unwrap().active.clone()
    }

    fn activate_scheme(&self, scheme: &SchemeId) -> bool {
        let mut state = self.state.lock().unwrap();
        state.activations.push(scheme.clone());
        if state.fail_activation {
            return false;
        }
        if !state.lag_activation {
            state.active = Some(scheme.clone());
        }
        true
    }

    fn read_setting(
        &self,
        scheme: &SchemeId,
        setting: PowerSetting,
        source: PowerSource,
    ) -> Option<u32> {
        self.state
            .lock()
            .unwrap()
            .settings
            .get(&(scheme.clone(), setting, source))
            .copied()
    }

    fn write_setting(
        &self,
        scheme: &SchemeId,
        setting: PowerSetting,
        source: PowerSource,
        value: u32,
    ) -> bool {
        let mut state = self.state.lock().unwrap();
        state.writes.push((scheme.clone(), setting, source, value));
        state.settings.insert((scheme.clone(), setting, source), value);
        true
    }
}

/// Session probe with fixed answers.
#[derive(Default)]
pub(crate) struct FakeSession {
    pub(crate) shutdown_started: bool,
    pub(crate) remote: bool,
}

impl SessionProbe for FakeSession {
    fn shutdown_started(&self) -> bool {
        self.shutdown_started
    }

    fn is_remote_session(&self) -> bool {
        self.remote
    }
}

/// Notifier that keeps every notice.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

#[allow(clippy::unwrap_used)]
impl RecordingNotifier {
    pub(crate) fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

#[allow(clippy::unwrap_used)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Store that keeps every saved state.
#[derive(Default)]
pub(crate) struct RecordingStore {
    saves: Mutex<Vec<PersistedState>>,
}

#[allow(clippy::unwrap_used)]
impl RecordingStore {
    pub(crate) fn saves(&self) -> Vec<PersistedState> {
        self.saves.lock().unwrap().clone()
    }
}

#[allow(clippy::unwrap_used)]
impl SettingsStore for RecordingStore {
    fn save(&self, state: &PersistedState) {
        self.saves.lock().unwrap().push(state.clone());
    }
}

/// Theme signal that tests can flip.
pub(crate) struct FakeTheme {
    light: AtomicBool,
}

impl FakeTheme {
    pub(crate) fn new(light: bool) -> Arc<Self> {
        Arc::new(Self {
            light: AtomicBool::new(light),
        })
    }

    pub(crate) fn set_light(&self, light: bool) {
        self.light.store(light, Ordering::SeqCst);
    }
}

impl ThemeProbe for FakeTheme {
    fn system_is_light(&self) -> bool {
        self.light.load(Ordering::SeqCst)
    }
}
