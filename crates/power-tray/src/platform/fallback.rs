//! Stand-ins for targets without the Windows power API.

use power_tray_core::{
    Language, Notice, PowerSetting, PowerSource, Scheme, SchemeId, SchemeRepository,
    SessionProbe, ShutdownGuard, ThemeProbe, TimeoutPrompt,
};

use std::{env, io, time::Duration};

use tracing::{debug, warn};

/// Repository with no schemes; every write fails softly.
#[derive(Debug, Default)]
pub(crate) struct PowerRepository;

impl SchemeRepository for PowerRepository {
    fn list_schemes(&self) -> Vec<Scheme> {
        Vec::new()
    }

    fn active_scheme_id(&self) -> Option<SchemeId> {
        None
    }

    fn activate_scheme(&self, scheme: &SchemeId) -> bool {
        debug!(scheme_id = %scheme, "Power schemes are not supported on this platform");
        false
    }

    fn read_setting(&self, _: &SchemeId, _: PowerSetting, _: PowerSource) -> Option<u32> {
        None
    }

    fn write_setting(&self, _: &SchemeId, _: PowerSetting, _: PowerSource, _: u32) -> bool {
        false
    }
}

/// Never shutting down, never remote.
#[derive(Debug, Default)]
pub(crate) struct OsSession;

impl SessionProbe for OsSession {
    fn shutdown_started(&self) -> bool {
        false
    }

    fn is_remote_session(&self) -> bool {
        false
    }
}

/// Always reports the light default.
#[derive(Debug, Default)]
pub(crate) struct SystemTheme;

impl ThemeProbe for SystemTheme {
    fn system_is_light(&self) -> bool {
        true
    }
}

/// Language from the POSIX locale variables.
pub(crate) fn detect_language() -> Language {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
        .map(|value| Language::from_iso_code(&value))
        .unwrap_or_default()
}

/// Desktop notification in place of a modal box.
pub(crate) fn show_message_box(notice: &Notice) {
    let shown = notify_rust::Notification::new()
        .summary(&notice.title)
        .body(&notice.message)
        .timeout(Duration::from_secs(10))
        .show();
    if let Err(e) = shown {
        warn!(error = %e, "Failed to show notification");
    }
}

/// No input dialog on this platform; every prompt is cancelled.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TimeoutDialog;

impl TimeoutDialog {
    pub(crate) fn new(_language: Language) -> Self {
        Self
    }
}

impl TimeoutPrompt for TimeoutDialog {
    fn ask(&mut self, _initial: &str, _error: Option<&str>) -> Option<String> {
        warn!("Custom timeout entry is only available on Windows");
        None
    }
}

/// Session-end notifications are not watched on this platform.
pub(crate) fn spawn_end_session_watcher(_guard: ShutdownGuard) {
    debug!("End-session watcher not available on this platform");
}

/// There is no Power Options panel here.
pub(crate) fn open_power_options() -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "Power Options is only available on Windows",
    ))
}
