use power_tray_core::SessionProbe;

use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SM_REMOTESESSION, SM_SHUTTINGDOWN,
};

/// Session state read from system metrics.
#[derive(Debug, Default)]
pub(crate) struct OsSession;

impl SessionProbe for OsSession {
    fn shutdown_started(&self) -> bool {
        // SAFETY: no pointers involved.
        unsafe { GetSystemMetrics(SM_SHUTTINGDOWN) != 0 }
    }

    fn is_remote_session(&self) -> bool {
        // SAFETY: no pointers involved.
        unsafe { GetSystemMetrics(SM_REMOTESESSION) != 0 }
    }
}
