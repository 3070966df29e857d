//! OS integration behind the core's traits.
//!
//! Windows talks to the power-configuration API, the registry and the
//! window manager. Other targets compile with stand-ins that report no
//! schemes so the tray still runs and degrades to "no data".

#[cfg(not(windows))]
mod fallback;
#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
pub(crate) use fallback::{
    OsSession, PowerRepository, SystemTheme, TimeoutDialog, detect_language,
    open_power_options, show_message_box, spawn_end_session_watcher,
};
#[cfg(windows)]
pub(crate) use windows::{
    OsSession, PowerRepository, SystemTheme, TimeoutDialog, detect_language,
    open_power_options, show_message_box, spawn_end_session_watcher,
};
