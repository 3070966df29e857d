mod end_session;
mod locale;
mod message_box;
mod power;
mod session;
mod theme;
mod timeout_dialog;

pub(crate) use {
    end_session::spawn_end_session_watcher, locale::detect_language,
    message_box::show_message_box, power::PowerRepository, session::OsSession,
    theme::SystemTheme, timeout_dialog::TimeoutDialog,
};

use std::io;

use tracing::info;

/// Launch the classic Power Options control panel.
pub(crate) fn open_power_options() -> io::Result<()> {
    open::with("powercfg.cpl", "control.exe")?;
    info!("Opened Power Options");
    Ok(())
}

/// NUL-terminated UTF-16 for Win32 string parameters.
fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}
