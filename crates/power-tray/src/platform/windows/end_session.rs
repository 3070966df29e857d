//! Hidden top-level window that hears the session ending.
//!
//! Windows broadcasts `WM_QUERYENDSESSION` and `WM_ENDSESSION` only to
//! top-level windows, so the watcher owns one on its own thread.

use super::wide;

use power_tray_core::ShutdownGuard;

use std::{mem, ptr, sync::OnceLock, thread};

use tracing::{debug, warn};
use windows_sys::Win32::{
    Foundation::{HWND, LPARAM, LRESULT, WPARAM},
    System::LibraryLoader::GetModuleHandleW,
    UI::WindowsAndMessaging::{
        CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW, MSG, RegisterClassW,
        TranslateMessage, WM_ENDSESSION, WM_QUERYENDSESSION, WNDCLASSW,
    },
};

const WATCHER_CLASS: &str = "PowerTrayEndSessionWatcher";

static GUARD: OnceLock<ShutdownGuard> = OnceLock::new();

/// Start the watcher thread. Only the first call has any effect.
pub(crate) fn spawn_end_session_watcher(guard: ShutdownGuard) {
    if GUARD.set(guard).is_err() {
        debug!("End-session watcher already running");
        return;
    }

    let spawned = thread::Builder::new()
        .name("end-session-watcher".to_string())
        .spawn(run_watcher);
    if let Err(e) = spawned {
        warn!(error = ?e, "Failed to start end-session watcher");
    }
}

fn latch(source: &str) {
    if let Some(guard) = GUARD.get() {
        guard.begin(source);
    }
}

fn run_watcher() {
    let class = wide(WATCHER_CLASS);

    // SAFETY: `class` outlives the window; the message loop runs on the
    // thread that created the window.
    unsafe {
        let instance = GetModuleHandleW(ptr::null());
        let window_class = WNDCLASSW {
            lpfnWndProc: Some(watcher_proc),
            hInstance: instance,
            lpszClassName: class.as_ptr(),
            ..mem::zeroed()
        };
        if RegisterClassW(&window_class) == 0 {
            warn!("Failed to register end-session watcher class");
            return;
        }

        let hwnd = CreateWindowExW(
            0,
            class.as_ptr(),
            class.as_ptr(),
            0,
            0,
            0,
            0,
            0,
            ptr::null_mut(),
            ptr::null_mut(),
            instance,
            ptr::null(),
        );
        if hwnd.is_null() {
            warn!("Failed to create end-session watcher window");
            return;
        }
        debug!("End-session watcher started");

        let mut msg: MSG = mem::zeroed();
        while GetMessageW(&mut msg, ptr::null_mut(), 0, 0) > 0 {
            TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

unsafe extern "system" fn watcher_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_QUERYENDSESSION => {
            latch("query-end-session");
            // Never block the session from ending.
            1
        }
        WM_ENDSESSION => {
            if wparam != 0 {
                latch("end-session");
            }
            0
        }
        // SAFETY: forwarding the arguments we were given.
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
