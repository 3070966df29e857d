use super::wide;

use power_tray_core::{Notice, NoticeKind};

use std::ptr;

use windows_sys::Win32::UI::WindowsAndMessaging::{
    MB_ICONERROR, MB_ICONINFORMATION, MB_OK, MB_SETFOREGROUND, MB_TOPMOST, MessageBoxW,
};

/// Show `notice` in a modal message box. Blocks until dismissed.
pub(crate) fn show_message_box(notice: &Notice) {
    let text = wide(&notice.message);
    let caption = wide(&notice.title);
    let icon = match notice.kind {
        NoticeKind::Info => MB_ICONINFORMATION,
        NoticeKind::Error => MB_ICONERROR,
    };

    // SAFETY: both strings are NUL-terminated and outlive the call.
    unsafe {
        MessageBoxW(
            ptr::null_mut(),
            text.as_ptr(),
            caption.as_ptr(),
            MB_OK | icon | MB_TOPMOST | MB_SETFOREGROUND,
        );
    }
}
