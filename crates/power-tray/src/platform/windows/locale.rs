use power_tray_core::Language;

use windows_sys::Win32::Globalization::GetUserDefaultUILanguage;

const PRIMARY_LANGUAGE_MASK: u16 = 0x3ff;
const LANG_SPANISH: u16 = 0x0a;

/// UI language of the signed-in user.
pub(crate) fn detect_language() -> Language {
    // SAFETY: no pointers involved.
    let lang_id = unsafe { GetUserDefaultUILanguage() };
    if lang_id & PRIMARY_LANGUAGE_MASK == LANG_SPANISH {
        Language::Spanish
    } else {
        Language::English
    }
}
