use super::wide;

use power_tray_core::ThemeProbe;

use std::{mem, ptr};

use windows_sys::Win32::{
    Foundation::ERROR_SUCCESS,
    System::Registry::{HKEY_CURRENT_USER, RRF_RT_REG_DWORD, RegGetValueW},
};

const PERSONALIZE_KEY: &str = "Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize";
const LIGHT_THEME_VALUE: &str = "AppsUseLightTheme";

/// Reads the per-user app theme from the registry on every call.
#[derive(Debug, Default)]
pub(crate) struct SystemTheme;

impl ThemeProbe for SystemTheme {
    fn system_is_light(&self) -> bool {
        let key = wide(PERSONALIZE_KEY);
        let value_name = wide(LIGHT_THEME_VALUE);
        let mut data = 1u32;
        let mut size = mem::size_of::<u32>() as u32;

        // SAFETY: `data` is a DWORD-sized buffer and `size` matches it.
        let status = unsafe {
            RegGetValueW(
                HKEY_CURRENT_USER,
                key.as_ptr(),
                value_name.as_ptr(),
                RRF_RT_REG_DWORD,
                ptr::null_mut(),
                (&mut data as *mut u32).cast(),
                &mut size,
            )
        };

        // A missing value means the light default.
        status != ERROR_SUCCESS || data != 0
    }
}
