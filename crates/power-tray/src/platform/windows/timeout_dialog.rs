//! Small modal input window for custom timeouts.
//!
//! Built from plain child controls on a top-level window, so no dialog
//! resource is needed. Each `ask` runs its own message loop on the calling
//! thread until OK, Cancel or close.

use super::wide;

use power_tray_core::{Language, TimeoutPrompt};

use std::{cell::RefCell, mem, ptr, sync::OnceLock};

use tracing::{debug, warn};
use windows_sys::Win32::{
    Foundation::{HWND, LPARAM, LRESULT, WPARAM},
    Graphics::Gdi::{COLOR_BTNFACE, DEFAULT_GUI_FONT, GetStockObject},
    System::LibraryLoader::GetModuleHandleW,
    UI::WindowsAndMessaging::{
        BS_DEFPUSHBUTTON, BS_PUSHBUTTON, CreateWindowExW, DefWindowProcW,
        DestroyWindow, DispatchMessageW, EM_SETSEL, ES_AUTOHSCROLL, GetMessageW,
        GetSystemMetrics, GetWindowTextLengthW, GetWindowTextW, IDCANCEL, IDOK,
        IsDialogMessageW, MB_ICONWARNING, MB_OK, MB_TOPMOST, MSG, MessageBoxW, PostQuitMessage,
        RegisterClassW, SM_CXSCREEN, SM_CYSCREEN, SendMessageW, SetFocus, SetForegroundWindow,
        TranslateMessage, WM_COMMAND, WM_DESTROY, WM_SETFONT, WNDCLASSW, WS_BORDER, WS_CAPTION,
        WS_CHILD, WS_EX_DLGMODALFRAME, WS_EX_TOPMOST, WS_SYSMENU, WS_TABSTOP, WS_VISIBLE,
    },
};

const DIALOG_CLASS: &str = "PowerTrayTimeoutDialog";
const WIDTH: i32 = 340;
const HEIGHT: i32 = 170;

static CLASS_REGISTERED: OnceLock<bool> = OnceLock::new();

#[derive(Default)]
struct DialogState {
    edit: Option<HWND>,
    answer: Option<String>,
}

thread_local! {
    static STATE: RefCell<DialogState> = RefCell::new(DialogState::default());
}

/// Custom timeout entry shown as a topmost window.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TimeoutDialog {
    language: Language,
}

impl TimeoutDialog {
    pub(crate) fn new(language: Language) -> Self {
        Self { language }
    }
}

impl TimeoutPrompt for TimeoutDialog {
    fn ask(&mut self, initial: &str, error: Option<&str>) -> Option<String> {
        let lang = self.language;
        if let Some(reason) = error {
            let text = wide(reason);
            let caption = wide(lang.pick("Invalid value", "Valor inválido"));
            // SAFETY: both strings are NUL-terminated and outlive the call.
            unsafe {
                MessageBoxW(
                    ptr::null_mut(),
                    text.as_ptr(),
                    caption.as_ptr(),
                    MB_OK | MB_ICONWARNING | MB_TOPMOST,
                );
            }
        }

        if !*CLASS_REGISTERED.get_or_init(register_class) {
            return None;
        }

        STATE.with_borrow_mut(|state| *state = DialogState::default());
        let title = wide(lang.pick("Custom timeout", "Tiempo personalizado"));
        let prompt = wide(lang.pick(
            "Enter minutes (0 = Never):",
            "Ingresa minutos (0 = Nunca):",
        ));
        let cancel = wide(lang.pick("Cancel", "Cancelar"));

        // SAFETY: every string outlives the window; the loop runs on the
        // thread that created the window.
        unsafe {
            let instance = GetModuleHandleW(ptr::null());
            let class = wide(DIALOG_CLASS);
            let x = (GetSystemMetrics(SM_CXSCREEN) - WIDTH) / 2;
            let y = (GetSystemMetrics(SM_CYSCREEN) - HEIGHT) / 2;

            let hwnd = CreateWindowExW(
                WS_EX_TOPMOST | WS_EX_DLGMODALFRAME,
                class.as_ptr(),
                title.as_ptr(),
                WS_CAPTION | WS_SYSMENU | WS_VISIBLE,
                x,
                y,
                WIDTH,
                HEIGHT,
                ptr::null_mut(),
                ptr::null_mut(),
                instance,
                ptr::null(),
            );
            if hwnd.is_null() {
                warn!("Failed to create custom timeout window");
                return None;
            }

            let font = GetStockObject(DEFAULT_GUI_FONT);
            let child = |class: &str,
                         text: &[u16],
                         style: u32,
                         rect: (i32, i32, i32, i32),
                         id: i32| {
                let class = wide(class);
                let control = CreateWindowExW(
                    0,
                    class.as_ptr(),
                    text.as_ptr(),
                    WS_CHILD | WS_VISIBLE | style,
                    rect.0,
                    rect.1,
                    rect.2,
                    rect.3,
                    hwnd,
                    id as usize as _,
                    instance,
                    ptr::null(),
                );
                SendMessageW(control, WM_SETFONT, font as WPARAM, 1);
                control
            };

            child("STATIC", &prompt, 0, (12, 12, 300, 20), 0);
            let initial = wide(initial);
            let edit = child(
                "EDIT",
                &initial,
                WS_TABSTOP | WS_BORDER | ES_AUTOHSCROLL as u32,
                (12, 38, 120, 22),
                100,
            );
            child(
                "BUTTON",
                &wide("OK"),
                WS_TABSTOP | BS_DEFPUSHBUTTON as u32,
                (140, 90, 80, 26),
                IDOK,
            );
            child(
                "BUTTON",
                &cancel,
                WS_TABSTOP | BS_PUSHBUTTON as u32,
                (228, 90, 80, 26),
                IDCANCEL,
            );

            STATE.with_borrow_mut(|state| state.edit = Some(edit));
            SetForegroundWindow(hwnd);
            SetFocus(edit);
            SendMessageW(edit, EM_SETSEL, 0, -1);

            let mut msg: MSG = mem::zeroed();
            while GetMessageW(&mut msg, ptr::null_mut(), 0, 0) > 0 {
                if IsDialogMessageW(hwnd, &msg) == 0 {
                    TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                }
            }
        }

        let answer = STATE.with_borrow_mut(|state| state.answer.take());
        debug!(accepted = answer.is_some(), "Custom timeout dialog closed");
        answer
    }
}

fn register_class() -> bool {
    let class = wide(DIALOG_CLASS);

    // SAFETY: the class name is copied by the system during registration.
    unsafe {
        let window_class = WNDCLASSW {
            lpfnWndProc: Some(dialog_proc),
            hInstance: GetModuleHandleW(ptr::null()),
            lpszClassName: class.as_ptr(),
            hbrBackground: (COLOR_BTNFACE as usize + 1) as _,
            ..mem::zeroed()
        };
        if RegisterClassW(&window_class) == 0 {
            warn!("Failed to register custom timeout window class");
            return false;
        }
    }
    true
}

fn edit_text(edit: HWND) -> String {
    // SAFETY: the buffer is sized from the control's own length plus NUL.
    unsafe {
        let len = GetWindowTextLengthW(edit).max(0) as usize;
        let mut buffer = vec![0u16; len + 1];
        let copied = GetWindowTextW(edit, buffer.as_mut_ptr(), buffer.len() as i32).max(0);
        String::from_utf16_lossy(&buffer[..copied as usize])
    }
}

unsafe extern "system" fn dialog_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_COMMAND => {
            let id = (wparam & 0xffff) as i32;
            if id == IDOK {
                let text = STATE
                    .with_borrow(|state| state.edit)
                    .map(edit_text)
                    .unwrap_or_default();
                STATE.with_borrow_mut(|state| state.answer = Some(text));
            }
            if id == IDOK || id == IDCANCEL {
                // SAFETY: `hwnd` is the window this procedure serves.
                unsafe { DestroyWindow(hwnd) };
            }
            0
        }
        WM_DESTROY => {
            // SAFETY: ends the message loop running on this thread.
            unsafe { PostQuitMessage(0) };
            0
        }
        // SAFETY: forwarding the arguments we were given.
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
