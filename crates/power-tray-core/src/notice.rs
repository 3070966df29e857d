//! User-facing notices raised by the core.

use crate::Language;

use std::sync::Arc;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational, e.g. nothing to cycle through.
    Info,
    /// An unexpected failure that was logged.
    Error,
}

/// A message for the user, already localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Window or toast title.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Notice {
    /// Cycling was requested with no slot assigned.
    pub fn no_slots_assigned(language: Language) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: language.app_title().to_string(),
            message: language
                .pick(
                    "Assign at least one slot in the tray menu first.",
                    "Asigna al menos una ranura en el menú de la bandeja primero.",
                )
                .to_string(),
        }
    }

    /// An unexpected failure, pointing the user at the diagnostic log.
    pub fn failure(detail: impl Into<String>, log_path: Option<&str>) -> Self {
        let detail = detail.into();
        let message = match log_path {
            Some(path) => format!("{}\n\nLog: {}", detail, path),
            None => detail,
        };
        Self {
            kind: NoticeKind::Error,
            title: "Power Tray error".to_string(),
            message,
        }
    }
}

/// Surfaces notices to the user.
pub trait Notifier {
    /// Show `notice`. Must not fail.
    fn notify(&self, notice: Notice);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}
