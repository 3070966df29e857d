//! One blocking notice per failure.
//!
//! A panic inside a command handler reaches both the panic hook and the
//! `catch_unwind` in the dispatcher. The hook shows the notice and marks the
//! thread; the dispatcher then only shows its own notice when the hook did
//! not run, and clears the mark for the next command.

use crate::{logging, platform};

use power_tray_core::Notice;

use std::{cell::Cell, fmt::Display, path::PathBuf};

use tracing::debug;

thread_local! {
    static REPORTED: Cell<bool> = const { Cell::new(false) };
}

/// Shows failure notices through `show`, naming the diagnostic log.
#[derive(Debug, Clone)]
pub(crate) struct FailureNotices {
    show: fn(&Notice),
    log_path: PathBuf,
}

impl FailureNotices {
    pub(crate) fn new(show: fn(&Notice), log_path: PathBuf) -> Self {
        Self { show, log_path }
    }

    /// Message boxes naming the real log file.
    pub(crate) fn system() -> Self {
        Self::new(platform::show_message_box, logging::log_path())
    }

    /// Show a notice for this failure and mark the current thread.
    pub(crate) fn report(&self, detail: impl Display) {
        REPORTED.set(true);
        self.show_notice(detail);
    }

    /// Close out a failure caught on this thread. Shows a notice only when
    /// [`FailureNotices::report`] has not already done so, then clears the
    /// mark.
    pub(crate) fn settle(&self, detail: impl Display) {
        if REPORTED.replace(false) {
            debug!("Failure already reported by the panic hook");
            return;
        }
        self.show_notice(detail);
    }

    fn show_notice(&self, detail: impl Display) {
        let log_path = self.log_path.display().to_string();
        (self.show)(&Notice::failure(detail.to_string(), Some(&log_path)));
    }
}
