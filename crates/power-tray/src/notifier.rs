use crate::platform;

use power_tray_core::{Notice, NoticeKind, Notifier};

use std::{thread, time::Duration};

use tracing::{info, warn};

/// Shows core notices without blocking the event loop.
///
/// Info notices become desktop notifications; errors open a message box on
/// a detached thread.
#[derive(Debug, Default)]
pub struct TrayNotifier;

impl Notifier for TrayNotifier {
    fn notify(&self, notice: Notice) {
        info!(kind = ?notice.kind, title = %notice.title, "Showing notice");

        match notice.kind {
            NoticeKind::Info => {
                let shown = notify_rust::Notification::new()
                    .summary(&notice.title)
                    .body(&notice.message)
                    .timeout(Duration::from_secs(5))
                    .show();
                if let Err(e) = shown {
                    warn!(error = %e, "Desktop notification failed, using message box");
                    spawn_message_box(notice);
                }
            }
            NoticeKind::Error => spawn_message_box(notice),
        }
    }
}

fn spawn_message_box(notice: Notice) {
    let spawned = thread::Builder::new()
        .name("notice".to_string())
        .spawn(move || platform::show_message_box(&notice));
    if let Err(e) = spawned {
        warn!(error = ?e, "Failed to spawn notice thread");
    }
}
