use power_tray_core::Command;

use uuid::Uuid;

/// Requests delivered to the application loop from outside it.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// A tray menu item was clicked.
    MenuClicked {
        /// Menu item id, encoding a core command.
        id: String,
        /// Correlates the log lines of one request.
        request_id: Uuid,
    },
    /// The tray icon was left-clicked.
    IconClicked {
        /// Correlates the log lines of one request.
        request_id: Uuid,
    },
    /// A core command produced off the loop, such as an accepted custom
    /// timeout.
    Run {
        /// Command to dispatch.
        command: Command,
        /// Correlates the log lines of one request.
        request_id: Uuid,
    },
    /// Request application shutdown.
    Shutdown {
        /// What triggered the shutdown, for the log.
        source: &'static str,
    },
}
