use power_tray_core::{MenuModel, TrayView};

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations and process lifecycle events flow through this enum.
#[derive(Debug, Clone)]
pub enum TrayCommand {
    /// Redraw the icon and tooltip, and replace the menu when one is given.
    Render {
        /// Icon and tooltip to show.
        view: TrayView,
        /// Rebuilt menu, if its contents changed.
        menu: Option<MenuModel>,
    },
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}
