//! Power Tray: switch Windows power plans from the notification area.

mod app;
mod app_command;
mod config;
mod error;
mod failure;
mod icons;
mod logging;
mod notifier;
mod platform;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_manager;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    failure::FailureNotices,
    notifier::TrayNotifier,
    tray_command::TrayCommand,
    tray_manager::TrayManager,
};

use crate::config::{Config, ConfigStore};

use power_tray_core::{Controller, ControllerParts, ShutdownGuard, WriteGate};

use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Application entry point.
fn main() {
    let debug_mode = std::env::args()
        .skip(1)
        .any(|arg| arg.eq_ignore_ascii_case("--debug") || arg.eq_ignore_ascii_case("/debug"));

    // Flushes the log file on drop, so it lives as long as main.
    let _log_guard = match logging::init(debug_mode) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging unavailable: {}", e);
            None
        }
    };
    install_panic_hook();

    info!(debug = debug_mode, log_path = ?logging::log_path(), "Power Tray launching");

    let config_path = match Config::config_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!(error = %e, "Config location unavailable, changes will not persist");
            None
        }
    };
    let state = Config::load().to_state(platform::detect_language());

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(state.language) {
        Ok(tm) => tm,
        Err(e) => fail_startup(&e),
    };

    let guard = ShutdownGuard::new();
    platform::spawn_end_session_watcher(guard.clone());

    let controller = Controller::new(ControllerParts {
        repository: Box::new(platform::PowerRepository),
        gate: WriteGate::new(guard.clone(), Box::new(platform::OsSession)),
        theme: Box::new(platform::SystemTheme),
        store: Box::new(ConfigStore::new(config_path)),
        notifier: Box::new(TrayNotifier),
        state,
    });

    let (command_tx, command_rx) = mpsc::channel(32);
    // Taken once, when the loop starts.
    let mut startup = Some((controller, command_rx));

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                TrayCommand::Render { view, menu } => {
                    if let Err(e) = tray_manager.render(&view, menu.as_ref()) {
                        error!(error = ?e, "Failed to update tray icon");
                    }
                }
                TrayCommand::Shutdown => {
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::NewEvents(StartCause::Init) => {
                let Some((controller, command_rx)) = startup.take() else {
                    return;
                };

                let app = App {
                    controller,
                    tray_proxy: tray_proxy.clone(),
                    command_tx: command_tx.clone(),
                    command_rx,
                    log_path: logging::log_path(),
                };

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Builder::new_current_thread()
                        .enable_all()
                        .build()
                    {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });

                    // Blocking forwarders may still be parked on their receivers.
                    rt.shutdown_timeout(std::time::Duration::from_secs(1));
                });
            }
            Event::LoopDestroyed => {
                guard.begin("loop-destroyed");
                if command_tx
                    .try_send(AppCommand::Shutdown {
                        source: "loop-destroyed",
                    })
                    .is_err()
                {
                    info!("Application loop already stopped");
                }
            }
            _ => {}
        }
    });
}

/// Log, tell the user, and exit with code 1.
fn fail_startup(e: &AppError) -> ! {
    error!(error = ?e, "Startup failed");
    FailureNotices::system().report(format_args!("Power Tray could not start.\n\n{}", e));
    std::process::exit(1);
}

/// Route every panic to the log and a blocking error notice.
fn install_panic_hook() {
    let notices = FailureNotices::system();
    std::panic::set_hook(Box::new(move |info| {
        error!(panic = %info, "Unhandled panic");
        notices.report(info);
    }));
}
