use crate::{
    AppCommand, AppResult, FailureNotices, TrayCommand, TrayNotifier,
    config::{POLL_INTERVAL, STARTUP_ATTEMPTS, STARTUP_RETRY_DELAY},
    platform,
};

use power_tray_core::{
    Command, Controller, Effect, Language, Notice, Notifier, PowerSetting, PowerSource, Refresh,
    SchemeId, prompt_custom_timeout,
};

use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    path::PathBuf,
    str::FromStr,
    thread,
    time::Duration,
};

use tao::event_loop::EventLoopProxy;
use tokio::{
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, error, info, instrument, warn};
use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent, menu::MenuEvent};
use uuid::Uuid;

/// Main application state.
///
/// Runs on the async runtime thread and is the only place commands are
/// handled, one at a time. Tray updates go back to the main thread through
/// `tray_proxy` because `TrayIcon` is `!Send` and must remain on the UI
/// thread.
pub struct App {
    pub(crate) controller: Controller,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) log_path: PathBuf,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Power Tray starting");

        // Tray event forwarding via persistent blocking tasks.
        //
        // The menu and icon receivers are crossbeam channels with a blocking
        // recv(). A forwarder stops once its send fails, which happens after
        // command_rx is dropped when the loop ends.
        let menu_tx = self.command_tx.clone();
        let menu_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                let command = AppCommand::MenuClicked {
                    id: event.id.0,
                    request_id: Uuid::new_v4(),
                };
                if menu_tx.blocking_send(command).is_err() {
                    break;
                }
            }
        });

        let icon_tx = self.command_tx.clone();
        let icon_handle = tokio::task::spawn_blocking(move || {
            let receiver = TrayIconEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if !is_left_click(&event) {
                    continue;
                }
                let command = AppCommand::IconClicked {
                    request_id: Uuid::new_v4(),
                };
                if icon_tx.blocking_send(command).is_err() {
                    break;
                }
            }
        });

        self.startup_refresh().await;

        let mut poll = time::interval(POLL_INTERVAL);
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    let keep_running = match cmd {
                        AppCommand::MenuClicked { id, request_id } => {
                            match parse_menu_id(&id) {
                                Ok(command) => self.dispatch(command, request_id),
                                Err(e) => {
                                    debug!(request_id = %request_id, error = %e, "Ignoring menu item");
                                    true
                                }
                            }
                        }
                        AppCommand::IconClicked { request_id } => {
                            self.dispatch(Command::Cycle, request_id)
                        }
                        AppCommand::Run { command, request_id } => {
                            self.dispatch(command, request_id)
                        }
                        AppCommand::Shutdown { source } => {
                            self.controller.guard().begin(source);
                            info!(source, "Shutdown requested");
                            false
                        }
                    };
                    if !keep_running {
                        break;
                    }
                }

                _ = poll.tick(), if !self.controller.guard().is_set() => {
                    if let Some(refresh) = self.controller.poll() {
                        self.render(refresh);
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        drop(self.command_rx);

        for (name, handle) in [("menu", menu_handle), ("icon", icon_handle)] {
            match time::timeout(Duration::from_secs(1), handle).await {
                Ok(Ok(())) => info!(forwarder = name, "Tray event forwarder stopped cleanly"),
                Ok(Err(e)) => error!(forwarder = name, error = ?e, "Tray event forwarder task panicked"),
                Err(_) => info!(
                    forwarder = name,
                    "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
                ),
            }
        }

        info!("Power Tray shut down successfully");

        Ok(())
    }

    /// Render the initial view, retrying while the OS reports no active
    /// scheme yet.
    async fn startup_refresh(&mut self) {
        for attempt in 1..=STARTUP_ATTEMPTS {
            let refresh = self.controller.refresh();
            self.render(refresh);

            if self.controller.last_active_id().is_some() {
                debug!(attempt, "Active scheme found at startup");
                return;
            }
            if attempt < STARTUP_ATTEMPTS {
                debug!(attempt, "No active scheme yet, retrying");
                time::sleep(STARTUP_RETRY_DELAY).await;
            }
        }
        warn!("No active scheme found at startup");
    }

    /// Handle one command. Returns `false` when the loop should stop.
    #[instrument(skip(self), fields(request_id = %request_id))]
    fn dispatch(&mut self, command: Command, request_id: Uuid) -> bool {
        let controller = &mut self.controller;
        let mut refresh = match catch_unwind(AssertUnwindSafe(|| controller.handle(command))) {
            Ok(refresh) => refresh,
            Err(_) => {
                error!("Command handler failed, continuing");
                FailureNotices::system().settle("A tray command failed unexpectedly.");
                return true;
            }
        };

        let effect = refresh.effect.take();
        self.render(refresh);

        match effect {
            Some(Effect::OpenPowerOptions) => {
                if let Err(e) = platform::open_power_options() {
                    warn!(error = %e, "Failed to open Power Options");
                    TrayNotifier.notify(Notice::failure(
                        format!("Could not open Power Options: {}", e),
                        Some(&self.log_path.display().to_string()),
                    ));
                }
                true
            }
            Some(Effect::PromptTimeout {
                scheme,
                setting,
                source,
                current_seconds,
            }) => {
                self.spawn_timeout_prompt(
                    TimeoutRequest {
                        scheme,
                        setting,
                        source,
                        current_seconds,
                    },
                    request_id,
                );
                true
            }
            Some(Effect::Exit) => {
                info!("Exit requested from tray menu");
                if self.tray_proxy.send_event(TrayCommand::Shutdown).is_err() {
                    debug!("Event loop already closed");
                }
                false
            }
            None => true,
        }
    }

    /// Show the custom timeout dialog off the loop and feed an accepted
    /// value back as [`Command::SetTimeout`].
    fn spawn_timeout_prompt(&self, request: TimeoutRequest, request_id: Uuid) {
        let language = self.controller.state().language;
        let command_tx = self.command_tx.clone();

        let spawned = thread::Builder::new()
            .name("timeout-prompt".to_string())
            .spawn(move || {
                let Some(command) = request.run(language) else {
                    debug!(request_id = %request_id, "Custom timeout not changed");
                    return;
                };
                if command_tx
                    .blocking_send(AppCommand::Run {
                        command,
                        request_id,
                    })
                    .is_err()
                {
                    debug!(
                        request_id = %request_id,
                        "Loop stopped before the timeout was applied"
                    );
                }
            });
        if let Err(e) = spawned {
            warn!(error = ?e, "Failed to start custom timeout prompt");
        }
    }

    fn render(&self, refresh: Refresh) {
        let command = TrayCommand::Render {
            view: refresh.view,
            menu: refresh.menu,
        };
        if self.tray_proxy.send_event(command).is_err() {
            debug!("Event loop closed, dropping tray update");
        }
    }
}

/// Decode a clicked menu item id.
pub(crate) fn parse_menu_id(id: &str) -> AppResult<Command> {
    Ok(Command::from_str(id)?)
}

/// One custom timeout edit waiting for user input.
#[derive(Debug, Clone)]
struct TimeoutRequest {
    scheme: SchemeId,
    setting: PowerSetting,
    source: PowerSource,
    current_seconds: u32,
}

impl TimeoutRequest {
    /// Ask until a valid new value is entered. `None` when cancelled or
    /// unchanged.
    fn run(self, language: Language) -> Option<Command> {
        let mut dialog = platform::TimeoutDialog::new(language);
        let seconds = prompt_custom_timeout(&mut dialog, self.current_seconds, language)?;
        info!(
            setting = self.setting.key(),
            source = self.source.key(),
            seconds,
            "Custom timeout accepted"
        );
        Some(Command::SetTimeout {
            scheme: self.scheme,
            setting: self.setting,
            source: self.source,
            seconds,
        })
    }
}

fn is_left_click(event: &TrayIconEvent) -> bool {
    matches!(
        event,
        TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            ..
        }
    )
}
