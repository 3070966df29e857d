//! Diagnostic logging to stderr and a plain log file.

use crate::{AppError, AppResult};

use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Log file name inside the temp directory.
pub(crate) const LOG_FILE_NAME: &str = "power-tray.log";

const DEFAULT_FILTER: &str = "power_tray=info,power_tray_core=info";
const DEBUG_FILTER: &str = "power_tray=debug,power_tray_core=debug";

/// Where the diagnostic log is written.
pub(crate) fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Filter directives for the given verbosity. `RUST_LOG` wins when set.
pub(crate) fn filter_directives(debug: bool) -> &'static str {
    if debug { DEBUG_FILTER } else { DEFAULT_FILTER }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must live until
/// the process exits.
#[track_caller]
pub(crate) fn init(debug: bool) -> AppResult<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(debug)));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("power-tray")
        .filename_suffix("log")
        .build(std::env::temp_dir())
        .map_err(|e| AppError::RuntimeError {
            reason: format!("Failed to open log file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| AppError::RuntimeError {
            reason: format!("Failed to install tracing subscriber: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(guard)
}
