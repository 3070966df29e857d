use error_location::ErrorLocation;
use thiserror::Error;

/// Core errors with source location tracking.
///
/// OS-side failures never surface here: the scheme repository degrades them
/// to "no data" before they reach the core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Custom timeout entry was empty or not a non-negative whole number.
    #[error("Invalid timeout entry {input:?}: {reason} {location}")]
    InvalidTimeout {
        /// The raw text the user entered.
        input: String,
        /// Human-readable reason for rejection.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A menu item id did not map to any known command.
    #[error("Unknown command id: {id:?} {location}")]
    UnknownCommand {
        /// The unrecognised id.
        id: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
