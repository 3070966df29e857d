use crate::{CoreError, CoreResult, Language};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, warn};

/// Preset timeouts offered in the menu, in minutes. 0 means never.
pub const TIMEOUT_PRESET_MINUTES: [u32; 11] = [0, 1, 2, 3, 5, 10, 15, 20, 30, 60, 120];

/// Menu label for a timeout expressed in minutes.
pub fn timeout_label(minutes: u32, language: Language) -> String {
    if minutes == 0 {
        language.pick("Never", "Nunca").to_string()
    } else if minutes < 60 || minutes % 60 != 0 {
        format!("{} min", minutes)
    } else if minutes == 60 {
        format!("1 {}", language.pick("hour", "hora"))
    } else {
        format!("{} {}", minutes / 60, language.pick("hours", "horas"))
    }
}

/// Validate a custom timeout entry and convert it to seconds.
///
/// The trimmed text must be a whole, non-negative number of minutes whose
/// value in seconds fits in `u32`. Rejections carry the message to show when
/// re-prompting.
#[track_caller]
pub fn parse_custom_minutes(input: &str, language: Language) -> CoreResult<u32> {
    let text = input.trim();
    let caller = Location::caller();
    let reject = || CoreError::InvalidTimeout {
        input: input.to_string(),
        reason: language
            .pick(
                "Please enter a non-negative integer number of minutes.",
                "Ingresa un número entero de minutos mayor o igual a 0.",
            )
            .to_string(),
        location: ErrorLocation::from(caller),
    };

    if text.is_empty() {
        return Err(reject());
    }

    let minutes: u32 = text.parse().map_err(|_| reject())?;
    minutes.checked_mul(60).ok_or_else(reject)
}

/// Input surface for [`prompt_custom_timeout`].
pub trait TimeoutPrompt {
    /// Show the entry dialog pre-filled with `initial`. `error` is set when
    /// re-prompting after a rejected entry. `None` means cancelled.
    fn ask(&mut self, initial: &str, error: Option<&str>) -> Option<String>;
}

/// Ask for a custom timeout until the entry is valid or the user cancels.
///
/// Returns the new value in seconds, or `None` when cancelled or unchanged.
pub fn prompt_custom_timeout(
    prompt: &mut dyn TimeoutPrompt,
    current_seconds: u32,
    language: Language,
) -> Option<u32> {
    let mut initial = (current_seconds / 60).to_string();
    let mut error: Option<String> = None;

    loop {
        let text = prompt.ask(&initial, error.as_deref())?;
        match parse_custom_minutes(&text, language) {
            Ok(seconds) if seconds == current_seconds => {
                debug!(seconds, "Custom timeout unchanged");
                return None;
            }
            Ok(seconds) => return Some(seconds),
            Err(CoreError::InvalidTimeout { reason, .. }) => {
                debug!(input = %text, "Rejected custom timeout, asking again");
                initial = text;
                error = Some(reason);
            }
            Err(e) => {
                warn!(error = %e, "Unexpected custom timeout error");
                return None;
            }
        }
    }
}
