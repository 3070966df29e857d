use crate::{Language, PresentationKey};

/// Longest tooltip the tray accepts, in characters.
pub const TOOLTIP_MAX_CHARS: usize = 63;

/// Icon and tooltip the tray should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayView {
    /// Slot glyph to draw, or `None` for the default application icon.
    pub icon: Option<PresentationKey>,
    /// Tooltip text.
    pub tooltip: String,
}

/// Tooltip for the active scheme's name, or the app title when no scheme
/// is active.
///
/// Carriage returns are dropped, line feeds become " · ", and the result is
/// cut to [`TOOLTIP_MAX_CHARS`].
pub fn tray_tooltip(active_name: Option<&str>, language: Language) -> String {
    match active_name.filter(|name| !name.is_empty()) {
        Some(name) => name
            .replace('\r', "")
            .replace('\n', " · ")
            .chars()
            .take(TOOLTIP_MAX_CHARS)
            .collect(),
        None => language.app_title().to_string(),
    }
}
