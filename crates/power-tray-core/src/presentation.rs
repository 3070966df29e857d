//! Pure mapping from slot assignment, active scheme and contrast preference
//! to the icon the tray should show.

use crate::{Language, SchemeId, Slot, SlotRegistry};

/// User preference for the icon set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IconPreference {
    /// Follow the system theme, inverted for contrast.
    #[default]
    Auto,
    /// Always use light icons.
    Light,
    /// Always use dark icons.
    Dark,
}

impl IconPreference {
    /// All preferences in menu order.
    pub const ALL: [IconPreference; 3] = [
        IconPreference::Auto,
        IconPreference::Light,
        IconPreference::Dark,
    ];

    /// Config and menu-id key.
    pub fn key(self) -> &'static str {
        match self {
            IconPreference::Auto => "auto",
            IconPreference::Light => "light",
            IconPreference::Dark => "dark",
        }
    }

    /// Parse a key, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        IconPreference::ALL
            .into_iter()
            .find(|pref| pref.key().eq_ignore_ascii_case(value.trim()))
    }

    /// Localized menu caption.
    pub fn caption(self, language: Language) -> &'static str {
        match self {
            IconPreference::Auto => language.pick(
                "Auto (match system, high contrast)",
                "Auto (según sistema, alto contraste)",
            ),
            IconPreference::Light => language.pick("Use Light icons", "Usar iconos claros"),
            IconPreference::Dark => language.pick("Use Dark icons", "Usar iconos oscuros"),
        }
    }
}

/// Icon set variant actually rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    /// Light glyphs.
    Light,
    /// Dark glyphs.
    Dark,
}

impl IconVariant {
    /// Name used in resource keys.
    pub fn name(self) -> &'static str {
        match self {
            IconVariant::Light => "Light",
            IconVariant::Dark => "Dark",
        }
    }
}

/// Which slot glyph to draw, and in which variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresentationKey {
    /// Slot bound to the active scheme.
    pub slot: Slot,
    /// Resolved icon variant.
    pub variant: IconVariant,
}

impl PresentationKey {
    /// Resource key such as `Bolt.Dark`.
    pub fn resource_key(&self) -> String {
        format!("{}.{}", self.slot.glyph(), self.variant.name())
    }
}

/// Resolve the variant from the preference.
///
/// In `Auto` the variant is the opposite of the system brightness: a light
/// system gets dark icons and a dark system gets light icons.
pub fn resolve_variant(preference: IconPreference, system_is_light: bool) -> IconVariant {
    match preference {
        IconPreference::Light => IconVariant::Light,
        IconPreference::Dark => IconVariant::Dark,
        IconPreference::Auto if system_is_light => IconVariant::Dark,
        IconPreference::Auto => IconVariant::Light,
    }
}

/// Derive the presentation key, or `None` when the active scheme is unknown
/// or bound to no slot (the caller then shows the default icon).
pub fn derive(
    active_id: Option<&SchemeId>,
    slots: &SlotRegistry,
    preference: IconPreference,
    system_is_light: bool,
) -> Option<PresentationKey> {
    let slot = slots.slot_of(active_id?)?;
    Some(PresentationKey {
        slot,
        variant: resolve_variant(preference, system_is_light),
    })
}
