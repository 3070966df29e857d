use crate::Language;

/// One of the four fixed slots a scheme can be bound to.
///
/// Declaration order is cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// Slot A, shown with the desktop glyph.
    A,
    /// Slot B, shown with the laptop glyph.
    B,
    /// Slot C, shown with the bolt glyph.
    C,
    /// Slot D, shown with the moon glyph.
    D,
}

impl Slot {
    /// All slots in cycle order.
    pub const ALL: [Slot; 4] = [Slot::A, Slot::B, Slot::C, Slot::D];

    /// Position of the slot in cycle order.
    pub fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
            Slot::C => 2,
            Slot::D => 3,
        }
    }

    /// Single-letter key used in menu ids and config.
    pub fn key(self) -> &'static str {
        match self {
            Slot::A => "A",
            Slot::B => "B",
            Slot::C => "C",
            Slot::D => "D",
        }
    }

    /// Parse a slot key, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Name of the glyph drawn for this slot.
    pub fn glyph(self) -> &'static str {
        match self {
            Slot::A => "Desktop",
            Slot::B => "Laptop",
            Slot::C => "Bolt",
            Slot::D => "Moon",
        }
    }

    /// Localized glyph caption.
    pub fn caption(self, language: Language) -> &'static str {
        match self {
            Slot::A => language.pick("Desktop", "Escritorio"),
            Slot::B => language.pick("Laptop", "Portátil"),
            Slot::C => language.pick("Bolt", "Rayo"),
            Slot::D => language.pick("Moon", "Luna"),
        }
    }
}
