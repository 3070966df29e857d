use power_tray_core::{SchemeId, Slot, SlotRegistry};

use serde::{Deserialize, Serialize};

/// Slot bindings as stored on disk. Empty strings mean unassigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotsConfig {
    /// Scheme bound to slot A.
    pub a: String,
    /// Scheme bound to slot B.
    pub b: String,
    /// Scheme bound to slot C.
    pub c: String,
    /// Scheme bound to slot D.
    pub d: String,
}

impl SlotsConfig {
    pub(crate) fn to_registry(&self) -> SlotRegistry {
        let mut registry = SlotRegistry::new();
        for slot in Slot::ALL {
            registry.set(slot, SchemeId::new(self.field(slot)));
        }
        registry
    }

    pub(crate) fn from_registry(registry: &SlotRegistry) -> Self {
        let value = |slot| {
            registry
                .get(slot)
                .map(|id| id.as_str().to_string())
                .unwrap_or_default()
        };
        Self {
            a: value(Slot::A),
            b: value(Slot::B),
            c: value(Slot::C),
            d: value(Slot::D),
        }
    }

    fn field(&self, slot: Slot) -> &str {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
            Slot::C => &self.c,
            Slot::D => &self.d,
        }
    }
}
