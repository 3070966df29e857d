use crate::{SchemeId, Slot};

use tracing::debug;

/// In-memory bindings of the four slots to scheme ids.
///
/// No validation against the live scheme list: stale ids are kept and simply
/// never match. Several slots may hold the same id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotRegistry {
    bindings: [Option<SchemeId>; 4],
}

impl SlotRegistry {
    /// Registry with every slot unassigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id bound to `slot`, if any.
    pub fn get(&self, slot: Slot) -> Option<&SchemeId> {
        self.bindings[slot.index()].as_ref()
    }

    /// Bind or clear a slot.
    pub fn set(&mut self, slot: Slot, id: Option<SchemeId>) {
        debug!(slot = slot.key(), scheme_id = ?id, "Slot binding changed");
        self.bindings[slot.index()] = id;
    }

    /// Non-empty bindings in A, B, C, D order.
    pub fn candidates(&self) -> Vec<SchemeId> {
        self.bindings.iter().flatten().cloned().collect()
    }

    /// First slot (in A..D order) bound to `id`.
    pub fn slot_of(&self, id: &SchemeId) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|slot| self.get(*slot) == Some(id))
    }

    /// Every slot with its binding, in cycle order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Option<&SchemeId>)> + '_ {
        Slot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    /// True when no slot is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.iter().all(Option::is_none)
    }
}
