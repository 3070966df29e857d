mod registry;
mod slot;

pub use {registry::SlotRegistry, slot::Slot};
