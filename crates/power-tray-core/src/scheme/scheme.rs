use crate::SchemeId;

/// A power scheme as reported by one enumeration round-trip.
///
/// Never cached beyond the query that produced it; `is_active` is derived
/// by the resolver, not stored by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    /// Scheme identifier.
    pub id: SchemeId,
    /// Friendly name, possibly empty.
    pub name: String,
    /// Whether this scheme was the active one at query time.
    pub is_active: bool,
}

impl Scheme {
    /// Create an inactive scheme entry.
    pub fn new(id: SchemeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: false,
        }
    }

    /// Friendly name, falling back to the identifier when the name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}
