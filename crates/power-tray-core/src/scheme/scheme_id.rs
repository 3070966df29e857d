use std::{
    fmt,
    hash::{Hash, Hasher},
};

use uuid::Uuid;

/// Identifier of an OS power scheme, kept in its canonical string form.
///
/// Equality and hashing ignore ASCII case. An empty string never forms a
/// `SchemeId`; "unassigned" and "unknown" are `Option<SchemeId>::None`.
/// The id is not required to parse as a GUID: stale or hand-edited bindings
/// are carried as-is and simply never match a live scheme.
#[derive(Debug, Clone, Eq)]
pub struct SchemeId(String);

impl SchemeId {
    /// Build an id from raw text, trimming whitespace. Returns `None` when empty.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Canonical lowercase hyphenated form of a GUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }

    /// The id as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the id as a GUID. Only the OS boundary needs this.
    pub fn to_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.0).ok()
    }
}

impl PartialEq for SchemeId {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Hash for SchemeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
