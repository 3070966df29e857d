use crate::{
    SchemeId,
    tests::doubles::{SCHEME_1, id},
};

use std::collections::HashSet;

use uuid::Uuid;

/// WHAT: Ids compare and hash without regard to case
/// WHY: OS APIs and config files disagree on GUID casing
#[test]
fn given_ids_differing_in_case_when_compared_then_equal_and_same_hash() {
    // Given: The same GUID in two casings
    let lower = id(SCHEME_1);
    let upper = id(&SCHEME_1.to_uppercase());

    // When: Inserting both in a set
    let set = [lower.clone(), upper.clone()].into_iter().collect::<HashSet<_>>();

    // Then: They collapse to one entry
    assert_eq!(lower, upper);
    assert_eq!(set.len(), 1);
}

/// WHAT: Blank ids are rejected and surrounding whitespace is trimmed
/// WHY: Empty config values mean "unassigned"
#[test]
fn given_raw_text_when_building_id_then_trimmed_or_rejected() {
    assert!(SchemeId::new("   ").is_none());
    assert!(SchemeId::new("").is_none());
    assert_eq!(
        SchemeId::new(format!("  {}\n", SCHEME_1)).map(|id| id.as_str().to_string()),
        Some(SCHEME_1.to_string())
    );
}

/// WHAT: Ids built from a UUID convert back to the same UUID
/// WHY: The OS layer works in GUIDs, the core in strings
#[test]
#[allow(clippy::unwrap_used)]
fn given_uuid_when_wrapping_then_converts_back() {
    // Given: A parsed UUID
    let uuid = Uuid::parse_str(SCHEME_1).unwrap();

    // When: Wrapping and unwrapping
    let scheme = SchemeId::from_uuid(uuid);

    // Then: Same value
    assert_eq!(scheme.to_uuid(), Some(uuid));
    assert_eq!(scheme, id(SCHEME_1));
}

/// WHAT: Non-GUID ids are kept but have no UUID form
/// WHY: Stale or hand-written config values must not crash the tray
#[test]
fn given_non_guid_text_when_converting_then_no_uuid() {
    assert_eq!(id("not-a-guid").to_uuid(), None);
}
