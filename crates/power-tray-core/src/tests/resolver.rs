use crate::{
    ActiveStateResolver, ShutdownGuard, WriteGate,
    tests::doubles::{FakeRepository, FakeSession, SCHEME_1, SCHEME_2, id},
};

fn gate_with(guard: ShutdownGuard, session: FakeSession) -> WriteGate {
    WriteGate::new(guard, Box::new(session))
}

/// WHAT: Resolution marks exactly the active scheme
/// WHY: Menus and tooltips read `is_active` from the resolved list
#[test]
fn given_active_scheme_when_resolving_then_only_it_is_marked() {
    // Given: Two schemes with s2 active (reported in upper case)
    let repo = FakeRepository::with_schemes(&[(SCHEME_1, "Balanced"), (SCHEME_2, "Saver")]);
    repo.set_active(Some(&SCHEME_2.to_uppercase()));
    let gate = gate_with(ShutdownGuard::new(), FakeSession::default());

    // When: Resolving
    let state = ActiveStateResolver::new(repo.as_ref(), &gate).resolve();

    // Then: s2 is the single active entry
    let active = state
        .schemes
        .iter()
        .filter(|scheme| scheme.is_active)
        .map(|scheme| scheme.id.clone())
        .collect::<Vec<_>>();
    assert_eq!(active, vec![id(SCHEME_2)]);
    assert_eq!(state.active_scheme().map(|s| s.name.as_str()), Some("Saver"));
}

/// WHAT: An active id missing from the list still reports a display name
/// WHY: Tooltips fall back to the raw id
#[test]
fn given_active_not_enumerated_when_naming_then_id_is_used() {
    // Given: Only s1 enumerated, s2 active
    let repo = FakeRepository::with_schemes(&[(SCHEME_1, "Balanced")]);
    repo.set_active(Some(SCHEME_2));
    let gate = gate_with(ShutdownGuard::new(), FakeSession::default());

    // When: Resolving
    let state = ActiveStateResolver::new(repo.as_ref(), &gate).resolve();

    // Then: No active entry, but the id names itself
    assert!(state.active_scheme().is_none());
    let active = id(SCHEME_2);
    assert_eq!(state.display_name(&active), SCHEME_2);
}

/// WHAT: A blank friendly name displays as the id
/// WHY: Unnamed plans still need a readable caption
#[test]
fn given_blank_name_when_resolving_then_display_name_is_id() {
    // Given: A scheme with an empty name
    let repo = FakeRepository::with_schemes(&[(SCHEME_1, "")]);
    let gate = gate_with(ShutdownGuard::new(), FakeSession::default());

    // When: Resolving
    let state = ActiveStateResolver::new(repo.as_ref(), &gate).resolve();

    // Then: The id stands in for the name
    assert_eq!(state.schemes[0].display_name(), SCHEME_1);
}

/// WHAT: Nothing is queried once shutdown has begun
/// WHY: OS power queries may hang while the session ends
#[test]
fn given_guard_set_when_resolving_then_empty_without_queries() {
    // Given: A latched guard
    let repo = FakeRepository::with_schemes(&[(SCHEME_1, "Balanced")]);
    repo.set_active(Some(SCHEME_1));
    let guard = ShutdownGuard::new();
    guard.begin("test");
    let gate = gate_with(guard, FakeSession::default());

    // When: Resolving
    let state = ActiveStateResolver::new(repo.as_ref(), &gate).resolve();

    // Then: Empty state and no list call
    assert!(state.schemes.is_empty());
    assert!(state.active_id.is_none());
    assert_eq!(repo.list_calls(), 0);
}

/// WHAT: An OS-reported shutdown stops enumeration even before the latch is set
/// WHY: The end-session message can arrive after the OS starts shutting down
#[test]
fn given_os_shutting_down_when_resolving_then_empty_without_queries() {
    // Given: An unset latch but a session already shutting down
    let repo = FakeRepository::with_schemes(&[(SCHEME_1, "Balanced")]);
    repo.set_active(Some(SCHEME_1));
    let session = FakeSession {
        shutdown_started: true,
        remote: false,
    };
    let gate = gate_with(ShutdownGuard::new(), session);

    // When: Resolving
    let state = ActiveStateResolver::new(repo.as_ref(), &gate).resolve();

    // Then: Empty state and no list call
    assert!(state.schemes.is_empty());
    assert!(state.active_id.is_none());
    assert_eq!(repo.list_calls(), 0);
}

/// WHAT: A remote session still reads the scheme list
/// WHY: Only writes are forbidden remotely; the menu must stay populated
#[test]
fn given_remote_session_when_resolving_then_schemes_listed() {
    // Given: A remote session
    let repo = FakeRepository::with_schemes(&[(SCHEME_1, "Balanced")]);
    repo.set_active(Some(SCHEME_1));
    let session = FakeSession {
        shutdown_started: false,
        remote: true,
    };
    let gate = gate_with(ShutdownGuard::new(), session);

    // When: Resolving
    let state = ActiveStateResolver::new(repo.as_ref(), &gate).resolve();

    // Then: The list is read normally
    assert_eq!(state.schemes.len(), 1);
    assert_eq!(state.active_id, Some(id(SCHEME_1)));
}

/// WHAT: Clones of the guard share one latch that never resets
/// WHY: Every trigger site holds its own clone
#[test]
fn given_cloned_guard_when_one_clone_begins_then_all_see_it() {
    // Given: A guard and its clone
    let guard = ShutdownGuard::new();
    let clone = guard.clone();

    // When: The clone is triggered twice
    clone.begin("first");
    clone.begin("second");

    // Then: The original is set
    assert!(guard.is_set());
}
