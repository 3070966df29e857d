use crate::{
    Activation, BusyFlag, CycleEngine, CycleOutcome, Language, NoticeKind, ShutdownGuard, Slot,
    SlotRegistry, WriteGate, next_target,
    tests::doubles::{
        FakeRepository, FakeSession, RecordingNotifier, SCHEME_1, SCHEME_2, SCHEME_3, id,
    },
};

fn open_gate() -> WriteGate {
    WriteGate::new(ShutdownGuard::new(), Box::new(FakeSession::default()))
}

fn three_schemes() -> std::sync::Arc<FakeRepository> {
    FakeRepository::with_schemes(&[
        (SCHEME_1, "Balanced"),
        (SCHEME_2, "Power saver"),
        (SCHEME_3, "High performance"),
    ])
}

fn slots(bindings: &[(Slot, &str)]) -> SlotRegistry {
    let mut registry = SlotRegistry::new();
    for (slot, raw) in bindings {
        registry.set(*slot, Some(id(raw)));
    }
    registry
}

/// WHAT: Two bound slots alternate on every cycle
/// WHY: The tray's primary action must flip A -> B -> A
#[test]
fn given_a_and_b_bound_when_cycling_from_a_then_alternates_between_them() {
    // Given: A=s1, B=s2, s1 active
    let repo = three_schemes();
    repo.set_active(Some(SCHEME_1));
    let registry = slots(&[(Slot::A, SCHEME_1), (Slot::B, SCHEME_2)]);
    let gate = open_gate();
    let busy = BusyFlag::new();
    let notifier = RecordingNotifier::default();
    let engine = CycleEngine::new(repo.as_ref(), &gate, &busy, &notifier);

    // When: Cycling twice
    let first = engine.cycle_to_next(&registry, Language::English);
    let second = engine.cycle_to_next(&registry, Language::English);

    // Then: s2 then s1 was requested
    assert_eq!(
        first,
        CycleOutcome::Requested {
            target: id(SCHEME_2),
            activation: Activation::Applied
        }
    );
    assert_eq!(second.target(), Some(&id(SCHEME_1)));
    assert_eq!(repo.activations(), vec![id(SCHEME_2), id(SCHEME_1)]);
}

/// WHAT: N consecutive cycles return to the starting scheme
/// WHY: Cycle order must close over the candidate list
#[test]
fn given_three_candidates_when_cycling_three_times_then_returns_to_start() {
    // Given: A=s1, C=s2, D=s3 with s1 active (gap at B)
    let repo = three_schemes();
    repo.set_active(Some(SCHEME_1));
    let registry = slots(&[(Slot::A, SCHEME_1), (Slot::C, SCHEME_2), (Slot::D, SCHEME_3)]);
    let gate = open_gate();
    let busy = BusyFlag::new();
    let notifier = RecordingNotifier::default();
    let engine = CycleEngine::new(repo.as_ref(), &gate, &busy, &notifier);

    // When: Cycling once per candidate
    for _ in 0..3 {
        engine.cycle_to_next(&registry, Language::English);
    }

    // Then: Each candidate was visited in order and s1 is active again
    assert_eq!(
        repo.activations(),
        vec![id(SCHEME_2), id(SCHEME_3), id(SCHEME_1)]
    );
}

/// WHAT: An active scheme outside the slots falls back to the first candidate
/// WHY: A plan picked elsewhere must not strand the cycle
#[test]
fn given_active_not_in_slots_when_cycling_then_first_candidate_chosen() {
    // Given: s3 active but only s1 and s2 bound
    let repo = three_schemes();
    repo.set_active(Some(SCHEME_3));
    let registry = slots(&[(Slot::B, SCHEME_2), (Slot::D, SCHEME_1)]);
    let gate = open_gate();
    let busy = BusyFlag::new();
    let notifier = RecordingNotifier::default();
    let engine = CycleEngine::new(repo.as_ref(), &gate, &busy, &notifier);

    // When: Cycling
    let outcome = engine.cycle_to_next(&registry, Language::English);

    // Then: The first candidate in slot order (B) is chosen
    assert_eq!(outcome.target(), Some(&id(SCHEME_2)));
}

/// WHAT: Next-target selection covers the edge positions
/// WHY: Wrap-around and unknown-active behavior are easy to get wrong
#[test]
fn given_candidate_lists_when_picking_next_then_wraps_and_falls_back() {
    // Given: Two candidates
    let candidates = vec![id(SCHEME_1), id(SCHEME_2)];

    // When/Then: Each position resolves as expected
    assert_eq!(next_target(&candidates, None), Some(id(SCHEME_1)));
    assert_eq!(next_target(&candidates, Some(&id(SCHEME_1))), Some(id(SCHEME_2)));
    assert_eq!(next_target(&candidates, Some(&id(SCHEME_2))), Some(id(SCHEME_1)));
    assert_eq!(next_target(&candidates, Some(&id(SCHEME_3))), Some(id(SCHEME_1)));
    assert_eq!(next_target(&[], Some(&id(SCHEME_1))), None);
}

/// WHAT: The same id bound twice keeps both positions in the cycle
/// WHY: Duplicate bindings are allowed and must not crash the selection
#[test]
fn given_duplicate_binding_when_picking_next_then_first_occurrence_drives_position() {
    // Given: A=s1, B=s1, C=s2
    let candidates = vec![id(SCHEME_1), id(SCHEME_1), id(SCHEME_2)];

    // When: Active is s1
    let next = next_target(&candidates, Some(&id(SCHEME_1)));

    // Then: The entry after the first s1 is chosen
    assert_eq!(next, Some(id(SCHEME_1)));
}

/// WHAT: Scheme id comparison ignores letter case
/// WHY: The OS may report the active id with different casing than stored
#[test]
fn given_uppercase_active_id_when_picking_next_then_matches_candidate() {
    // Given: Lowercase candidates and an uppercase active id
    let candidates = vec![id(SCHEME_1), id(SCHEME_2)];
    let active = id(&SCHEME_1.to_uppercase());

    // When: Picking the next target
    let next = next_target(&candidates, Some(&active));

    // Then: The active position was recognised
    assert_eq!(next, Some(id(SCHEME_2)));
}

/// WHAT: No OS activation happens once the shutdown guard is set
/// WHY: Power writes during session end can fail or corrupt the active plan
#[test]
fn given_guard_set_when_cycling_then_no_activation_call() {
    // Given: Bound slots and a latched guard
    let repo = three_schemes();
    repo.set_active(Some(SCHEME_1));
    let registry = slots(&[(Slot::A, SCHEME_1), (Slot::B, SCHEME_2)]);
    let gate = open_gate();
    gate.guard().begin("test");
    let busy = BusyFlag::new();
    let notifier = RecordingNotifier::default();
    let engine = CycleEngine::new(repo.as_ref(), &gate, &busy, &notifier);

    // When: Cycling
    let outcome = engine.cycle_to_next(&registry, Language::English);

    // Then: A target is chosen but the write was skipped without OS calls
    assert_eq!(
        outcome,
        CycleOutcome::Requested {
            target: id(SCHEME_1),
            activation: Activation::Skipped
        }
    );
    assert!(repo.activations().is_empty());
    assert_eq!(repo.list_calls(), 0);
}

/// WHAT: A remote session or OS shutdown closes the write gate
/// WHY: Both conditions forbid power-scheme writes
#[test]
fn given_remote_or_shutting_down_session_when_activating_then_skipped() {
    for session in [
        FakeSession {
            shutdown_started: true,
            remote: false,
        },
        FakeSession {
            shutdown_started: false,
            remote: true,
        },
    ] {
        // Given: A gate over the closed session
        let repo = three_schemes();
        let gate = WriteGate::new(ShutdownGuard::new(), Box::new(session));
        let busy = BusyFlag::new();
        let notifier = RecordingNotifier::default();
        let engine = CycleEngine::new(repo.as_ref(), &gate, &busy, &notifier);

        // When: Activating directly
        let activation = engine.activate(&id(SCHEME_2));

        // Then: Nothing reached the repository
        assert_eq!(activation, Activation::Skipped);
        assert!(repo.activations().is_empty());
    }
}

/// WHAT: Cycling with no slots notifies exactly once and activates nothing
/// WHY: The user needs to know why the click did nothing
#[test]
fn given_no_slots_when_cycling_then_single_notice_and_no_activation() {
    // Given: An empty registry
    let repo = three_schemes();
    let gate = open_gate();
    let busy = BusyFlag::new();
    let notifier = RecordingNotifier::default();
    let engine = CycleEngine::new(repo.as_ref(), &gate, &busy, &notifier);

    // When: Cycling
    let outcome = engine.cycle_to_next(&SlotRegistry::new(), Language::Spanish);

    // Then: One info notice, localized, and no activation
    assert_eq!(outcome, CycleOutcome::NoSlotsAssigned);
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Info);
    assert!(notices[0].message.starts_with("Asigna"));
    assert!(repo.activations().is_empty());
}

/// WHAT: A cycle request while another is in flight is ignored
/// WHY: Rapid clicks must not stack activations
#[test]
fn given_busy_flag_held_when_cycling_then_busy_and_nothing_done() {
    // Given: The busy flag already held
    let repo = three_schemes();
    let registry = slots(&[(Slot::A, SCHEME_1), (Slot::B, SCHEME_2)]);
    let gate = open_gate();
    let busy = BusyFlag::new();
    let notifier = RecordingNotifier::default();
    let engine = CycleEngine::new(repo.as_ref(), &gate, &busy, &notifier);
    let held = busy.try_acquire();
    assert!(held.is_some());

    // When: Cycling
    let outcome = engine.cycle_to_next(&registry, Language::English);

    // Then: Busy, and released again once the holder drops
    assert_eq!(outcome, CycleOutcome::Busy);
    assert!(repo.activations().is_empty());
    drop(held);
    assert!(!busy.is_busy());
}

/// WHAT: A failed activation is reported as rejected
/// WHY: OS failures are logged and swallowed, never escalated
#[test]
fn given_failing_repository_when_cycling_then_rejected() {
    // Given: A repository that refuses activation
    let repo = three_schemes();
    repo.fail_activation();
    let registry = slots(&[(Slot::A, SCHEME_1)]);
    let gate = open_gate();
    let busy = BusyFlag::new();
    let notifier = RecordingNotifier::default();
    let engine = CycleEngine::new(repo.as_ref(), &gate, &busy, &notifier);

    // When: Cycling
    let outcome = engine.cycle_to_next(&registry, Language::English);

    // Then: Rejected, no notice, flag released
    assert_eq!(
        outcome,
        CycleOutcome::Requested {
            target: id(SCHEME_1),
            activation: Activation::Rejected
        }
    );
    assert!(notifier.notices().is_empty());
    assert!(!busy.is_busy());
}
