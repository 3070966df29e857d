use crate::{
    ActiveStateResolver, BusyFlag, Language, Notice, Notifier, SchemeId, SchemeRepository,
    SlotRegistry, WriteGate,
};

use tracing::{debug, info, instrument, warn};

/// What happened to an activation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The OS accepted the request.
    Applied,
    /// The OS call failed; nothing else is done about it.
    Rejected,
    /// The write gate was closed, so the OS was not called.
    Skipped,
}

/// Result of one cycle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Another cycle request was already in flight.
    Busy,
    /// No slot is bound; the user was told so.
    NoSlotsAssigned,
    /// A target was chosen and activation was requested or skipped.
    Requested {
        /// Scheme chosen as the next one.
        target: SchemeId,
        /// Outcome of the OS write.
        activation: Activation,
    },
}

impl CycleOutcome {
    /// The scheme requested for activation, if any.
    pub fn target(&self) -> Option<&SchemeId> {
        match self {
            CycleOutcome::Requested { target, .. } => Some(target),
            CycleOutcome::Busy | CycleOutcome::NoSlotsAssigned => None,
        }
    }
}

/// Pick the scheme after `active` in `candidates`, wrapping around.
///
/// With no active scheme the first candidate wins. An active id that is the
/// last candidate or not a candidate at all also yields the first one.
pub fn next_target(candidates: &[SchemeId], active: Option<&SchemeId>) -> Option<SchemeId> {
    let first = candidates.first()?;
    let Some(active) = active else {
        return Some(first.clone());
    };

    let next = candidates
        .iter()
        .position(|candidate| candidate == active)
        .and_then(|index| candidates.get(index + 1));

    Some(next.unwrap_or(first).clone())
}

/// Steps the active scheme through the assigned slots.
pub struct CycleEngine<'a> {
    repository: &'a dyn SchemeRepository,
    gate: &'a WriteGate,
    busy: &'a BusyFlag,
    notifier: &'a dyn Notifier,
}

impl<'a> CycleEngine<'a> {
    /// Engine over the given collaborators.
    pub fn new(
        repository: &'a dyn SchemeRepository,
        gate: &'a WriteGate,
        busy: &'a BusyFlag,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            repository,
            gate,
            busy,
            notifier,
        }
    }

    /// Activate the scheme after the current one, in slot order A..D.
    ///
    /// Re-entrant calls while a request is in flight return
    /// [`CycleOutcome::Busy`] without doing anything.
    #[instrument(skip(self, slots))]
    pub fn cycle_to_next(&self, slots: &SlotRegistry, language: Language) -> CycleOutcome {
        let Some(_busy) = self.busy.try_acquire() else {
            debug!("Cycle already in flight, ignoring request");
            return CycleOutcome::Busy;
        };

        let candidates = slots.candidates();
        if candidates.is_empty() {
            info!("Cycle requested with no slots assigned");
            self.notifier.notify(Notice::no_slots_assigned(language));
            return CycleOutcome::NoSlotsAssigned;
        }

        let state = ActiveStateResolver::new(self.repository, self.gate).resolve();
        let Some(target) = next_target(&candidates, state.active_id.as_ref()) else {
            return CycleOutcome::NoSlotsAssigned;
        };

        info!(
            from = ?state.active_id,
            target = %target,
            candidate_count = candidates.len(),
            "Cycling power scheme"
        );

        let activation = self.activate(&target);

        CycleOutcome::Requested { target, activation }
    }

    /// Request activation of `target` unless the write gate is closed.
    #[instrument(skip(self), fields(scheme_id = %target))]
    pub fn activate(&self, target: &SchemeId) -> Activation {
        if !self.gate.is_open() {
            info!("Write gate closed, skipping scheme activation");
            return Activation::Skipped;
        }

        if self.repository.activate_scheme(target) {
            debug!("Scheme activation accepted");
            Activation::Applied
        } else {
            warn!("Scheme activation failed");
            Activation::Rejected
        }
    }
}
