//! Live view of the OS scheme list and active scheme.

use crate::{Scheme, SchemeId, SchemeRepository, WriteGate};

use tracing::{debug, instrument};

/// Result of one resolution round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveState {
    /// Schemes with `is_active` derived from `active_id`.
    pub schemes: Vec<Scheme>,
    /// Scheme the OS reported as active, if known.
    pub active_id: Option<SchemeId>,
}

impl ActiveState {
    /// The active scheme's entry, when it is in the enumerated list.
    pub fn active_scheme(&self) -> Option<&Scheme> {
        self.schemes.iter().find(|scheme| scheme.is_active)
    }

    /// Display name for `id`, falling back to the id itself when the scheme
    /// is not in the list.
    pub fn display_name<'a>(&'a self, id: &'a SchemeId) -> &'a str {
        self.schemes
            .iter()
            .find(|scheme| &scheme.id == id)
            .map(Scheme::display_name)
            .unwrap_or(id.as_str())
    }
}

/// Reads the live scheme list and active scheme on every call.
///
/// No caching: callers re-resolve whenever they need a current value. Once
/// the shutdown guard is set or the OS reports a shutdown, no power query is
/// made and the state is empty.
pub struct ActiveStateResolver<'a> {
    repository: &'a dyn SchemeRepository,
    gate: &'a WriteGate,
}

impl<'a> ActiveStateResolver<'a> {
    /// Resolver over `repository`, honouring the shutdown state of `gate`.
    pub fn new(repository: &'a dyn SchemeRepository, gate: &'a WriteGate) -> Self {
        Self { repository, gate }
    }

    /// Query the OS for the scheme list and the active scheme.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> ActiveState {
        if self.gate.shutting_down() {
            debug!("Shutdown in progress, skipping scheme query");
            return ActiveState::default();
        }

        let active_id = self.repository.active_scheme_id();
        let schemes = self
            .repository
            .list_schemes()
            .into_iter()
            .map(|mut scheme| {
                scheme.is_active = active_id.as_ref() == Some(&scheme.id);
                scheme
            })
            .collect::<Vec<_>>();

        debug!(
            scheme_count = schemes.len(),
            active_id = ?active_id,
            "Resolved power schemes"
        );

        ActiveState { schemes, active_id }
    }
}
