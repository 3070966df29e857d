//! Process-wide one-way shutdown latch.

use crate::SessionProbe;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::info;

/// One-way latch set by any session-ending, process-exit or end-session
/// trigger. Once set, no further OS writes are issued. Never reset.
///
/// Clones share the same latch.
#[derive(Debug, Clone, Default)]
pub struct ShutdownGuard {
    latched: Arc<AtomicBool>,
}

impl ShutdownGuard {
    /// A fresh, unset latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latch. `source` names the trigger for the diagnostic log.
    pub fn begin(&self, source: &str) {
        let was_set = self.latched.swap(true, Ordering::SeqCst);
        info!(source, already_set = was_set, "Shutdown guard triggered");
    }

    /// Whether any trigger has fired.
    pub fn is_set(&self) -> bool {
        self.latched.load(Ordering::SeqCst)
    }
}

/// Decides whether OS writes may be issued right now.
///
/// Closed when the shutdown guard is set, when the OS reports a shutdown in
/// progress, or when running in a remote session.
pub struct WriteGate {
    guard: ShutdownGuard,
    session: Box<dyn SessionProbe + Send>,
}

impl WriteGate {
    /// Combine the latch with an OS session probe.
    pub fn new(guard: ShutdownGuard, session: Box<dyn SessionProbe + Send>) -> Self {
        Self { guard, session }
    }

    /// The shared shutdown latch.
    pub fn guard(&self) -> &ShutdownGuard {
        &self.guard
    }

    /// True once the latch is set or the OS reports the session ending.
    /// Reads stop here; remote sessions may still read.
    pub fn shutting_down(&self) -> bool {
        self.guard.is_set() || self.session.shutdown_started()
    }

    /// True when writes may proceed. The latch is checked first so no OS
    /// query happens once it is set.
    pub fn is_open(&self) -> bool {
        !self.guard.is_set() && !self.session.shutdown_started() && !self.session.is_remote_session()
    }
}
