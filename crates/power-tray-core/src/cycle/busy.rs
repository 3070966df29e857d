use std::sync::atomic::{AtomicBool, Ordering};

/// Single in-flight flag for cycle requests.
///
/// A second request while one is running is dropped, never queued.
#[derive(Debug, Default)]
pub struct BusyFlag {
    busy: AtomicBool,
}

impl BusyFlag {
    /// A flag that is not held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the flag, or `None` if a request is already in flight.
    pub fn try_acquire(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { flag: self })
    }

    /// Whether a request currently holds the flag.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// RAII guard that releases the busy flag when dropped, including on
/// early return or unwinding.
pub struct BusyGuard<'a> {
    flag: &'a BusyFlag,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.busy.store(false, Ordering::Release);
    }
}
