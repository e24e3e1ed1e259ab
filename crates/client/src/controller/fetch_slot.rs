use std::sync::atomic::{AtomicBool, Ordering};

// =============================================================================
// FetchSlot
// =============================================================================

/// Room for exactly one page fetch.
///
/// Acquiring hands out a guard that frees the slot when dropped, including on
/// early return and error paths. A second acquire while the guard lives
/// fails instead of waiting, which is how overlapping scroll triggers are
/// dropped rather than queued.
#[derive(Debug, Default)]
pub struct FetchSlot {
    busy: AtomicBool,
}

impl FetchSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn try_acquire(&self) -> Option<FetchGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FetchGuard { slot: self })
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct FetchGuard<'a> {
    slot: &'a FetchSlot,
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        self.slot.busy.store(false, Ordering::Release);
    }
}
