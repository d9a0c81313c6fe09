use std::sync::atomic::{AtomicBool, Ordering};

/// The single place a live feed connection may occupy.
#[derive(Debug, Default)]
pub struct ConnectionSlot {
    taken: AtomicBool,
}

impl ConnectionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the place; `false` when a connection already holds it.
    pub fn try_acquire(&self) -> bool {
        self.taken
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn release(&self) {
        self.taken.store(false, Ordering::Release);
    }

    /// Live connections: zero or one.
    pub fn active(&self) -> usize {
        usize::from(self.taken.load(Ordering::Acquire))
    }
}
