use crate::feed::ConnectionSlot;
use std::sync::Arc;

/// RAII hold on the connection slot.
///
/// Invariants:
/// - A guard exists only after `ConnectionSlot::try_acquire()` succeeded
/// - The slot is released exactly once, on Drop
#[derive(Debug)]
pub struct ConnectionGuard {
    slot: Arc<ConnectionSlot>,
}

impl ConnectionGuard {
    /// Take `slot`, or `None` when another connection holds it.
    pub fn acquire(slot: &Arc<ConnectionSlot>) -> Option<Self> {
        if !slot.try_acquire() {
            return None;
        }
        Some(Self {
            slot: Arc::clone(slot),
        })
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.slot.release();
    }
}
