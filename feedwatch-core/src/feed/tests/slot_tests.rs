use crate::feed::{ConnectionGuard, ConnectionSlot};
use std::sync::Arc;

#[test]
fn slot_admits_one_guard() {
    let slot = Arc::new(ConnectionSlot::new());

    let first = ConnectionGuard::acquire(&slot);
    let second = ConnectionGuard::acquire(&slot);

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(slot.active(), 1);
}

#[test]
fn dropping_guard_frees_the_slot() {
    let slot = Arc::new(ConnectionSlot::new());

    let guard = ConnectionGuard::acquire(&slot);
    drop(guard);

    assert_eq!(slot.active(), 0);
    assert!(ConnectionGuard::acquire(&slot).is_some());
}

#[test]
fn failed_acquire_leaves_holder_in_place() {
    // Arrange
    let slot = Arc::new(ConnectionSlot::new());
    let held = ConnectionGuard::acquire(&slot);

    // Act
    let refused = ConnectionGuard::acquire(&slot);
    drop(refused);

    // Assert
    assert!(held.is_some());
    assert_eq!(slot.active(), 1);
}
