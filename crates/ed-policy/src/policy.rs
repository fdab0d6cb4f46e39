//! The `AssignmentPolicy` trait.

use ed_core::PolicyKind;
use ed_ward::{Placement, RoomPool, WaitingList};

/// Maps waiting patients onto free rooms.
///
/// `assign` moves every patient it places out of `waiting` and into one room
/// of `rooms`, and returns the placements in the order they were made.
/// Patients it does not place stay in `waiting` in their original order.
///
/// # Thread safety
///
/// A batch sweep may share one policy across Rayon workers, so
/// implementations must be `Send + Sync` and keep no per-run state.
pub trait AssignmentPolicy: Send + Sync {
    /// Which of the configured policies this is.
    fn kind(&self) -> PolicyKind;

    fn assign(&self, waiting: &mut WaitingList, rooms: &mut RoomPool) -> Vec<Placement>;
}

impl<P: AssignmentPolicy + ?Sized> AssignmentPolicy for Box<P> {
    fn kind(&self) -> PolicyKind {
        (**self).kind()
    }

    fn assign(&self, waiting: &mut WaitingList, rooms: &mut RoomPool) -> Vec<Placement> {
        (**self).assign(waiting, rooms)
    }
}

impl<P: AssignmentPolicy + ?Sized> AssignmentPolicy for &P {
    fn kind(&self) -> PolicyKind {
        (**self).kind()
    }

    fn assign(&self, waiting: &mut WaitingList, rooms: &mut RoomPool) -> Vec<Placement> {
        (**self).assign(waiting, rooms)
    }
}
