use ed_core::PolicyKind;
use ed_ward::{Placement, Room, RoomPool, WaitingList};

use crate::{until_fixed_point, AssignmentPolicy};

/// Each patient takes the first free room, in pool order, whose tier can
/// treat them.  A patients therefore land in A rooms only, B patients in A
/// or B rooms, C patients anywhere.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnyAvailable;

impl AssignmentPolicy for AnyAvailable {
    fn kind(&self) -> PolicyKind {
        PolicyKind::AnyAvailable
    }

    fn assign(&self, waiting: &mut WaitingList, rooms: &mut RoomPool) -> Vec<Placement> {
        until_fixed_point(waiting, rooms, |patient, rooms| {
            rooms
                .rooms()
                .iter()
                .find(|r| !r.is_occupied() && r.tier().can_treat(patient.tier))
                .map(Room::id)
        })
    }
}
