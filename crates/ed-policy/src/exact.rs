use ed_core::PolicyKind;
use ed_ward::{Placement, RoomPool, WaitingList};

use crate::{until_fixed_point, AssignmentPolicy};

/// Each patient goes only to a free room of their own tier.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExactType;

impl AssignmentPolicy for ExactType {
    fn kind(&self) -> PolicyKind {
        PolicyKind::ExactType
    }

    fn assign(&self, waiting: &mut WaitingList, rooms: &mut RoomPool) -> Vec<Placement> {
        until_fixed_point(waiting, rooms, |patient, rooms| rooms.first_free(patient.tier))
    }
}
