use ed_core::{PolicyKind, Tier};
use ed_ward::{Placement, Room, RoomPool, WaitingList};

use crate::{until_fixed_point, AssignmentPolicy};

/// Same tier first; otherwise the first free room whose letter sorts at or
/// after the patient's letter.
///
/// The comparison is on letters, not on capability: a B patient may fall
/// through to a C room, never to an A room, and an A patient never leaves
/// tier A.  Effective reach: A → {A}, B → {B, C}, C → {C}.
#[derive(Copy, Clone, Debug, Default)]
pub struct ClosestLevel;

impl AssignmentPolicy for ClosestLevel {
    fn kind(&self) -> PolicyKind {
        PolicyKind::ClosestLevel
    }

    fn assign(&self, waiting: &mut WaitingList, rooms: &mut RoomPool) -> Vec<Placement> {
        until_fixed_point(waiting, rooms, |patient, rooms| {
            let tier = patient.tier;
            rooms.first_free(tier).or_else(|| {
                if tier == Tier::A {
                    return None;
                }
                rooms
                    .rooms()
                    .iter()
                    .find(|r| !r.is_occupied() && r.tier().letter() >= tier.letter())
                    .map(Room::id)
            })
        })
    }
}
