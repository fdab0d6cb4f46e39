//! Scan helpers shared by the policies.

use ed_core::RoomId;
use ed_ward::{Patient, Placement, RoomPool, WaitingList};

/// Offer every waiting patient, in creation order, to `choose`.
///
/// `choose` sees the pool as updated by all earlier placements of this pass.
/// A returned room is admitted immediately; patients without a room go back
/// to the waiting list in their original order.
pub fn single_pass<F>(waiting: &mut WaitingList, rooms: &mut RoomPool, mut choose: F) -> Vec<Placement>
where
    F: FnMut(&Patient, &RoomPool) -> Option<RoomId>,
{
    let mut placements = Vec::new();
    let mut unplaced = Vec::new();

    for patient in waiting.drain_all() {
        let Some(room) = choose(&patient, &*rooms) else {
            unplaced.push(patient);
            continue;
        };
        match rooms.admit(room, patient) {
            Ok(placement) => placements.push(placement),
            // A chooser only names free rooms; a refusal just leaves the patient waiting.
            Err(rejected) => unplaced.push(rejected.patient),
        }
    }

    waiting.restore(unplaced);
    placements
}

/// Repeat [`single_pass`] until a full pass places nobody.
pub fn until_fixed_point<F>(waiting: &mut WaitingList, rooms: &mut RoomPool, mut choose: F) -> Vec<Placement>
where
    F: FnMut(&Patient, &RoomPool) -> Option<RoomId>,
{
    let mut placements = Vec::new();
    loop {
        let placed = single_pass(waiting, rooms, &mut choose);
        if placed.is_empty() {
            return placements;
        }
        placements.extend(placed);
    }
}
