use ed_core::{PolicyKind, RoomId, Tier};
use ed_ward::{Patient, Placement, RoomPool, WaitingList};

use crate::{single_pass, AssignmentPolicy};

/// Free fraction of A rooms required before a B patient may take one.
pub const A_FOR_B_THRESHOLD: f64 = 0.75;
/// Free fraction of B rooms required before a C patient may take one.
pub const B_FOR_C_THRESHOLD: f64 = 0.50;
/// Free fraction of A rooms required before a C patient may take one.
pub const A_FOR_C_THRESHOLD: f64 = 0.50;

/// Own tier first; a more capable tier only while enough of it is idle.
///
/// | Patient | Order of preference                                           |
/// |---------|---------------------------------------------------------------|
/// | A       | A                                                             |
/// | B       | B, then A if free-A fraction ≥ 0.75                           |
/// | C       | C, then B if free-B fraction ≥ 0.50, then A if free-A ≥ 0.50  |
///
/// Fractions are read at the moment the patient is evaluated.  Each patient
/// is evaluated once per call; there is no second pass.
#[derive(Copy, Clone, Debug, Default)]
pub struct ThresholdFallback;

impl ThresholdFallback {
    fn choose(patient: &Patient, rooms: &RoomPool) -> Option<RoomId> {
        let upgrade = |tier: Tier, threshold: f64| {
            if rooms.availability_fraction(tier) >= threshold {
                rooms.first_free(tier)
            } else {
                None
            }
        };

        match patient.tier {
            Tier::A => rooms.first_free(Tier::A),
            Tier::B => rooms
                .first_free(Tier::B)
                .or_else(|| upgrade(Tier::A, A_FOR_B_THRESHOLD)),
            Tier::C => rooms
                .first_free(Tier::C)
                .or_else(|| upgrade(Tier::B, B_FOR_C_THRESHOLD))
                .or_else(|| upgrade(Tier::A, A_FOR_C_THRESHOLD)),
        }
    }
}

impl AssignmentPolicy for ThresholdFallback {
    fn kind(&self) -> PolicyKind {
        PolicyKind::ThresholdFallback
    }

    fn assign(&self, waiting: &mut WaitingList, rooms: &mut RoomPool) -> Vec<Placement> {
        single_pass(waiting, rooms, Self::choose)
    }
}
