//! All mutable state of one run.

use ed_arrivals::PatientFactory;
use ed_core::{HourClock, SimRng};
use ed_ward::{RoomPool, WaitingList};

use crate::Ledger;

/// Everything one run mutates, owned by a single [`Sim`][crate::Sim].
///
/// A batch sweep builds a fresh value for every repetition; nothing here is
/// ever shared between runs.
pub struct SimulationState {
    pub clock:   HourClock,
    pub rooms:   RoomPool,
    pub waiting: WaitingList,
    pub factory: PatientFactory,
    pub rng:     SimRng,
    pub ledger:  Ledger,
}

impl SimulationState {
    pub fn new(clock: HourClock, rooms: RoomPool, rng: SimRng) -> Self {
        let ledger = Ledger::new(rooms.counts());
        Self {
            clock,
            rooms,
            waiting: WaitingList::new(),
            factory: PatientFactory::new(),
            rng,
            ledger,
        }
    }
}
