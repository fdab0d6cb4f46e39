//! The patient record.

use ed_core::{Acuity, PatientId, RoomId, Tick, Tier};

/// Where a patient currently is.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    WaitingRoom,
    Room(RoomId),
}

/// One patient.
///
/// `tier` never changes after creation.  `hours_left` starts at the tier's
/// treatment duration and only counts down while the patient is roomed.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patient {
    pub id:         PatientId,
    pub tier:       Tier,
    pub arrival:    Tick,
    pub hours_left: u32,
    pub location:   Location,
}

impl Patient {
    /// A newly arrived patient, in the waiting room, with the full treatment
    /// duration for `tier` ahead of them.
    pub fn new(id: PatientId, tier: Tier, arrival: Tick) -> Self {
        Self {
            id,
            tier,
            arrival,
            hours_left: tier.treatment_hours(),
            location:   Location::WaitingRoom,
        }
    }

    /// Override the remaining treatment duration.
    pub fn with_hours_left(mut self, hours: u32) -> Self {
        self.hours_left = hours;
        self
    }

    #[inline]
    pub fn acuity(&self) -> Acuity {
        self.tier.acuity()
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.location == Location::WaitingRoom
    }

    /// The room this patient occupies, if any.
    #[inline]
    pub fn room(&self) -> Option<RoomId> {
        match self.location {
            Location::Room(id)    => Some(id),
            Location::WaitingRoom => None,
        }
    }
}
