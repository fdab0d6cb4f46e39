//! Treatment rooms and the Room Pool.
//!
//! The pool is a flat `Vec<Room>` in a fixed order: all A rooms, then all B
//! rooms, then all C rooms, each numbered from 1.  Every scan the policies
//! perform walks this order, so "the first free room of tier X" is the
//! lowest-numbered free room of that tier.

use ed_core::{EdResult, PatientId, PerTier, RoomCounts, RoomId, Tier};

use crate::error::WardError;
use crate::patient::{Location, Patient};

// ── Room ──────────────────────────────────────────────────────────────────────

/// One typed treatment room with at most one occupant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    id:       RoomId,
    occupant: Option<Patient>,
}

impl Room {
    fn new(id: RoomId) -> Self {
        Self { id, occupant: None }
    }

    #[inline]
    pub fn id(&self) -> RoomId {
        self.id
    }

    #[inline]
    pub fn tier(&self) -> Tier {
        self.id.tier
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    #[inline]
    pub fn occupant(&self) -> Option<&Patient> {
        self.occupant.as_ref()
    }

    /// Daily staffing cost of this room.
    #[inline]
    pub fn cost_per_day(&self) -> i64 {
        self.tier().room_cost_per_day()
    }
}

// ── Placement / Rejected ──────────────────────────────────────────────────────

/// Record of one successful placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub patient:      PatientId,
    pub patient_tier: Tier,
    pub room:         RoomId,
}

impl Placement {
    /// `true` if the patient went into a room of a more capable tier than
    /// their own triage type.
    #[inline]
    pub fn is_upgrade(&self) -> bool {
        self.room.tier < self.patient_tier
    }
}

/// A placement that did not happen.  The patient is handed back so the
/// caller can return them to the waiting list.
#[derive(Debug)]
pub struct Rejected {
    pub patient: Patient,
    pub error:   WardError,
}

impl From<Rejected> for WardError {
    fn from(r: Rejected) -> Self {
        r.error
    }
}

// ── RoomPool ──────────────────────────────────────────────────────────────────

/// The ordered collection of all rooms.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomPool {
    rooms:  Vec<Room>,
    counts: RoomCounts,
}

impl RoomPool {
    /// Build the pool for `counts`: `a` rooms A1..Aa, then B1..Bb, then
    /// C1..Cc, all empty.
    ///
    /// Returns `TooManyRooms` or `StaffingCostExceeded` (in that priority)
    /// when `counts` violates the capacity limits; no pool is built then.
    pub fn generate(counts: RoomCounts) -> EdResult<Self> {
        counts.validate()?;
        let mut rooms = Vec::with_capacity(counts.total_rooms() as usize);
        for tier in Tier::ALL {
            for number in 1..=counts.of(tier) {
                rooms.push(Room::new(RoomId::new(tier, number as u16)));
            }
        }
        Ok(Self { rooms, counts })
    }

    #[inline]
    pub fn counts(&self) -> RoomCounts {
        self.counts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All rooms in pool order.
    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.position(id).map(|i| &self.rooms[i])
    }

    fn position(&self, id: RoomId) -> Option<usize> {
        if id.number == 0 || u32::from(id.number) > self.counts.of(id.tier) {
            return None;
        }
        let offset: u32 = Tier::ALL
            .iter()
            .take_while(|&&t| t < id.tier)
            .map(|&t| self.counts.of(t))
            .sum();
        Some((offset + u32::from(id.number) - 1) as usize)
    }

    /// Iterator over every roomed patient, in pool order.
    pub fn occupants(&self) -> impl Iterator<Item = &Patient> {
        self.rooms.iter().filter_map(Room::occupant)
    }

    // ── Counting ──────────────────────────────────────────────────────────

    /// Number of rooms of `tier`.
    #[inline]
    pub fn total(&self, tier: Tier) -> u32 {
        self.counts.of(tier)
    }

    /// Number of unoccupied rooms of `tier`.
    pub fn free_count(&self, tier: Tier) -> u32 {
        self.rooms
            .iter()
            .filter(|r| r.tier() == tier && !r.is_occupied())
            .count() as u32
    }

    /// Number of occupied rooms per tier.
    pub fn busy_counts(&self) -> PerTier<u32> {
        let mut busy = PerTier::new(0, 0, 0);
        for room in self.rooms.iter().filter(|r| r.is_occupied()) {
            busy[room.tier()] += 1;
        }
        busy
    }

    /// Fraction of `tier`'s rooms that are free, in `[0, 1]`.
    ///
    /// A tier with no rooms reports `0.0`, so no threshold can be met.
    pub fn availability_fraction(&self, tier: Tier) -> f64 {
        let total = self.total(tier);
        if total == 0 {
            return 0.0;
        }
        f64::from(self.free_count(tier)) / f64::from(total)
    }

    /// First free room of `tier` in pool order.
    pub fn first_free(&self, tier: Tier) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|r| r.tier() == tier && !r.is_occupied())
            .map(Room::id)
    }

    /// Rooms whose occupant's triage type is less acute than the room's tier.
    pub fn roomed_above_triage(&self) -> u32 {
        self.rooms
            .iter()
            .filter(|r| r.occupant().is_some_and(|p| r.tier() < p.tier))
            .count() as u32
    }

    /// Total daily staffing cost of the pool.
    #[inline]
    pub fn staffing_cost(&self) -> i64 {
        self.counts.staffing_cost()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move `patient` into `room`.
    ///
    /// No eligibility check is made here; the assignment policies decide
    /// which tiers a patient may use.  Fails only when the room does not
    /// exist or is occupied, in which case the patient is handed back.
    pub fn admit(&mut self, room: RoomId, mut patient: Patient) -> Result<Placement, Rejected> {
        let Some(i) = self.position(room) else {
            return Err(Rejected { patient, error: WardError::UnknownRoom(room) });
        };
        let slot = &mut self.rooms[i];
        if slot.is_occupied() {
            return Err(Rejected { patient, error: WardError::RoomOccupied(room) });
        }
        patient.location = Location::Room(room);
        let placement = Placement { patient: patient.id, patient_tier: patient.tier, room };
        slot.occupant = Some(patient);
        Ok(placement)
    }

    /// Move `patient` into `room` on an operator's instruction.
    ///
    /// Applies the placement lattice: A patients only into A rooms, B
    /// patients into A or B rooms, C patients anywhere.
    pub fn place_manually(&mut self, room: RoomId, patient: Patient) -> Result<Placement, Rejected> {
        if !room.tier.can_treat(patient.tier) {
            let error = WardError::Ineligible { patient: patient.tier, room };
            return Err(Rejected { patient, error });
        }
        self.admit(room, patient)
    }

    /// Advance treatment by one hour.
    ///
    /// Every occupant's `hours_left` is decremented; occupants reaching zero
    /// leave their rooms and are returned in pool order.
    pub fn advance_treatment(&mut self) -> Vec<Patient> {
        let mut discharged = Vec::new();
        for room in &mut self.rooms {
            let done = match room.occupant.as_mut() {
                Some(p) => {
                    p.hours_left = p.hours_left.saturating_sub(1);
                    p.hours_left == 0
                }
                None => false,
            };
            if done {
                discharged.extend(room.occupant.take());
            }
        }
        discharged
    }
}
