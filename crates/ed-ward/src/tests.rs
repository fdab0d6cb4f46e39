//! Unit tests for ed-ward.

#[cfg(test)]
mod helpers {
    use ed_core::{PatientId, Tick, Tier};

    use crate::Patient;

    pub fn patient(id: u32, tier: Tier) -> Patient {
        Patient::new(PatientId(id), tier, Tick::ZERO)
    }
}

#[cfg(test)]
mod patient {
    use ed_core::{Acuity, RoomId, Tier};

    use super::helpers::patient;
    use crate::Location;

    #[test]
    fn new_patient_waits_with_full_duration() {
        for (tier, hours) in [(Tier::A, 4), (Tier::B, 3), (Tier::C, 2)] {
            let p = patient(0, tier);
            assert_eq!(p.hours_left, hours);
            assert!(p.is_waiting());
            assert_eq!(p.room(), None);
        }
    }

    #[test]
    fn acuity_follows_tier() {
        assert_eq!(patient(0, Tier::A).acuity(), Acuity::High);
        assert_eq!(patient(0, Tier::C).acuity(), Acuity::Low);
    }

    #[test]
    fn room_reports_location() {
        let mut p = patient(0, Tier::B);
        p.location = Location::Room(RoomId::new(Tier::A, 1));
        assert!(!p.is_waiting());
        assert_eq!(p.room(), Some(RoomId::new(Tier::A, 1)));
    }
}

#[cfg(test)]
mod pool {
    use ed_core::{EdError, PatientId, RoomCounts, RoomId, Tier};

    use super::helpers::patient;
    use crate::{RoomPool, WardError};

    fn pool(a: u32, b: u32, c: u32) -> RoomPool {
        RoomPool::generate(RoomCounts::new(a, b, c)).unwrap()
    }

    #[test]
    fn generate_orders_a_then_b_then_c() {
        let pool = pool(2, 1, 2);
        let labels: Vec<String> = pool.rooms().iter().map(|r| r.id().to_string()).collect();
        assert_eq!(labels, ["A1", "A2", "B1", "C1", "C2"]);
        assert!(pool.rooms().iter().all(|r| !r.is_occupied()));
        assert_eq!(pool.staffing_cost(), 2 * 3900 + 3000 + 2 * 1600);
        let per_room: i64 = pool.rooms().iter().map(|r| r.cost_per_day()).sum();
        assert_eq!(per_room, pool.staffing_cost());
    }

    #[test]
    fn generate_rejects_too_many_rooms_first() {
        // 17 rooms and also far over budget: room count wins.
        let err = RoomPool::generate(RoomCounts::new(17, 0, 0)).unwrap_err();
        assert!(matches!(err, EdError::TooManyRooms { total: 17, .. }));
    }

    #[test]
    fn generate_rejects_over_budget() {
        let err = RoomPool::generate(RoomCounts::new(11, 0, 0)).unwrap_err();
        assert!(matches!(err, EdError::StaffingCostExceeded { cost: 42_900, .. }));
    }

    #[test]
    fn empty_pool_is_valid() {
        let pool = pool(0, 0, 0);
        assert!(pool.is_empty());
        assert_eq!(pool.availability_fraction(Tier::A), 0.0);
        assert_eq!(pool.first_free(Tier::B), None);
    }

    #[test]
    fn get_resolves_ids_and_rejects_unknown() {
        let pool = pool(1, 2, 1);
        assert_eq!(pool.get(RoomId::new(Tier::B, 2)).unwrap().id(), RoomId::new(Tier::B, 2));
        assert!(pool.get(RoomId::new(Tier::B, 3)).is_none());
        assert!(pool.get(RoomId::new(Tier::A, 0)).is_none());
    }

    #[test]
    fn admit_fills_room_and_rejects_second_patient() {
        let mut pool = pool(1, 0, 0);
        let a1 = RoomId::new(Tier::A, 1);
        let placement = pool.admit(a1, patient(0, Tier::C)).unwrap();
        assert_eq!(placement.room, a1);
        assert!(placement.is_upgrade());
        assert_eq!(pool.get(a1).unwrap().occupant().unwrap().room(), Some(a1));

        let rejected = pool.admit(a1, patient(1, Tier::A)).unwrap_err();
        assert_eq!(rejected.error, WardError::RoomOccupied(a1));
        assert_eq!(rejected.patient.id, PatientId(1));
        assert!(rejected.patient.is_waiting());
    }

    #[test]
    fn admit_unknown_room_hands_patient_back() {
        let mut pool = pool(1, 0, 0);
        let c1 = RoomId::new(Tier::C, 1);
        let rejected = pool.admit(c1, patient(4, Tier::C)).unwrap_err();
        assert_eq!(rejected.error, WardError::UnknownRoom(c1));
        assert_eq!(rejected.patient.id, PatientId(4));
    }

    #[test]
    fn manual_placement_follows_lattice() {
        let mut pool = pool(2, 2, 2);
        let a = |n| RoomId::new(Tier::A, n);
        let b = |n| RoomId::new(Tier::B, n);
        let c = |n| RoomId::new(Tier::C, n);

        // A only in A.
        assert!(pool.place_manually(b(1), patient(0, Tier::A)).is_err());
        assert!(pool.place_manually(c(1), patient(0, Tier::A)).is_err());
        assert!(pool.place_manually(a(1), patient(0, Tier::A)).is_ok());
        // B in A or B, never C.
        let err = pool.place_manually(c(1), patient(1, Tier::B)).unwrap_err();
        assert_eq!(err.error, WardError::Ineligible { patient: Tier::B, room: c(1) });
        assert!(pool.place_manually(a(2), patient(1, Tier::B)).is_ok());
        assert!(pool.place_manually(b(1), patient(2, Tier::B)).is_ok());
        // C anywhere.
        assert!(pool.place_manually(b(2), patient(3, Tier::C)).is_ok());
        assert!(pool.place_manually(c(1), patient(4, Tier::C)).is_ok());
    }

    #[test]
    fn counting_helpers() {
        let mut pool = pool(2, 1, 2);
        pool.admit(RoomId::new(Tier::A, 1), patient(0, Tier::B)).unwrap();
        pool.admit(RoomId::new(Tier::C, 2), patient(1, Tier::C)).unwrap();
        assert_eq!(pool.free_count(Tier::A), 1);
        assert_eq!(pool.availability_fraction(Tier::A), 0.5);
        assert_eq!(pool.availability_fraction(Tier::B), 1.0);
        assert_eq!(pool.first_free(Tier::A), Some(RoomId::new(Tier::A, 2)));
        assert_eq!(pool.first_free(Tier::C), Some(RoomId::new(Tier::C, 1)));
        let busy = pool.busy_counts();
        assert_eq!((busy[Tier::A], busy[Tier::B], busy[Tier::C]), (1, 0, 1));
        assert_eq!(pool.roomed_above_triage(), 1);
        assert_eq!(pool.occupants().count(), 2);
    }

    #[test]
    fn advance_treatment_discharges_at_zero() {
        let mut pool = pool(1, 0, 1);
        pool.admit(RoomId::new(Tier::A, 1), patient(0, Tier::A)).unwrap();
        pool.admit(RoomId::new(Tier::C, 1), patient(1, Tier::C)).unwrap();

        assert!(pool.advance_treatment().is_empty());
        let out = pool.advance_treatment();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, PatientId(1));
        assert!(!pool.get(RoomId::new(Tier::C, 1)).unwrap().is_occupied());

        assert!(pool.advance_treatment().is_empty());
        let out = pool.advance_treatment();
        assert_eq!(out[0].id, PatientId(0));
        assert_eq!(pool.occupants().count(), 0);
    }
}

#[cfg(test)]
mod waiting {
    use ed_core::{PatientId, Tier};

    use super::helpers::patient;
    use crate::WaitingList;

    fn ids(list: &WaitingList) -> Vec<u32> {
        list.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn push_keeps_creation_order() {
        let mut list = WaitingList::new();
        for id in [0, 1, 4] {
            list.push(patient(id, Tier::C));
        }
        list.push(patient(2, Tier::A));
        assert_eq!(ids(&list), [0, 1, 2, 4]);
    }

    #[test]
    fn take_and_contains() {
        let mut list = WaitingList::new();
        list.push(patient(0, Tier::A));
        list.push(patient(1, Tier::B));
        assert!(list.contains(PatientId(1)));
        assert_eq!(list.take(PatientId(1)).unwrap().tier, Tier::B);
        assert!(!list.contains(PatientId(1)));
        assert!(list.take(PatientId(9)).is_none());
    }

    #[test]
    fn drain_and_restore_round_trip_order() {
        let mut list = WaitingList::new();
        for id in 0..5 {
            list.push(patient(id, Tier::B));
        }
        let mut drained = list.drain_all();
        assert!(list.is_empty());
        drained.reverse();
        list.restore(drained);
        assert_eq!(ids(&list), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn remove_where_preserves_order_of_both_halves() {
        let mut list = WaitingList::new();
        for id in 0..6 {
            list.push(patient(id, Tier::C));
        }
        let removed = list.remove_where(|p| p.id.0 % 2 == 0);
        let removed: Vec<u32> = removed.iter().map(|p| p.id.0).collect();
        assert_eq!(removed, [0, 2, 4]);
        assert_eq!(ids(&list), [1, 3, 5]);
    }

    #[test]
    fn counts_by_tier() {
        let mut list = WaitingList::new();
        list.push(patient(0, Tier::A));
        list.push(patient(1, Tier::C));
        list.push(patient(2, Tier::C));
        let counts = list.counts_by_tier();
        assert_eq!((counts[Tier::A], counts[Tier::B], counts[Tier::C]), (1, 0, 2));
        assert_eq!(list.count(Tier::C), 2);
    }
}
