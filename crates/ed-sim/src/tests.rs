//! Unit tests for ed-sim.

#[cfg(test)]
mod helpers {
    use ed_core::{ArrivalConfig, PolicyKind, RoomCounts, SimConfig};

    pub fn config(a: u32, b: u32, c: u32, policy: PolicyKind) -> SimConfig {
        SimConfig::new(RoomCounts::new(a, b, c), ArrivalConfig::none(), policy).with_seed(7)
    }
}

#[cfg(test)]
mod recording {
    use ed_core::{HourClock, Tick};

    use crate::{HourRecord, RunSummary, SimObserver};

    /// Observer that keeps every callback for later assertions.
    #[derive(Default)]
    pub struct Recorder {
        pub starts:  Vec<(Tick, String)>,
        pub hours:   Vec<HourRecord>,
        pub summary: Option<RunSummary>,
        pub ends:    usize,
    }

    impl SimObserver for Recorder {
        fn on_hour_start(&mut self, tick: Tick, label: &str) {
            self.starts.push((tick, label.to_owned()));
        }

        fn on_hour_end(&mut self, record: &HourRecord) {
            self.hours.push(record.clone());
        }

        fn on_sim_end(&mut self, summary: &RunSummary) {
            self.summary = Some(summary.clone());
            self.ends += 1;
        }
    }

    #[test]
    fn recorder_keeps_labels() {
        let clock = HourClock::default();
        let mut r = Recorder::default();
        r.on_hour_start(Tick::ZERO, &clock.label());
        assert_eq!(r.starts[0].1, "06:00");
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use ed_core::{PolicyKind, Tick, CYCLE_HOURS};

    use super::helpers::config;
    use super::recording::Recorder;
    use crate::{NoopObserver, Sim, SimError};

    #[test]
    fn run_takes_exactly_24_transitions_and_returns_to_start() {
        let mut sim = Sim::from_config(config(1, 1, 1, PolicyKind::ThresholdFallback)).unwrap();
        let mut rec = Recorder::default();
        let summary = sim.run(&mut rec).unwrap();

        assert_eq!(rec.hours.len(), CYCLE_HOURS as usize);
        assert_eq!(summary.hours, 24);
        assert_eq!(sim.state.clock.current_tick, Tick(24));
        assert_eq!(sim.state.clock.label(), sim.state.clock.start_label());
        assert_eq!(sim.state.clock.label(), "06:00");
        assert!(sim.is_complete());
        assert_eq!(rec.ends, 1);
        assert_eq!(rec.summary.as_ref(), Some(&summary));
    }

    #[test]
    fn hour_labels_walk_the_day() {
        let mut sim = Sim::from_config(config(1, 0, 0, PolicyKind::ExactType)).unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        let labels: Vec<&str> = rec.hours.iter().map(|h| h.hour_label.as_str()).collect();
        assert_eq!(labels[0], "06:00");
        assert_eq!(labels[17], "23:00");
        assert_eq!(labels[18], "00:00");
        assert_eq!(labels[23], "05:00");
        assert_eq!(rec.starts.len(), 24);
    }

    #[test]
    fn custom_start_hour() {
        let mut cfg = config(1, 0, 0, PolicyKind::ExactType);
        cfg.start_hour = 22;
        let mut sim = Sim::from_config(cfg).unwrap();
        let rec = sim.step_hour(&mut NoopObserver).unwrap();
        assert_eq!(rec.hour_label, "22:00");
        let rec = sim.step_hour(&mut NoopObserver).unwrap();
        assert_eq!(rec.hour_label, "23:00");
        let rec = sim.step_hour(&mut NoopObserver).unwrap();
        assert_eq!(rec.hour_label, "00:00");
    }

    #[test]
    fn stepping_past_the_cycle_fails() {
        let mut sim = Sim::from_config(config(1, 0, 0, PolicyKind::ExactType)).unwrap();
        sim.run_hours(24, &mut NoopObserver).unwrap();
        assert!(sim.summary().is_some());
        let err = sim.step_hour(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::RunComplete { hours: 24 }));
    }

    #[test]
    fn run_hours_stops_with_error_at_cycle_end() {
        let mut sim = Sim::from_config(config(1, 0, 0, PolicyKind::ExactType)).unwrap();
        sim.run_hours(20, &mut NoopObserver).unwrap();
        assert!(!sim.is_complete());
        assert!(sim.summary().is_none());
        assert!(sim.run_hours(10, &mut NoopObserver).is_err());
        assert!(sim.is_complete());
        assert_eq!(sim.state.ledger.rows().len(), 24);
    }

    #[test]
    fn run_after_completion_returns_same_summary() {
        let mut sim = Sim::from_config(config(0, 1, 1, PolicyKind::AnyAvailable)).unwrap();
        let first = sim.run(&mut NoopObserver).unwrap();
        let second = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_configuration_builds_nothing() {
        let err = Sim::from_config(config(17, 0, 0, PolicyKind::ExactType)).err().unwrap();
        assert!(matches!(err, SimError::Config(ed_core::EdError::TooManyRooms { .. })));
        let err = Sim::from_config(config(10, 0, 2, PolicyKind::ExactType)).err().unwrap();
        assert!(matches!(
            err,
            SimError::Config(ed_core::EdError::StaffingCostExceeded { cost: 42_200, limit: 42_000 })
        ));
        // Exactly at the limit is allowed.
        assert!(Sim::from_config(config(10, 1, 0, PolicyKind::ExactType)).is_ok());
    }
}

// ── Reference scenarios ───────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use ed_arrivals::NoArrivals;
    use ed_core::{PerTier, PolicyKind, Tier};
    use ed_policy::{ConfiguredPolicy, ExactType};

    use super::helpers::config;
    use super::recording::Recorder;
    use crate::{NoopObserver, Sim, SimBuilder};

    #[test]
    fn scenario_a_idle_single_a_room() {
        for kind in PolicyKind::ALL {
            let mut sim = Sim::from_config(config(1, 0, 0, kind)).unwrap();
            let s = sim.run(&mut NoopObserver).unwrap();
            assert_eq!(sim.state.factory.created(), 0);
            assert_eq!(s.patients_served(), 0);
            assert_eq!(s.utilization_by_type, PerTier::new(0.0, 0.0, 0.0));
            assert_eq!(s.average_utilization, 0.0);
            assert_eq!(s.total_revenue, 0);
            assert_eq!(s.staffing_cost(), 3900);
            assert_eq!(s.total_cost, 3900);
            assert_eq!(s.operating_profit, -3900);
        }
    }

    #[test]
    fn scenario_b_single_c_patient() {
        let mut sim = SimBuilder::new(config(0, 0, 1, PolicyKind::ExactType), ExactType, NoArrivals)
            .preseed_with_hours(Tier::C, 2)
            .build()
            .unwrap();
        let mut rec = Recorder::default();

        // First hour: patient is already in C1 and still being treated.
        let first = sim.step_hour(&mut rec).unwrap();
        assert_eq!(first.busy_rooms, PerTier::new(0, 0, 1));
        assert_eq!(first.waiting_patients, PerTier::new(0, 0, 0));

        // Second hour: discharged, room free.
        let second = sim.step_hour(&mut rec).unwrap();
        assert_eq!(second.busy_rooms, PerTier::new(0, 0, 0));
        assert!(sim.state.rooms.rooms().iter().all(|r| !r.is_occupied()));

        let s = sim.run(&mut rec).unwrap();
        assert_eq!(s.patients_served_by_type, PerTier::new(0, 0, 1));
        assert_eq!(s.total_revenue, 250);
        assert_eq!(s.staffing_cost(), 1600);
        assert_eq!(s.waiting_cost(), 0);
        assert_eq!(s.attrition_cost(), 0);
        assert_eq!(s.operating_profit, -1350);
        assert_eq!(s.total_room_hours_by_type.c, 1);
        assert!((s.utilization_by_type.c - 1.0 / 24.0).abs() < 1e-12);
    }

    #[test]
    fn scenario_c_threshold_upgrade_inside_engine() {
        // Fill both B rooms and both C rooms with long-stay patients, then
        // let one C patient arrive: it must land in an A room.
        let cfg = config(2, 2, 2, PolicyKind::ThresholdFallback);
        let mut sim = SimBuilder::new(cfg, ConfiguredPolicy::ThresholdFallback, NoArrivals)
            .preseed_with_hours(Tier::B, 50)
            .preseed_with_hours(Tier::B, 50)
            .preseed_with_hours(Tier::C, 50)
            .preseed_with_hours(Tier::C, 50)
            .preseed_with_hours(Tier::C, 50)
            .build()
            .unwrap();
        sim.step_hour(&mut NoopObserver).unwrap();

        let a1 = sim.state.rooms.get("A1".parse().unwrap()).unwrap();
        assert_eq!(a1.occupant().map(|p| p.tier), Some(Tier::C));
        assert_eq!(sim.state.rooms.roomed_above_triage(), 1);
        assert!(sim.state.waiting.is_empty());
    }
}

// ── Hour mechanics ────────────────────────────────────────────────────────────

#[cfg(test)]
mod mechanics {
    use ed_arrivals::{NoArrivals, ScriptedArrivals};
    use ed_core::{PatientId, PerTier, PolicyKind, Tick, Tier};
    use ed_policy::{ConfiguredPolicy, ExactType};

    use super::helpers::config;
    use super::recording::Recorder;
    use crate::{NoopObserver, SimBuilder, SimError};

    #[test]
    fn scripted_arrivals_are_stamped_with_the_hour_they_join() {
        // No A rooms: A patients stay waiting, so they can be inspected.
        let script = ScriptedArrivals::new().at(Tick(0), 1, 0, 0).at(Tick(3), 2, 0, 0);
        let mut sim = SimBuilder::new(config(0, 0, 1, PolicyKind::ExactType), ExactType, script)
            .build()
            .unwrap();

        // Opening pass delivers tick 0's patient before hour 0 is processed.
        sim.run_hours(2, &mut NoopObserver).unwrap();
        assert_eq!(sim.state.factory.created(), 1);

        // Hour 2 draws the arrivals for tick 3.
        sim.run_hours(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.state.factory.created(), 3);
        let stamps: Vec<Tick> = sim.state.waiting.iter().map(|p| p.arrival).collect();
        assert!(stamps.iter().all(|&t| t == Tick(0) || t == Tick(3)));
        assert!(stamps.iter().filter(|&&t| t == Tick(3)).count() == 2);
    }

    #[test]
    fn opening_pass_rooms_preseeded_patients_before_attrition() {
        // With every A patient roomed at the opening, no waiting patient ever
        // rolls, so nobody can be harmed.
        let mut sim = SimBuilder::new(config(3, 0, 0, PolicyKind::ExactType), ExactType, NoArrivals)
            .preseed(Tier::A)
            .preseed(Tier::A)
            .preseed(Tier::A)
            .build()
            .unwrap();
        let s = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(s.total_harmed, 0);
        assert_eq!(s.patients_served_by_type.a, 3);
        assert_eq!(s.total_room_hours_by_type.a, 3 * 4 - 3);
    }

    #[test]
    fn discharge_precedes_metrics() {
        // A C patient with one hour left is discharged in hour 0 and never
        // counted as busy.
        let mut sim = SimBuilder::new(config(0, 0, 1, PolicyKind::ExactType), ExactType, NoArrivals)
            .preseed_with_hours(Tier::C, 1)
            .build()
            .unwrap();
        let rec = sim.step_hour(&mut NoopObserver).unwrap();
        assert_eq!(rec.busy_rooms, PerTier::new(0, 0, 0));
        assert_eq!(sim.state.ledger.discharged().c, 1);
    }

    #[test]
    fn attrition_removes_about_one_in_twenty() {
        // 400 A patients and no rooms: every waiting patient rolls every hour.
        let script = ScriptedArrivals::new().at(Tick(0), 400, 0, 400);
        let mut sim = SimBuilder::new(config(0, 0, 0, PolicyKind::ExactType), ExactType, script)
            .build()
            .unwrap();
        let rec = sim.step_hour(&mut NoopObserver).unwrap();

        let gone = rec.harmed + rec.left_without_being_seen;
        assert!((5..=45).contains(&rec.harmed), "harmed {}", rec.harmed);
        assert!((5..=45).contains(&rec.left_without_being_seen));
        assert_eq!(rec.waiting_patients.total() + gone, 800);
        assert_eq!(rec.waiting_patients.a + rec.harmed, 400);
    }

    #[test]
    fn harmed_and_lwbs_feed_the_ledger() {
        let script = ScriptedArrivals::new().at(Tick(0), 200, 200, 200);
        let mut sim = SimBuilder::new(config(0, 0, 0, PolicyKind::ExactType), ExactType, script)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let s = sim.run(&mut rec).unwrap();

        let harmed: u32 = rec.hours.iter().map(|h| h.harmed).sum();
        let lwbs: u32 = rec.hours.iter().map(|h| h.left_without_being_seen).sum();
        assert!(harmed > 0 && lwbs > 0);
        assert_eq!(s.total_harmed, harmed);
        assert_eq!(s.total_lwbs, lwbs);
        assert_eq!(s.harm_cost, i64::from(harmed) * 10_000);
        assert_eq!(s.lwbs_cost, i64::from(lwbs) * 200);
        // Waiting cost counts every waiting patient-hour from step ③.
        let waited: PerTier<u64> = s.waiting_hours_by_type;
        assert_eq!(s.waiting_cost_by_type.a, waited.a as i64 * 250);
        assert_eq!(s.waiting_cost_by_type.b, waited.b as i64 * 100);
        assert_eq!(s.waiting_cost_by_type.c, waited.c as i64 * 25);
    }

    #[test]
    fn roomed_above_triage_is_recorded() {
        let script = ScriptedArrivals::new().at(Tick(0), 0, 0, 1);
        let mut sim = SimBuilder::new(
            config(1, 0, 0, PolicyKind::AnyAvailable),
            ConfiguredPolicy::AnyAvailable,
            script,
        )
        .build()
        .unwrap();
        let rec = sim.step_hour(&mut NoopObserver).unwrap();
        assert_eq!(rec.busy_rooms.a, 1);
        assert_eq!(rec.roomed_above_triage, 1);
    }

    #[test]
    fn manual_placement_follows_lattice_and_keeps_refused_patients() {
        let mut sim = SimBuilder::new(config(1, 1, 1, PolicyKind::ExactType), ExactType, NoArrivals)
            .build()
            .unwrap();
        // Patients created directly, bypassing the opening pass.
        for tier in [Tier::A, Tier::B, Tier::C] {
            let p = sim.state.factory.create(tier, Tick::ZERO);
            sim.state.waiting.push(p);
        }

        let err = sim.place_waiting(PatientId(0), "B1".parse().unwrap()).unwrap_err();
        assert!(matches!(err, SimError::Ward(ed_ward::WardError::Ineligible { .. })));
        assert!(sim.state.waiting.contains(PatientId(0)));

        let err = sim.place_waiting(PatientId(1), "C1".parse().unwrap()).unwrap_err();
        assert!(matches!(err, SimError::Ward(_)));

        let placed = sim.place_waiting(PatientId(1), "A1".parse().unwrap()).unwrap();
        assert!(placed.is_upgrade());
        let err = sim.place_waiting(PatientId(0), "A1".parse().unwrap()).unwrap_err();
        assert!(matches!(err, SimError::Ward(ed_ward::WardError::RoomOccupied(_))));

        sim.place_waiting(PatientId(2), "B1".parse().unwrap()).unwrap();
        let err = sim.place_waiting(PatientId(2), "C1".parse().unwrap()).unwrap_err();
        assert!(matches!(err, SimError::Ward(ed_ward::WardError::NotWaiting(_))));

        let order: Vec<u32> = sim.state.waiting.iter().map(|p| p.id.0).collect();
        assert_eq!(order, [0]);
    }

    #[test]
    fn same_seed_same_run() {
        let mut cfg = config(3, 3, 3, PolicyKind::ThresholdFallback);
        cfg.arrivals = ed_core::ArrivalConfig::poisson(1.0, 2.0, 3.0);
        let a = crate::Sim::from_config(cfg.clone()).unwrap().run(&mut NoopObserver).unwrap();
        let b = crate::Sim::from_config(cfg).unwrap().run(&mut NoopObserver).unwrap();
        assert_eq!(a, b);
    }
}

// ── Ledger ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ledger {
    use ed_core::{ArrivalConfig, PerTier, PolicyKind, RoomCounts, SimConfig, Tick};

    use crate::{HourRecord, Ledger, NoopObserver, Sim};

    fn row(busy: (u32, u32, u32), waiting: (u32, u32, u32), lwbs: u32, harmed: u32) -> HourRecord {
        HourRecord {
            tick: Tick::ZERO,
            hour_label: "06:00".to_owned(),
            busy_rooms: PerTier::new(busy.0, busy.1, busy.2),
            waiting_patients: PerTier::new(waiting.0, waiting.1, waiting.2),
            roomed_above_triage: 0,
            left_without_being_seen: lwbs,
            harmed,
        }
    }

    #[test]
    fn derived_figures() {
        let mut ledger = Ledger::new(RoomCounts::new(2, 1, 0));
        for _ in 0..12 {
            ledger.record_hour(row((2, 1, 0), (1, 0, 4), 0, 0));
        }
        for _ in 0..12 {
            ledger.record_hour(row((1, 0, 0), (0, 2, 0), 1, 0));
        }
        ledger.record_hour(row((0, 0, 0), (0, 0, 0), 0, 1));
        ledger.record_discharge(ed_core::Tier::A);
        ledger.record_discharge(ed_core::Tier::B);
        ledger.record_discharge(ed_core::Tier::B);

        let s = ledger.finalize();
        assert_eq!(s.hours, 25);
        assert_eq!(s.total_room_hours_by_type, PerTier::new(36, 12, 0));
        assert!((s.utilization_by_type.a - 36.0 / 50.0).abs() < 1e-12);
        assert!((s.utilization_by_type.b - 12.0 / 25.0).abs() < 1e-12);
        assert_eq!(s.utilization_by_type.c, 0.0);
        let avg = (36.0 / 50.0 + 12.0 / 25.0) / 3.0;
        assert!((s.average_utilization - avg).abs() < 1e-12);

        assert_eq!(s.revenue_by_type, PerTier::new(1000, 1200, 0));
        assert_eq!(s.total_revenue, 2200);
        assert_eq!(s.waiting_hours_by_type, PerTier::new(12, 24, 48));
        assert_eq!(s.waiting_cost_by_type, PerTier::new(3000, 2400, 1200));
        assert_eq!(s.lwbs_cost, 12 * 200);
        assert_eq!(s.harm_cost, 10_000);
        assert_eq!(s.staffing_cost_by_type, PerTier::new(7800, 3000, 0));
        assert_eq!(s.total_cost, 6600 + 2400 + 10_000 + 10_800);
        assert_eq!(s.operating_profit, 2200 - s.total_cost);
    }

    #[test]
    fn finalize_is_frozen() {
        let mut ledger = Ledger::new(RoomCounts::new(1, 0, 0));
        ledger.record_hour(row((1, 0, 0), (0, 0, 0), 0, 0));
        let first = ledger.finalize();
        ledger.record_discharge(ed_core::Tier::A);
        assert_eq!(ledger.finalize(), first);
        assert!(ledger.is_finalized());
    }

    #[test]
    fn identities_hold_for_random_runs() {
        for seed in 0..20 {
            let config = SimConfig::new(
                RoomCounts::new(2, 3, 4),
                ArrivalConfig::poisson(0.7, 1.4, 2.2),
                PolicyKind::ALL[seed as usize % 4],
            )
            .with_seed(seed);
            let s = Sim::from_config(config).unwrap().run(&mut NoopObserver).unwrap();
            assert_eq!(
                s.total_cost,
                s.waiting_cost() + s.lwbs_cost + s.harm_cost + s.staffing_cost()
            );
            assert_eq!(s.operating_profit, s.total_revenue - s.total_cost);
            assert_eq!(s.total_revenue, s.revenue_by_type.total());
            for (_, &u) in s.utilization_by_type.iter() {
                assert!((0.0..=1.0).contains(&u));
            }
        }
    }
}

// ── Capacity invariant over whole runs ────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use std::collections::BTreeSet;

    use ed_core::{ArrivalConfig, PatientId, PolicyKind, RoomCounts, SimConfig};

    use crate::{NoopObserver, Sim};

    #[test]
    fn no_patient_is_ever_in_two_places() {
        for kind in PolicyKind::ALL {
            let config = SimConfig::new(
                RoomCounts::new(2, 2, 2),
                ArrivalConfig::uniform((0, 2), (0, 3), (1, 4)),
                kind,
            )
            .with_seed(11);
            let mut sim = Sim::from_config(config).unwrap();
            while !sim.is_complete() {
                sim.step_hour(&mut NoopObserver).unwrap();

                let roomed: Vec<PatientId> = sim.state.rooms.occupants().map(|p| p.id).collect();
                let unique: BTreeSet<PatientId> = roomed.iter().copied().collect();
                assert_eq!(unique.len(), roomed.len());
                for room in sim.state.rooms.rooms() {
                    if let Some(p) = room.occupant() {
                        assert_eq!(p.room(), Some(room.id()));
                    }
                }
                for p in sim.state.waiting.iter() {
                    assert!(p.is_waiting());
                    assert!(!unique.contains(&p.id));
                }
            }
        }
    }
}

// ── Batch sweep ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep {
    use ed_core::{ArrivalConfig, EdError, PolicyKind, RoomCounts, SimConfig};

    use crate::{BatchSweep, SimError, SweepRow};

    fn base() -> SimConfig {
        SimConfig::new(
            RoomCounts::new(1, 1, 1),
            ArrivalConfig::poisson(0.5, 1.0, 1.5),
            PolicyKind::ThresholdFallback,
        )
        .with_seed(2024)
    }

    #[test]
    fn one_row_per_configuration_in_order() {
        let configs = vec![RoomCounts::new(1, 0, 0), RoomCounts::new(2, 2, 2), RoomCounts::new(0, 0, 3)];
        let rows = BatchSweep::new(base(), configs.clone(), 3).run().unwrap();
        assert_eq!(rows.len(), 3);
        for (row, rooms) in rows.iter().zip(&configs) {
            assert_eq!(row.rooms, *rooms);
            assert_eq!(row.repetitions, 3);
        }
    }

    #[test]
    fn seeded_sweeps_are_reproducible() {
        let configs = vec![RoomCounts::new(2, 3, 4), RoomCounts::new(4, 4, 4)];
        let a = BatchSweep::new(base(), configs.clone(), 4).run().unwrap();
        let b = BatchSweep::new(base(), configs, 4).run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn idle_configuration_averages_to_staffing_cost() {
        let mut cfg = base();
        cfg.arrivals = ArrivalConfig::none();
        let rows = BatchSweep::new(cfg, vec![RoomCounts::new(1, 0, 0)], 5).run().unwrap();
        assert_eq!(rows[0].average_profit, -3900.0);
        assert_eq!(rows[0].average_cost, 3900.0);
        assert_eq!(rows[0].average_revenue, 0.0);
        assert_eq!(rows[0].average_utilization, 0.0);
    }

    #[test]
    fn streams_rows_through_callback() {
        let mut seen = Vec::new();
        BatchSweep::new(base(), vec![RoomCounts::new(1, 1, 0), RoomCounts::new(0, 1, 1)], 2)
            .run_with(|row: &SweepRow| seen.push(row.rooms))
            .unwrap();
        assert_eq!(seen, [RoomCounts::new(1, 1, 0), RoomCounts::new(0, 1, 1)]);
    }

    #[test]
    fn invalid_tuple_refuses_whole_sweep() {
        let mut calls = 0;
        let err = BatchSweep::new(base(), vec![RoomCounts::new(1, 1, 1), RoomCounts::new(11, 0, 0)], 2)
            .run_with(|_| calls += 1)
            .unwrap_err();
        assert!(matches!(err, SimError::Config(EdError::StaffingCostExceeded { .. })));
        assert_eq!(calls, 0);
    }

    #[test]
    fn empty_sweeps_are_refused() {
        assert!(matches!(
            BatchSweep::new(base(), vec![], 3).run(),
            Err(SimError::EmptySweep { .. })
        ));
        assert!(matches!(
            BatchSweep::new(base(), vec![RoomCounts::new(1, 0, 0)], 0).run(),
            Err(SimError::EmptySweep { .. })
        ));
    }

    #[test]
    fn all_feasible_covers_the_limits() {
        let sweep = BatchSweep::all_feasible(base(), 1);
        assert!(sweep.configurations.iter().all(|r| r.validate().is_ok()));
        assert!(sweep.configurations.contains(&RoomCounts::new(0, 0, 16)));
        assert_eq!(sweep.run_count(), sweep.configurations.len());
    }

    #[test]
    fn row_averages_summaries() {
        let rows = BatchSweep::new(base(), vec![RoomCounts::new(2, 2, 2)], 3).run().unwrap();
        let row = &rows[0];
        assert!(row.average_cost >= 2.0 * (3900.0 + 3000.0 + 1600.0));
        assert!((row.average_profit - (row.average_revenue - row.average_cost)).abs() < 1e-6);
    }
}
