//! The `Sim` struct and its hour loop.

use tracing::{debug, info};

use ed_arrivals::{ArrivalSource, DistributionArrivals};
use ed_core::{PatientId, RoomId, SimConfig, Tick, Tier, CYCLE_HOURS};
use ed_policy::{AssignmentPolicy, ConfiguredPolicy};
use ed_ward::{Placement, WardError};

use crate::{HourRecord, RunSummary, SimBuilder, SimError, SimObserver, SimResult, SimulationState};

/// Sides of the attrition die.  A waiting patient who rolls the top face
/// leaves the waiting room.
pub const ATTRITION_SIDES: u32 = 20;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P, S>` owns one run's [`SimulationState`] and drives the six-step
/// hour described in the crate docs.  `P` decides placements, `S` supplies
/// arrival counts.
///
/// Create via [`SimBuilder`] or [`Sim::from_config`].
pub struct Sim<P: AssignmentPolicy, S: ArrivalSource> {
    /// Validated configuration this run was built from.
    pub config: SimConfig,

    /// Clock, rooms, waiting list, RNG and ledger.
    pub state: SimulationState,

    pub policy: P,

    pub arrivals: S,

    /// Whether the opening pass at the start label has run.
    pub(crate) opened: bool,
}

impl Sim<ConfiguredPolicy, DistributionArrivals> {
    /// A run using the configured policy and arrival distribution.
    pub fn from_config(config: SimConfig) -> SimResult<Self> {
        let policy = ConfiguredPolicy::from(config.policy);
        let arrivals = DistributionArrivals::new(config.arrivals);
        SimBuilder::new(config, policy, arrivals).build()
    }
}

impl<P: AssignmentPolicy, S: ArrivalSource> Sim<P, S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the remaining hours of the cycle and return the finalized
    /// summary.
    ///
    /// Calling `run` on a completed run returns the same summary again.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        while !self.state.clock.cycle_complete() {
            self.step_hour(observer)?;
        }
        Ok(self.state.ledger.finalize())
    }

    /// Run exactly `n` hours from the current position.
    ///
    /// Fails with [`SimError::RunComplete`] if the cycle ends first; hours
    /// stepped before that are kept.
    pub fn run_hours<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_hour(observer)?;
        }
        Ok(())
    }

    /// Advance one hour and return the metrics row it produced.
    pub fn step_hour<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<HourRecord> {
        if self.state.clock.cycle_complete() {
            return Err(SimError::RunComplete { hours: CYCLE_HOURS });
        }
        if !self.opened {
            self.open();
        }

        let now = self.state.clock.current_tick;
        let label = self.state.clock.label();
        observer.on_hour_start(now, &label);

        let record = self.process_hour(now, label);

        self.state.clock.advance();
        observer.on_hour_end(&record);

        if self.state.clock.cycle_complete() {
            let summary = self.state.ledger.finalize();
            info!(
                rooms   = %summary.rooms,
                policy  = %self.policy.kind(),
                revenue = summary.total_revenue,
                cost    = summary.total_cost,
                profit  = summary.operating_profit,
                "run complete"
            );
            observer.on_sim_end(&summary);
        }
        Ok(record)
    }

    /// Move one waiting patient into `room` on an operator's instruction.
    ///
    /// A patients may only go to A rooms, B patients to A or B rooms, C
    /// patients anywhere.  On refusal the patient stays on the waiting list
    /// in their original position.
    pub fn place_waiting(&mut self, patient: PatientId, room: RoomId) -> SimResult<Placement> {
        let state = &mut self.state;
        let waiting = state.waiting.take(patient).ok_or(WardError::NotWaiting(patient))?;
        match state.rooms.place_manually(room, waiting) {
            Ok(placement) => Ok(placement),
            Err(rejected) => {
                state.waiting.push(rejected.patient);
                Err(rejected.error.into())
            }
        }
    }

    /// `true` once the full cycle has run and the ledger is finalized.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state.clock.cycle_complete()
    }

    /// The finalized summary, once the run is complete.
    pub fn summary(&self) -> Option<&RunSummary> {
        self.state.ledger.summary()
    }

    // ── Hour processing ───────────────────────────────────────────────────

    /// Opening pass at the start label: the start hour's arrivals, then one
    /// policy run.
    fn open(&mut self) {
        self.opened = true;
        let now = self.state.clock.current_tick;
        self.admit_arrivals(now);
        self.policy.assign(&mut self.state.waiting, &mut self.state.rooms);
    }

    fn process_hour(&mut self, now: Tick, hour_label: String) -> HourRecord {
        let state = &mut self.state;

        // ── ① Discharge ───────────────────────────────────────────────────
        for patient in state.rooms.advance_treatment() {
            state.ledger.record_discharge(patient.tier);
        }

        // ── ② Attrition ───────────────────────────────────────────────────
        //
        // One roll per waiting patient, in waiting-list order.
        let rng = &mut state.rng;
        let gone = state
            .waiting
            .remove_where(|_| rng.gen_range(1..=ATTRITION_SIDES) == ATTRITION_SIDES);
        let harmed = gone.iter().filter(|p| p.tier == Tier::A).count() as u32;
        let left_without_being_seen = gone.len() as u32 - harmed;

        // ── ③ Metrics ─────────────────────────────────────────────────────
        let record = HourRecord {
            tick: now,
            hour_label,
            busy_rooms: state.rooms.busy_counts(),
            waiting_patients: state.waiting.counts_by_tier(),
            roomed_above_triage: state.rooms.roomed_above_triage(),
            left_without_being_seen,
            harmed,
        };
        state.ledger.record_hour(record.clone());

        // ── ④ Arrivals ────────────────────────────────────────────────────
        //
        // Stamped with the hour the clock is about to show.
        self.admit_arrivals(now + 1);

        // ── ⑤ Assignment ──────────────────────────────────────────────────
        let placed = self.policy.assign(&mut self.state.waiting, &mut self.state.rooms);

        debug!(
            hour    = %record.hour_label,
            busy    = record.busy_rooms.total(),
            waiting = record.waiting_patients.total(),
            lwbs    = record.left_without_being_seen,
            harmed  = record.harmed,
            placed  = placed.len(),
            "hour complete"
        );
        record
    }

    fn admit_arrivals(&mut self, tick: Tick) {
        let state = &mut self.state;
        let counts = self.arrivals.counts(tick, &mut state.rng);
        for (tier, &count) in counts.iter() {
            for patient in state.factory.generate_arrivals(tier, count, tick) {
                state.waiting.push(patient);
            }
        }
    }
}
