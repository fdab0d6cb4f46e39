//! Batch sweep: many full runs per room configuration, averaged.
//!
//! Each repetition builds a brand-new [`Sim`] from the base configuration
//! with the tuple's room counts, so no state survives between runs.  When
//! the base configuration carries a seed, every run's seed is drawn from it
//! before any run starts; sequential and parallel execution therefore
//! produce identical rows.

use tracing::info;

use ed_core::{RoomCounts, SimConfig, SimRng};

use crate::{NoopObserver, RunSummary, Sim, SimError, SimResult};

// ── SweepRow ──────────────────────────────────────────────────────────────────

/// Averages over the repetitions of one room configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepRow {
    pub rooms:               RoomCounts,
    pub repetitions:         u32,
    pub average_utilization: f64,
    pub average_revenue:     f64,
    pub average_cost:        f64,
    pub average_profit:      f64,
}

impl SweepRow {
    /// Average the four headline aggregates of `runs`.
    pub fn from_summaries(rooms: RoomCounts, runs: &[RunSummary]) -> Self {
        let n = runs.len().max(1) as f64;
        let mean = |f: fn(&RunSummary) -> f64| runs.iter().map(f).sum::<f64>() / n;
        Self {
            rooms,
            repetitions:         runs.len() as u32,
            average_utilization: mean(|s| s.average_utilization),
            average_revenue:     mean(|s| s.total_revenue as f64),
            average_cost:        mean(|s| s.total_cost as f64),
            average_profit:      mean(|s| s.operating_profit as f64),
        }
    }
}

// ── BatchSweep ────────────────────────────────────────────────────────────────

/// Repeats full runs over a list of room configurations.
///
/// Policy, arrivals, start hour and seed come from `base`; its room counts
/// are replaced by each entry of `configurations` in turn.
#[derive(Clone, Debug)]
pub struct BatchSweep {
    pub base:           SimConfig,
    pub configurations: Vec<RoomCounts>,
    pub repetitions:    u32,
}

impl BatchSweep {
    pub fn new(base: SimConfig, configurations: Vec<RoomCounts>, repetitions: u32) -> Self {
        Self { base, configurations, repetitions }
    }

    /// Sweep every configuration within the room and staffing limits.
    pub fn all_feasible(base: SimConfig, repetitions: u32) -> Self {
        Self::new(base, RoomCounts::feasible(), repetitions)
    }

    /// Total number of runs the sweep will perform.
    pub fn run_count(&self) -> usize {
        self.configurations.len() * self.repetitions as usize
    }

    /// Run the sweep and collect one row per configuration, in input order.
    pub fn run(&self) -> SimResult<Vec<SweepRow>> {
        let mut rows = Vec::with_capacity(self.configurations.len());
        self.run_with(|row| rows.push(row.clone()))?;
        Ok(rows)
    }

    /// Run the sweep, handing each row to `on_row` as soon as its
    /// configuration finishes.
    ///
    /// Every configuration is validated before the first run; an invalid
    /// tuple refuses the whole sweep.
    pub fn run_with<F: FnMut(&SweepRow)>(&self, mut on_row: F) -> SimResult<()> {
        if self.repetitions == 0 {
            return Err(SimError::EmptySweep { what: "at least one repetition" });
        }
        if self.configurations.is_empty() {
            return Err(SimError::EmptySweep { what: "at least one room configuration" });
        }
        for rooms in &self.configurations {
            self.config_for(*rooms, None).validate()?;
        }

        let seeds = self.derive_seeds();
        for (rooms, seeds) in self.configurations.iter().zip(seeds) {
            let runs = self.run_configuration(*rooms, &seeds)?;
            let row = SweepRow::from_summaries(*rooms, &runs);
            info!(
                rooms   = %row.rooms,
                reps    = row.repetitions,
                util    = row.average_utilization,
                revenue = row.average_revenue,
                cost    = row.average_cost,
                profit  = row.average_profit,
                "configuration swept"
            );
            on_row(&row);
        }
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn config_for(&self, rooms: RoomCounts, seed: Option<u64>) -> SimConfig {
        SimConfig { rooms, seed, ..self.base.clone() }
    }

    /// One seed slot per run.  `None` everywhere when the base config is
    /// unseeded, so each run draws fresh entropy.
    fn derive_seeds(&self) -> Vec<Vec<Option<u64>>> {
        let reps = self.repetitions as usize;
        match self.base.seed {
            None => vec![vec![None; reps]; self.configurations.len()],
            Some(seed) => {
                let mut root = SimRng::new(seed);
                (0..self.configurations.len())
                    .map(|i| {
                        (0..reps)
                            .map(|j| Some(root.child_seed((i * reps + j) as u64)))
                            .collect()
                    })
                    .collect()
            }
        }
    }

    fn run_once(&self, rooms: RoomCounts, seed: Option<u64>) -> SimResult<RunSummary> {
        Sim::from_config(self.config_for(rooms, seed))?.run(&mut NoopObserver)
    }

    fn run_configuration(&self, rooms: RoomCounts, seeds: &[Option<u64>]) -> SimResult<Vec<RunSummary>> {
        #[cfg(not(feature = "parallel"))]
        {
            seeds.iter().map(|&seed| self.run_once(rooms, seed)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            seeds.par_iter().map(|&seed| self.run_once(rooms, seed)).collect()
        }
    }
}
