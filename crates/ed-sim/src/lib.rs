//! `ed-sim` — hour-advance engine, ledger, and batch sweep.
//!
//! # One simulated hour
//!
//! ```text
//! ① Discharge   — every occupant's hours_left -= 1; zero → room freed,
//!                 discharge counted for revenue.
//! ② Attrition   — every waiting patient rolls 1..=20 once; a 20 removes
//!                 them (A: harmed, B/C: left without being seen).
//! ③ Metrics     — busy rooms, waiting patients, roomed-above-triage,
//!                 LWBS and harm counts appended to the ledger.
//! ④ Arrivals    — ArrivalSource counts, A then B then C, onto the
//!                 waiting list.
//! ⑤ Assignment  — the configured AssignmentPolicy runs once.
//! ⑥ Clock       — advance one hour; after 24 the ledger is finalized.
//! ```
//!
//! Before the first hour an opening pass draws the start hour's arrivals
//! and runs the policy once, so patients seeded before the run are roomed
//! before anyone rolls for attrition.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs batch-sweep repetitions on Rayon's thread pool.     |
//! | `serde`    | Serde derives on `HourRecord`, `RunSummary`, `SweepRow`. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ed_core::{ArrivalConfig, PolicyKind, RoomCounts, SimConfig};
//! use ed_sim::{NoopObserver, Sim};
//!
//! let config = SimConfig::new(
//!     RoomCounts::new(3, 4, 4),
//!     ArrivalConfig::poisson(0.8, 1.5, 2.5),
//!     PolicyKind::ThresholdFallback,
//! )
//! .with_seed(42);
//! let summary = Sim::from_config(config)?.run(&mut NoopObserver)?;
//! println!("profit: {}", summary.operating_profit);
//! ```

pub mod builder;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod sim;
pub mod state;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use ledger::{HourRecord, Ledger, RunSummary};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, ATTRITION_SIDES};
pub use state::SimulationState;
pub use sweep::{BatchSweep, SweepRow};
