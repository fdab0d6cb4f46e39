//! `ed-arrivals` — how many patients arrive each hour, and who they are.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`sample`]   | `sample_count` (Poisson / Uniform / Normal draws)          |
//! | [`factory`]  | `PatientFactory` (creation-ordered patient IDs)            |
//! | [`source`]   | `ArrivalSource` trait, `DistributionArrivals`, `NoArrivals`, `ScriptedArrivals` |
//! | [`loader`]   | `load_script_csv`, `load_script_reader`                    |
//! | [`error`]    | `ArrivalError`, `ArrivalResult<T>`                         |
//!
//! # Per-hour flow
//!
//! ```text
//! counts   = source.counts(tick, rng)          // PerTier<u32>, drawn A, B, C
//! patients = factory.generate_arrivals(tier, counts[tier], tick)
//! ```
//!
//! The engine appends the patients to the waiting list in that order, so
//! patient IDs double as the FIFO tie-break.

pub mod error;
pub mod factory;
pub mod loader;
pub mod sample;
pub mod source;


pub use error::{ArrivalError, ArrivalResult};
pub use factory::PatientFactory;
pub use loader::{load_script_csv, load_script_reader};
pub use sample::sample_count;
pub use source::{ArrivalSource, DistributionArrivals, NoArrivals, ScriptedArrivals};
