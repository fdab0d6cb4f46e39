//! `ed-core` — foundational types for the emergency department simulator.
//!
//! This crate is a dependency of every other `ed-*` crate.  It has no `ed-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `PatientId`, `RoomId`                                     |
//! | [`tier`]        | `Tier`, `Acuity`, `PerTier<T>`, tariff constants          |
//! | [`time`]        | `Tick`, `HourClock`                                       |
//! | [`rng`]         | `SimRng` (Poisson / normal / uniform draws)               |
//! | [`config`]      | `RoomCounts`, `ArrivalConfig`, `PolicyKind`, `SimConfig`, `ScenarioInput` |
//! | [`error`]       | `EdError`, `EdResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to read a `ScenarioInput` from JSON.              |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod tier;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    ArrivalConfig, ArrivalParams, DistributionKind, ParamValue, PolicyKind, RoomCounts,
    ScenarioInput, SimConfig, MAX_ARRIVAL_RATE, MAX_ROOMS, MAX_STAFFING_COST,
};
pub use error::{EdError, EdResult};
pub use ids::{PatientId, RoomId};
pub use rng::SimRng;
pub use tier::{Acuity, PerTier, Tier, HARM_PENALTY, LWBS_PENALTY};
pub use time::{HourClock, Tick, CYCLE_HOURS, DEFAULT_START_HOUR};
