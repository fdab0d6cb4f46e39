//! `ed-ward` — patients, rooms, and the waiting list.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`patient`]   | `Patient`, `Location`                                      |
//! | [`room`]      | `Room`, `RoomPool`, `Placement`, `Rejected`                |
//! | [`waiting`]   | `WaitingList` (creation-ordered queue)                     |
//! | [`error`]     | `WardError`, `WardResult<T>`                               |
//!
//! # Ownership model
//!
//! A `Patient` value lives in exactly one place: the `WaitingList` or the
//! `occupant` slot of one `Room`.  Moving a patient into a room moves the
//! value, so a room can never hold two patients and a patient can never be
//! both waiting and roomed.

pub mod error;
pub mod patient;
pub mod room;
pub mod waiting;

#[cfg(test)]
mod tests;

pub use error::{WardError, WardResult};
pub use patient::{Location, Patient};
pub use room::{Placement, Rejected, Room, RoomPool};
pub use waiting::WaitingList;
