//! `ed-policy` — the four room-assignment policies.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`policy`]    | `AssignmentPolicy` trait                                     |
//! | [`pass`]      | `single_pass`, `until_fixed_point` scan helpers              |
//! | [`exact`]     | `ExactType` — same-tier rooms only                           |
//! | [`any`]       | `AnyAvailable` — full capability lattice                     |
//! | [`closest`]   | `ClosestLevel` — same tier, else the next letter up          |
//! | [`threshold`] | `ThresholdFallback` — upgrade only above spare-capacity cutoffs |
//! | [`selector`]  | `ConfiguredPolicy` — closed selector built from `PolicyKind` |
//!
//! # Ordering
//!
//! Every policy walks the waiting list in creation order and, for each
//! patient, scans rooms in Room Pool order (A1.., B1.., C1..).  No randomness
//! is involved: the same waiting list and pool always give the same
//! placements.
//!
//! # Capability lattice
//!
//! ```text
//! room tier   may treat
//! A           A, B, C
//! B           B, C
//! C           C
//! ```

pub mod any;
pub mod closest;
pub mod exact;
pub mod pass;
pub mod policy;
pub mod selector;
pub mod threshold;


pub use any::AnyAvailable;
pub use closest::ClosestLevel;
pub use exact::ExactType;
pub use pass::{single_pass, until_fixed_point};
pub use policy::AssignmentPolicy;
pub use selector::ConfiguredPolicy;
pub use threshold::{ThresholdFallback, A_FOR_B_THRESHOLD, A_FOR_C_THRESHOLD, B_FOR_C_THRESHOLD};
