//! Closed selector over the four policies, chosen once per run.

use ed_core::PolicyKind;
use ed_ward::{Placement, RoomPool, WaitingList};

use crate::{AnyAvailable, AssignmentPolicy, ClosestLevel, ExactType, ThresholdFallback};

/// One of the four built-in policies, dispatched statically.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfiguredPolicy {
    ExactType,
    AnyAvailable,
    ClosestLevel,
    ThresholdFallback,
}

impl From<PolicyKind> for ConfiguredPolicy {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::ExactType         => ConfiguredPolicy::ExactType,
            PolicyKind::AnyAvailable      => ConfiguredPolicy::AnyAvailable,
            PolicyKind::ClosestLevel      => ConfiguredPolicy::ClosestLevel,
            PolicyKind::ThresholdFallback => ConfiguredPolicy::ThresholdFallback,
        }
    }
}

impl Default for ConfiguredPolicy {
    fn default() -> Self {
        PolicyKind::default().into()
    }
}

impl AssignmentPolicy for ConfiguredPolicy {
    fn kind(&self) -> PolicyKind {
        match self {
            ConfiguredPolicy::ExactType         => ExactType.kind(),
            ConfiguredPolicy::AnyAvailable      => AnyAvailable.kind(),
            ConfiguredPolicy::ClosestLevel      => ClosestLevel.kind(),
            ConfiguredPolicy::ThresholdFallback => ThresholdFallback.kind(),
        }
    }

    fn assign(&self, waiting: &mut WaitingList, rooms: &mut RoomPool) -> Vec<Placement> {
        match self {
            ConfiguredPolicy::ExactType         => ExactType.assign(waiting, rooms),
            ConfiguredPolicy::AnyAvailable      => AnyAvailable.assign(waiting, rooms),
            ConfiguredPolicy::ClosestLevel      => ClosestLevel.assign(waiting, rooms),
            ConfiguredPolicy::ThresholdFallback => ThresholdFallback.assign(waiting, rooms),
        }
    }
}
