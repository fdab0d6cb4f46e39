//! Patient creation.

use ed_core::{PatientId, Tick, Tier};
use ed_ward::Patient;

/// Hands out patients with strictly increasing IDs.
///
/// One factory lives in each run's state, so IDs restart at zero per run.
#[derive(Clone, Debug)]
pub struct PatientFactory {
    next: PatientId,
}

impl Default for PatientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientFactory {
    pub fn new() -> Self {
        Self { next: PatientId(0) }
    }

    /// Number of patients created so far.
    #[inline]
    pub fn created(&self) -> u32 {
        self.next.0
    }

    /// One new waiting patient of `tier`.
    pub fn create(&mut self, tier: Tier, arrival: Tick) -> Patient {
        let id = self.next;
        self.next = id.next();
        Patient::new(id, tier, arrival)
    }

    /// `count` new waiting patients of `tier`, all stamped `arrival`, in
    /// creation order.
    pub fn generate_arrivals(&mut self, tier: Tier, count: u32, arrival: Tick) -> Vec<Patient> {
        (0..count).map(|_| self.create(tier, arrival)).collect()
    }
}
