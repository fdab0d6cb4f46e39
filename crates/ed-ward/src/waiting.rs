//! The waiting list.

use ed_core::{PatientId, PerTier, Tier};

use crate::patient::{Location, Patient};

/// Patients not currently roomed, kept in creation order (ascending
/// `PatientId`).
///
/// Creation order is the FIFO order used by every assignment policy.
/// Inserting keeps the list sorted by ID, so a patient handed back after a
/// rejected placement returns to their original position.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitingList {
    patients: Vec<Patient>,
}

impl WaitingList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.patients.iter()
    }

    pub fn contains(&self, id: PatientId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: PatientId) -> Option<usize> {
        self.patients.binary_search_by_key(&id, |p| p.id).ok()
    }

    /// Add a patient, keeping creation order.
    pub fn push(&mut self, mut patient: Patient) {
        patient.location = Location::WaitingRoom;
        match self.patients.last() {
            Some(last) if last.id > patient.id => {
                let at = self.patients.partition_point(|p| p.id < patient.id);
                self.patients.insert(at, patient);
            }
            _ => self.patients.push(patient),
        }
    }

    /// Remove one patient by ID.
    pub fn take(&mut self, id: PatientId) -> Option<Patient> {
        self.position(id).map(|i| self.patients.remove(i))
    }

    /// Remove every patient, in creation order.  Pair with [`restore`] to
    /// run a pass over the list while mutating other state.
    ///
    /// [`restore`]: WaitingList::restore
    pub fn drain_all(&mut self) -> Vec<Patient> {
        std::mem::take(&mut self.patients)
    }

    /// Put back patients removed by [`drain_all`](WaitingList::drain_all).
    pub fn restore(&mut self, patients: Vec<Patient>) {
        for p in patients {
            self.push(p);
        }
    }

    /// Remove every patient for which `pred` returns `true`, preserving the
    /// order of both the removed and the remaining patients.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&Patient) -> bool) -> Vec<Patient> {
        let (removed, kept): (Vec<_>, Vec<_>) = self.drain_all().into_iter().partition(|p| pred(p));
        self.patients = kept;
        removed
    }

    /// Number of waiting patients per triage type.
    pub fn counts_by_tier(&self) -> PerTier<u32> {
        let mut counts = PerTier::new(0, 0, 0);
        for p in &self.patients {
            counts[p.tier] += 1;
        }
        counts
    }

    /// Number of waiting patients of `tier`.
    pub fn count(&self, tier: Tier) -> u32 {
        self.patients.iter().filter(|p| p.tier == tier).count() as u32
    }
}
