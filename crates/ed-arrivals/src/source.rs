//! `ArrivalSource` — where each hour's arrival counts come from.
//!
//! The engine asks its source once per hour for a count per patient type.
//! Ordinary runs use [`DistributionArrivals`]; tests and replays use
//! [`NoArrivals`] or [`ScriptedArrivals`].

use std::collections::BTreeMap;

use ed_core::{ArrivalConfig, PerTier, SimRng, Tick};

use crate::sample::sample_count;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Supplies the number of new patients of each type for one hour.
///
/// # Contract
///
/// - Must be deterministic given the same `rng` state.
/// - Must not block or perform I/O.
pub trait ArrivalSource {
    fn counts(&mut self, tick: Tick, rng: &mut SimRng) -> PerTier<u32>;
}

impl<S: ArrivalSource + ?Sized> ArrivalSource for Box<S> {
    fn counts(&mut self, tick: Tick, rng: &mut SimRng) -> PerTier<u32> {
        (**self).counts(tick, rng)
    }
}

// ── DistributionArrivals ──────────────────────────────────────────────────────

/// Draws each type's count from the configured distribution, A then B then C.
#[derive(Clone, Debug)]
pub struct DistributionArrivals {
    config: ArrivalConfig,
}

impl DistributionArrivals {
    pub fn new(config: ArrivalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArrivalConfig {
        &self.config
    }
}

impl ArrivalSource for DistributionArrivals {
    fn counts(&mut self, _tick: Tick, rng: &mut SimRng) -> PerTier<u32> {
        PerTier::from_fn(|tier| sample_count(self.config.params(tier), rng))
    }
}

// ── NoArrivals ────────────────────────────────────────────────────────────────

/// Nobody ever arrives.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoArrivals;

impl ArrivalSource for NoArrivals {
    #[inline]
    fn counts(&mut self, _tick: Tick, _rng: &mut SimRng) -> PerTier<u32> {
        PerTier::new(0, 0, 0)
    }
}

// ── ScriptedArrivals ──────────────────────────────────────────────────────────

/// Fixed counts keyed by tick; ticks without an entry get no arrivals.
///
/// Never touches the RNG, so attrition rolls are the only randomness left
/// in a scripted run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedArrivals {
    script: BTreeMap<Tick, PerTier<u32>>,
}

impl ScriptedArrivals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: `a`, `b`, `c` patients arrive at `tick`.
    pub fn at(mut self, tick: Tick, a: u32, b: u32, c: u32) -> Self {
        self.insert(tick, PerTier::new(a, b, c));
        self
    }

    /// Set the counts for `tick`, replacing any earlier entry.
    pub fn insert(&mut self, tick: Tick, counts: PerTier<u32>) {
        self.script.insert(tick, counts);
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Total patients the script will create across all ticks.
    pub fn total(&self) -> u32 {
        self.script.values().map(PerTier::total).sum()
    }
}

impl ArrivalSource for ScriptedArrivals {
    fn counts(&mut self, tick: Tick, _rng: &mut SimRng) -> PerTier<u32> {
        self.script.get(&tick).copied().unwrap_or_default()
    }
}
