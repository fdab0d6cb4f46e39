//! Fluent builder for constructing a [`Sim`].

use ed_arrivals::ArrivalSource;
use ed_core::{HourClock, SimConfig, SimRng, Tick, Tier};
use ed_policy::AssignmentPolicy;
use ed_ward::RoomPool;

use crate::{Sim, SimResult, SimulationState};

/// Fluent builder for [`Sim<P, S>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — room counts, seed, start hour, …
/// - `P: AssignmentPolicy` — usually [`ed_policy::ConfiguredPolicy`]
/// - `S: ArrivalSource` — usually [`ed_arrivals::DistributionArrivals`]
///
/// # Optional inputs (have defaults)
///
/// | Method                        | Default                              |
/// |-------------------------------|--------------------------------------|
/// | `.preseed(tier)`              | Empty waiting room                   |
/// | `.preseed_with_hours(tier, h)`| Empty waiting room                   |
/// | `.rng(rng)`                   | `SimRng::from_seed_option(config.seed)` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, ExactType, NoArrivals)
///     .preseed(Tier::C)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: AssignmentPolicy, S: ArrivalSource> {
    config:   SimConfig,
    policy:   P,
    arrivals: S,
    preseed:  Vec<(Tier, Option<u32>)>,
    rng:      Option<SimRng>,
}

impl<P: AssignmentPolicy, S: ArrivalSource> SimBuilder<P, S> {
    pub fn new(config: SimConfig, policy: P, arrivals: S) -> Self {
        Self {
            config,
            policy,
            arrivals,
            preseed: Vec::new(),
            rng:     None,
        }
    }

    /// Put one patient of `tier` in the waiting room before the run opens.
    pub fn preseed(mut self, tier: Tier) -> Self {
        self.preseed.push((tier, None));
        self
    }

    /// Like [`preseed`](Self::preseed) with a custom remaining treatment
    /// duration.
    pub fn preseed_with_hours(mut self, tier: Tier, hours_left: u32) -> Self {
        self.preseed.push((tier, Some(hours_left)));
        self
    }

    /// Use `rng` instead of seeding from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration, build the Room Pool and waiting room, and
    /// return a ready-to-run [`Sim`].
    ///
    /// Nothing is built if validation fails.
    pub fn build(self) -> SimResult<Sim<P, S>> {
        self.config.validate()?;
        let rooms = RoomPool::generate(self.config.rooms)?;
        let rng = self
            .rng
            .unwrap_or_else(|| SimRng::from_seed_option(self.config.seed));

        let mut state = SimulationState::new(HourClock::new(self.config.start_hour), rooms, rng);
        for (tier, hours) in self.preseed {
            let mut patient = state.factory.create(tier, Tick::ZERO);
            if let Some(h) = hours {
                patient = patient.with_hours_left(h);
            }
            state.waiting.push(patient);
        }

        Ok(Sim {
            config:   self.config,
            state,
            policy:   self.policy,
            arrivals: self.arrivals,
            opened:   false,
        })
    }
}
