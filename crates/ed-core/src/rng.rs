//! Simulation-level RNG wrapper.
//!
//! Every run owns exactly one `SimRng`; arrival counts and attrition rolls
//! both draw from it in the engine's fixed step order, so a seeded run is
//! fully reproducible.  Batch sweeps give each run its own `SimRng`, either
//! from fresh OS entropy or from a child seed derived up front, so runs share
//! no RNG state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Largest λ handed to the multiplication sampler in one piece.  Larger
/// rates are split into equal chunks and summed (Poisson laws are additive),
/// which keeps `exp(-λ)` far from underflow.
const POISSON_CHUNK: f64 = 30.0;

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.  For parallel randomness, give
/// each worker its own `SimRng` built from [`child_seed`](Self::child_seed).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy: every call yields an independent stream.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// `Some(seed)` → reproducible stream, `None` → fresh entropy.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// Derive a seed for a child stream from this one's stream and `offset`.
    pub fn child_seed(&mut self, offset: u64) -> u64 {
        self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT)
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Draw from a Poisson law with mean `lambda`.
    ///
    /// Knuth's multiplication method.  `lambda <= 0` (or non-finite) always
    /// yields 0.
    pub fn poisson(&mut self, lambda: f64) -> u32 {
        if !lambda.is_finite() || lambda <= 0.0 {
            return 0;
        }
        let chunks = (lambda / POISSON_CHUNK).ceil().max(1.0);
        let part = lambda / chunks;
        (0..chunks as u32).map(|_| self.poisson_small(part)).sum()
    }

    fn poisson_small(&mut self, lambda: f64) -> u32 {
        let limit = (-lambda).exp();
        let mut k = 0u32;
        let mut p = 1.0;
        loop {
            p *= self.next_f64();
            if p <= limit {
                return k;
            }
            k += 1;
        }
    }

    /// Standard normal draw (Box–Muller).
    pub fn standard_normal(&mut self) -> f64 {
        // 1 - U lies in (0, 1], keeping ln() finite.
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Normal draw with the given mean and standard deviation.
    #[inline]
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.standard_normal()
    }
}
