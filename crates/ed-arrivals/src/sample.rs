//! Arrival-count sampling.

use ed_core::{ArrivalParams, SimRng};

/// Draw one hour's arrival count for a single patient type.
///
/// | Law            | Result                                             |
/// |----------------|----------------------------------------------------|
/// | Poisson(λ)     | non-negative integer with mean λ; λ = 0 gives 0    |
/// | Uniform(lo,hi) | integer uniform on `[lo, hi]` inclusive            |
/// | Normal(μ,σ)    | real draw rounded to nearest, never below 1        |
///
/// `params` are assumed validated (`lo <= hi`, finite, non-negative rates).
pub fn sample_count(params: &ArrivalParams, rng: &mut SimRng) -> u32 {
    match *params {
        ArrivalParams::Poisson { lambda } => rng.poisson(lambda),
        ArrivalParams::Uniform { lower, upper } => {
            if lower >= upper {
                lower
            } else {
                rng.gen_range(lower..=upper)
            }
        }
        ArrivalParams::Normal { mean, std_dev } => {
            let draw = rng.normal(mean, std_dev).round();
            // Casting saturates; the floor keeps every hour at one patient or more.
            (draw as u32).max(1)
        }
    }
}
