//! Run configuration and its validation.
//!
//! Two layers:
//!
//! - [`ScenarioInput`] mirrors what an external UI or CLI hands over: room
//!   counts, a distribution label, string-keyed parameters per patient type,
//!   and a policy label.  Values may be numbers or text.
//! - [`SimConfig`] is the typed, validated form the engine consumes.
//!   [`ScenarioInput::resolve`] converts one into the other and refuses
//!   anything invalid before a single simulation object exists.
//!
//! # Limits
//!
//! | Constraint                     | Limit              |
//! |--------------------------------|--------------------|
//! | `a + b + c`                    | [`MAX_ROOMS`]      |
//! | `3900a + 3000b + 1600c`        | [`MAX_STAFFING_COST`] |
//! | arrival rate, mean, bound      | [`MAX_ARRIVAL_RATE`] per type per hour |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{EdError, EdResult, PerTier, Tier, DEFAULT_START_HOUR};

/// Maximum number of treatment rooms in one configuration.
pub const MAX_ROOMS: u32 = 16;

/// Maximum total daily staffing cost of one configuration.
pub const MAX_STAFFING_COST: i64 = 42_000;

/// Largest expected hourly arrival count accepted for one patient type.
///
/// Applies to the Poisson rate, the uniform upper bound, and the normal mean
/// and standard deviation.
pub const MAX_ARRIVAL_RATE: f64 = 10_000.0;

// ── RoomCounts ────────────────────────────────────────────────────────────────

/// Number of rooms of each tier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomCounts {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl RoomCounts {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn of(&self, tier: Tier) -> u32 {
        match tier {
            Tier::A => self.a,
            Tier::B => self.b,
            Tier::C => self.c,
        }
    }

    pub fn per_tier(&self) -> PerTier<u32> {
        PerTier::new(self.a, self.b, self.c)
    }

    pub fn total_rooms(&self) -> u32 {
        self.a + self.b + self.c
    }

    /// Total daily staffing cost of these rooms.
    pub fn staffing_cost(&self) -> i64 {
        Tier::ALL
            .iter()
            .map(|&t| self.of(t) as i64 * t.room_cost_per_day())
            .sum()
    }

    /// Check the room-count and staffing-cost limits.
    pub fn validate(&self) -> EdResult<()> {
        let total = self.total_rooms();
        if total > MAX_ROOMS {
            return Err(EdError::TooManyRooms { total, limit: MAX_ROOMS });
        }
        let cost = self.staffing_cost();
        if cost > MAX_STAFFING_COST {
            return Err(EdError::StaffingCostExceeded { cost, limit: MAX_STAFFING_COST });
        }
        Ok(())
    }

    /// Every configuration with at least one room that passes
    /// [`validate`](Self::validate), ordered by `(a, b, c)`.
    pub fn feasible() -> Vec<RoomCounts> {
        let max_of = |t: Tier| (MAX_STAFFING_COST / t.room_cost_per_day()) as u32;
        let mut out = Vec::new();
        for a in 0..=max_of(Tier::A).min(MAX_ROOMS) {
            for b in 0..=max_of(Tier::B).min(MAX_ROOMS - a) {
                for c in 0..=max_of(Tier::C).min(MAX_ROOMS - a - b) {
                    let counts = RoomCounts::new(a, b, c);
                    if counts.total_rooms() > 0 && counts.validate().is_ok() {
                        out.push(counts);
                    }
                }
            }
        }
        out
    }
}

impl fmt::Display for RoomCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.a, self.b, self.c)
    }
}

impl FromStr for RoomCounts {
    type Err = EdError;

    /// Parse `"a,b,c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().trim_matches(['(', ')']).split(',').collect();
        let [a, b, c] = parts.as_slice() else {
            return Err(EdError::Config(format!("expected \"a,b,c\", got {s:?}")));
        };
        let parse = |p: &str| {
            p.trim()
                .parse::<u32>()
                .map_err(|_| EdError::Config(format!("invalid room count {p:?} in {s:?}")))
        };
        Ok(RoomCounts::new(parse(a)?, parse(b)?, parse(c)?))
    }
}

// ── Distributions ─────────────────────────────────────────────────────────────

/// Which family of arrival-count distribution a run uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistributionKind {
    Poisson,
    Uniform,
    Normal,
}

impl DistributionKind {
    /// Parameter keys expected for this family, in entry order.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            DistributionKind::Poisson => &["lambda"],
            DistributionKind::Uniform => &["lower_bound", "upper_bound"],
            DistributionKind::Normal  => &["mean", "std_dev"],
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DistributionKind::Poisson => "Poisson",
            DistributionKind::Uniform => "Uniform",
            DistributionKind::Normal  => "Normal",
        })
    }
}

impl FromStr for DistributionKind {
    type Err = EdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "poisson" => Ok(DistributionKind::Poisson),
            "uniform" => Ok(DistributionKind::Uniform),
            "normal"  => Ok(DistributionKind::Normal),
            _ => Err(EdError::UnknownDistribution(s.to_owned())),
        }
    }
}

/// A raw distribution parameter as supplied by the outside world.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Numeric value, parsing text if necessary.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(s)   => s.trim().parse::<f64>().ok(),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_owned())
    }
}

/// Validated arrival-count parameters for one patient type.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrivalParams {
    /// Non-negative integer with mean `lambda`.
    Poisson { lambda: f64 },
    /// Integer uniformly drawn from `[lower, upper]`.
    Uniform { lower: u32, upper: u32 },
    /// Rounded normal draw, floored at 1.
    Normal { mean: f64, std_dev: f64 },
}

impl ArrivalParams {
    pub fn kind(&self) -> DistributionKind {
        match self {
            ArrivalParams::Poisson { .. } => DistributionKind::Poisson,
            ArrivalParams::Uniform { .. } => DistributionKind::Uniform,
            ArrivalParams::Normal { .. }  => DistributionKind::Normal,
        }
    }

    /// Check numeric sanity for `tier`'s parameters.
    pub fn validate(&self, tier: Tier) -> EdResult<()> {
        let bad = |param: &str, reason: String| EdError::InvalidDistributionParameter {
            tier,
            param: param.to_owned(),
            reason,
        };
        let capped = |param: &str, value: f64| {
            if value > MAX_ARRIVAL_RATE {
                Err(bad(param, format!("{value} exceeds the limit of {MAX_ARRIVAL_RATE} per hour")))
            } else {
                Ok(())
            }
        };
        match *self {
            ArrivalParams::Poisson { lambda } => {
                if !lambda.is_finite() || lambda < 0.0 {
                    return Err(bad("lambda", format!("must be a finite number >= 0, got {lambda}")));
                }
                capped("lambda", lambda)?;
            }
            ArrivalParams::Uniform { lower, upper } => {
                if lower > upper {
                    return Err(bad(
                        "lower_bound",
                        format!("lower bound {lower} exceeds upper bound {upper}"),
                    ));
                }
                capped("upper_bound", f64::from(upper))?;
            }
            ArrivalParams::Normal { mean, std_dev } => {
                if !mean.is_finite() {
                    return Err(bad("mean", format!("must be finite, got {mean}")));
                }
                if !std_dev.is_finite() || std_dev < 0.0 {
                    return Err(bad("std_dev", format!("must be a finite number >= 0, got {std_dev}")));
                }
                capped("mean", mean)?;
                capped("std_dev", std_dev)?;
            }
        }
        Ok(())
    }

    /// Build typed parameters from string-keyed raw values.
    ///
    /// Missing keys and non-numeric values are refused with
    /// [`EdError::InvalidDistributionParameter`].
    pub fn from_fields(
        kind:   DistributionKind,
        tier:   Tier,
        fields: &BTreeMap<String, ParamValue>,
    ) -> EdResult<Self> {
        let number = |key: &str| -> EdResult<f64> {
            let value = fields.get(key).ok_or_else(|| EdError::InvalidDistributionParameter {
                tier,
                param:  key.to_owned(),
                reason: "missing".to_owned(),
            })?;
            value.as_f64().ok_or_else(|| EdError::InvalidDistributionParameter {
                tier,
                param:  key.to_owned(),
                reason: format!("not a number: {value:?}"),
            })
        };
        let bound = |key: &str| -> EdResult<u32> {
            let v = number(key)?;
            if !v.is_finite() || v < 0.0 || v.fract() != 0.0 || v > u32::MAX as f64 {
                return Err(EdError::InvalidDistributionParameter {
                    tier,
                    param:  key.to_owned(),
                    reason: format!("must be a non-negative integer, got {v}"),
                });
            }
            Ok(v as u32)
        };

        let params = match kind {
            DistributionKind::Poisson => ArrivalParams::Poisson { lambda: number("lambda")? },
            DistributionKind::Uniform => ArrivalParams::Uniform {
                lower: bound("lower_bound")?,
                upper: bound("upper_bound")?,
            },
            DistributionKind::Normal => ArrivalParams::Normal {
                mean:    number("mean")?,
                std_dev: number("std_dev")?,
            },
        };
        params.validate(tier)?;
        Ok(params)
    }
}

/// Arrival parameters for all three patient types.  All three share one
/// [`DistributionKind`].
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalConfig {
    pub per_tier: PerTier<ArrivalParams>,
}

impl ArrivalConfig {
    pub fn poisson(a: f64, b: f64, c: f64) -> Self {
        Self {
            per_tier: PerTier::new(a, b, c).map(|_, &lambda| ArrivalParams::Poisson { lambda }),
        }
    }

    pub fn uniform(a: (u32, u32), b: (u32, u32), c: (u32, u32)) -> Self {
        Self {
            per_tier: PerTier::new(a, b, c)
                .map(|_, &(lower, upper)| ArrivalParams::Uniform { lower, upper }),
        }
    }

    pub fn normal(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Self {
        Self {
            per_tier: PerTier::new(a, b, c)
                .map(|_, &(mean, std_dev)| ArrivalParams::Normal { mean, std_dev }),
        }
    }

    /// Poisson with λ = 0 for every type: no patient ever arrives.
    pub fn none() -> Self {
        Self::poisson(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn params(&self, tier: Tier) -> &ArrivalParams {
        &self.per_tier[tier]
    }

    pub fn kind(&self) -> DistributionKind {
        self.per_tier.a.kind()
    }

    pub fn validate(&self) -> EdResult<()> {
        let kind = self.kind();
        for (tier, params) in self.per_tier.iter() {
            if params.kind() != kind {
                return Err(EdError::Config(format!(
                    "type {tier} uses {} arrivals but type A uses {kind}",
                    params.kind()
                )));
            }
            params.validate(tier)?;
        }
        Ok(())
    }
}

// ── PolicyKind ────────────────────────────────────────────────────────────────

/// Selector for the room-assignment policy, fixed for the whole run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PolicyKind {
    /// Patients only ever take rooms of their own type.
    ExactType,
    /// Any room whose tier can treat the patient.
    AnyAvailable,
    /// Own type first, then the first room whose letter sorts at or after
    /// the patient's (never out of tier A).
    ClosestLevel,
    /// Own type first; higher tiers only while they have enough spare rooms.
    #[default]
    ThresholdFallback,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::ExactType,
        PolicyKind::AnyAvailable,
        PolicyKind::ClosestLevel,
        PolicyKind::ThresholdFallback,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::ExactType         => "exact-type",
            PolicyKind::AnyAvailable      => "any-available",
            PolicyKind::ClosestLevel      => "closest-level",
            PolicyKind::ThresholdFallback => "threshold-fallback",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PolicyKind {
    type Err = EdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        PolicyKind::ALL
            .into_iter()
            .find(|k| k.label() == norm)
            .ok_or_else(|| EdError::UnknownPolicy(s.to_owned()))
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Validated configuration of one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    pub rooms:      RoomCounts,
    pub arrivals:   ArrivalConfig,
    pub policy:     PolicyKind,
    /// `None` draws fresh entropy for every run.
    pub seed:       Option<u64>,
    /// Hour of day (0–23) at which the run starts and ends.
    pub start_hour: u8,
}

impl SimConfig {
    /// Config starting at the default 06:00 with fresh randomness.
    pub fn new(rooms: RoomCounts, arrivals: ArrivalConfig, policy: PolicyKind) -> Self {
        Self {
            rooms,
            arrivals,
            policy,
            seed:       None,
            start_hour: DEFAULT_START_HOUR,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Room limits first, then distribution parameters, then the clock.
    pub fn validate(&self) -> EdResult<()> {
        self.rooms.validate()?;
        self.arrivals.validate()?;
        if self.start_hour > 23 {
            return Err(EdError::Config(format!(
                "start hour {} is outside 0..=23",
                self.start_hour
            )));
        }
        Ok(())
    }
}

// ── ScenarioInput ─────────────────────────────────────────────────────────────

/// Configuration as delivered by an external front end.
///
/// ```json
/// {
///   "a_count": 4, "b_count": 4, "c_count": 4,
///   "distribution_type": "Poisson",
///   "distribution_params_by_type": {
///     "A": { "lambda": 0.5 }, "B": { "lambda": "1.5" }, "C": { "lambda": 2 }
///   },
///   "assignment_policy": "threshold-fallback"
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioInput {
    pub a_count:                     u32,
    pub b_count:                     u32,
    pub c_count:                     u32,
    pub distribution_type:           String,
    pub distribution_params_by_type: BTreeMap<String, BTreeMap<String, ParamValue>>,
    pub assignment_policy:           String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed:                        Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_hour:                  Option<u8>,
}

impl ScenarioInput {
    pub fn room_counts(&self) -> RoomCounts {
        RoomCounts::new(self.a_count, self.b_count, self.c_count)
    }

    /// Validate and convert into a [`SimConfig`].
    ///
    /// Room limits are checked before anything else so an over-budget
    /// selection is reported even when its parameters are also bad.
    pub fn resolve(&self) -> EdResult<SimConfig> {
        let rooms = self.room_counts();
        rooms.validate()?;

        let kind = self.distribution_type.parse::<DistributionKind>()?;

        let mut by_tier: BTreeMap<Tier, &BTreeMap<String, ParamValue>> = BTreeMap::new();
        for (label, fields) in &self.distribution_params_by_type {
            by_tier.insert(label.parse::<Tier>()?, fields);
        }

        let params_for = |tier: Tier| -> EdResult<ArrivalParams> {
            let fields = by_tier.get(&tier).ok_or_else(|| EdError::InvalidDistributionParameter {
                tier,
                param:  kind.param_names().join(", "),
                reason: "no parameters supplied".to_owned(),
            })?;
            ArrivalParams::from_fields(kind, tier, fields)
        };
        let per_tier = PerTier::new(
            params_for(Tier::A)?,
            params_for(Tier::B)?,
            params_for(Tier::C)?,
        );

        let config = SimConfig {
            rooms,
            arrivals:   ArrivalConfig { per_tier },
            policy:     self.assignment_policy.parse()?,
            seed:       self.seed,
            start_hour: self.start_hour.unwrap_or(DEFAULT_START_HOUR),
        };
        config.validate()?;
        Ok(config)
    }
}
