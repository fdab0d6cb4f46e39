//! Acuity tiers and the per-tier tariff.
//!
//! A single closed enum covers both patient types and room types: a type-A
//! patient and a type-A room share every tier-derived constant.  Any label
//! outside `{A, B, C}` is rejected at the parsing boundary, so the engine
//! never sees an invalid type.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::EdError;

/// Penalty charged for each patient who leaves without being seen.
pub const LWBS_PENALTY: i64 = 200;

/// Penalty charged for each high-acuity patient harmed while waiting.
pub const HARM_PENALTY: i64 = 10_000;

// ── Tier ──────────────────────────────────────────────────────────────────────

/// Patient type / room type.
///
/// The derived `Ord` is `A < B < C`, i.e. highest acuity first.  A room of
/// tier `r` sits *above* a patient of tier `p` when `r < p`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    A,
    B,
    C,
}

impl Tier {
    /// All tiers in Room Pool order.
    pub const ALL: [Tier; 3] = [Tier::A, Tier::B, Tier::C];

    #[inline]
    pub fn letter(self) -> char {
        match self {
            Tier::A => 'A',
            Tier::B => 'B',
            Tier::C => 'C',
        }
    }

    #[inline]
    pub fn acuity(self) -> Acuity {
        match self {
            Tier::A => Acuity::High,
            Tier::B => Acuity::Medium,
            Tier::C => Acuity::Low,
        }
    }

    /// Hours of treatment a patient of this tier needs once roomed.
    #[inline]
    pub fn treatment_hours(self) -> u32 {
        match self {
            Tier::A => 4,
            Tier::B => 3,
            Tier::C => 2,
        }
    }

    /// Daily staffing cost of one room of this tier.
    #[inline]
    pub fn room_cost_per_day(self) -> i64 {
        match self {
            Tier::A => 3_900,
            Tier::B => 3_000,
            Tier::C => 1_600,
        }
    }

    /// Revenue earned when a patient of this tier is discharged.
    #[inline]
    pub fn discharge_revenue(self) -> i64 {
        match self {
            Tier::A => 1_000,
            Tier::B => 600,
            Tier::C => 250,
        }
    }

    /// Cost of one patient of this tier spending one hour in the waiting room.
    #[inline]
    pub fn waiting_cost_per_hour(self) -> i64 {
        match self {
            Tier::A => 250,
            Tier::B => 100,
            Tier::C => 25,
        }
    }

    /// Capability lattice: can a room of tier `self` treat a patient of tier
    /// `patient`?  A ⊆ {A}, B ⊆ {A, B}, C ⊆ {A, B, C}.
    #[inline]
    pub fn can_treat(self, patient: Tier) -> bool {
        self <= patient
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Tier {
    type Err = EdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Tier::A),
            "B" | "b" => Ok(Tier::B),
            "C" | "c" => Ok(Tier::C),
            other => Err(EdError::UnknownTier(other.to_owned())),
        }
    }
}

// ── Acuity ────────────────────────────────────────────────────────────────────

/// Clinical acuity, derived 1:1 from [`Tier`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acuity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Acuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Acuity::High   => "High",
            Acuity::Medium => "Medium",
            Acuity::Low    => "Low",
        })
    }
}

// ── PerTier ───────────────────────────────────────────────────────────────────

/// One value per tier, indexable by [`Tier`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerTier<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> PerTier<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Build by calling `f` once per tier in pool order.
    pub fn from_fn(mut f: impl FnMut(Tier) -> T) -> Self {
        Self { a: f(Tier::A), b: f(Tier::B), c: f(Tier::C) }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Tier, &T) -> U) -> PerTier<U> {
        PerTier {
            a: f(Tier::A, &self.a),
            b: f(Tier::B, &self.b),
            c: f(Tier::C, &self.c),
        }
    }

    /// `(tier, &value)` pairs in pool order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &T)> {
        [(Tier::A, &self.a), (Tier::B, &self.b), (Tier::C, &self.c)].into_iter()
    }
}

impl<T: Copy + std::iter::Sum<T>> PerTier<T> {
    pub fn total(&self) -> T {
        [self.a, self.b, self.c].into_iter().sum()
    }
}

impl<T> Index<Tier> for PerTier<T> {
    type Output = T;

    #[inline]
    fn index(&self, tier: Tier) -> &T {
        match tier {
            Tier::A => &self.a,
            Tier::B => &self.b,
            Tier::C => &self.c,
        }
    }
}

impl<T> IndexMut<Tier> for PerTier<T> {
    #[inline]
    fn index_mut(&mut self, tier: Tier) -> &mut T {
        match tier {
            Tier::A => &mut self.a,
            Tier::B => &mut self.b,
            Tier::C => &mut self.c,
        }
    }
}
