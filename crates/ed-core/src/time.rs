//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter, one tick per simulated
//! hour.  `HourClock` maps ticks onto a wall-clock hour of day:
//!
//!   hour_of_day = (start_hour + tick) mod 24
//!
//! A run starts at `start_hour` (06:00 by default) and is complete once the
//! clock has made one full cycle and shows the start label again, i.e. after
//! exactly [`CYCLE_HOURS`] transitions.

use std::fmt;

/// Hour transitions in one run.
pub const CYCLE_HOURS: u64 = 24;

/// Hour of day at which a run starts.
pub const DEFAULT_START_HOUR: u8 = 6;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter (hours since the run started).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── HourClock ─────────────────────────────────────────────────────────────────

/// The run clock: current tick plus the hour of day it started at.
///
/// `HourClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourClock {
    /// Hour of day (0–23) of tick 0.
    pub start_hour: u8,
    /// Advanced by `HourClock::advance()` once per transition.
    pub current_tick: Tick,
}

impl HourClock {
    /// Create a clock at tick 0 showing `start_hour`.
    ///
    /// `start_hour` is taken modulo 24.
    pub fn new(start_hour: u8) -> Self {
        Self {
            start_hour:   start_hour % 24,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one hour.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Hour of day (0–23) shown by the clock at `tick`.
    #[inline]
    pub fn hour_of_day_at(&self, tick: Tick) -> u8 {
        ((self.start_hour as u64 + tick.0) % 24) as u8
    }

    #[inline]
    pub fn hour_of_day(&self) -> u8 {
        self.hour_of_day_at(self.current_tick)
    }

    /// `HH:00` label for `tick`, e.g. `"06:00"`.
    pub fn label_at(&self, tick: Tick) -> String {
        format!("{:02}:00", self.hour_of_day_at(tick))
    }

    /// `HH:00` label for the current tick.
    pub fn label(&self) -> String {
        self.label_at(self.current_tick)
    }

    /// The run's start label.
    pub fn start_label(&self) -> String {
        self.label_at(Tick::ZERO)
    }

    /// Twelve-hour span label for the current hour, e.g.
    /// `"06:00 AM - 07:00 AM"`.
    pub fn span_label(&self) -> String {
        let from = self.hour_of_day();
        let to = (from + 1) % 24;
        format!("{} - {}", twelve_hour(from), twelve_hour(to))
    }

    /// `true` once a full cycle has elapsed and the clock shows its start
    /// label again.
    #[inline]
    pub fn cycle_complete(&self) -> bool {
        self.current_tick.0 >= CYCLE_HOURS
    }

    /// Hours left before the cycle completes.
    #[inline]
    pub fn hours_remaining(&self) -> u64 {
        CYCLE_HOURS.saturating_sub(self.current_tick.0)
    }
}

impl Default for HourClock {
    fn default() -> Self {
        Self::new(DEFAULT_START_HOUR)
    }
}

impl fmt::Display for HourClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_tick, self.label())
    }
}

fn twelve_hour(hour: u8) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let h = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{h:02}:00 {suffix}")
}
