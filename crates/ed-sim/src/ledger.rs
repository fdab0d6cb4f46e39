//! The economic ledger: one row per simulated hour, aggregated once at run
//! end.
//!
//! # Derived figures
//!
//! ```text
//! utilization[t]  = room_hours[t] / (hours × rooms[t])      (0 if rooms[t] = 0)
//! average         = (util[A] + util[B] + util[C]) / 3
//! revenue         = Σ discharged[t] × discharge_revenue(t)
//! waiting cost    = Σ waiting_hours[t] × waiting_cost_per_hour(t)
//! attrition cost  = lwbs × 200 + harmed × 10 000
//! staffing cost   = Σ rooms[t] × room_cost_per_day(t)
//! total cost      = waiting + attrition + staffing
//! profit          = revenue − total cost
//! ```
//!
//! Every money figure is an exact integer.

use ed_core::{PerTier, RoomCounts, Tick, Tier, HARM_PENALTY, LWBS_PENALTY};

// ── HourRecord ────────────────────────────────────────────────────────────────

/// Metrics captured in step ③ of one hour.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourRecord {
    pub tick:                    Tick,
    pub hour_label:              String,
    pub busy_rooms:              PerTier<u32>,
    pub waiting_patients:        PerTier<u32>,
    pub roomed_above_triage:     u32,
    pub left_without_being_seen: u32,
    pub harmed:                  u32,
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// End-of-run aggregates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub rooms:                    RoomCounts,
    pub hours:                    u32,
    pub total_room_hours_by_type: PerTier<u64>,
    pub utilization_by_type:      PerTier<f64>,
    pub average_utilization:      f64,
    pub patients_served_by_type:  PerTier<u32>,
    pub revenue_by_type:          PerTier<i64>,
    pub total_revenue:            i64,
    pub waiting_hours_by_type:    PerTier<u64>,
    pub waiting_cost_by_type:     PerTier<i64>,
    pub total_lwbs:               u32,
    pub total_harmed:             u32,
    pub lwbs_cost:                i64,
    pub harm_cost:                i64,
    pub staffing_cost_by_type:    PerTier<i64>,
    pub total_cost:               i64,
    pub operating_profit:         i64,
}

impl RunSummary {
    pub fn waiting_cost(&self) -> i64 {
        self.waiting_cost_by_type.total()
    }

    pub fn attrition_cost(&self) -> i64 {
        self.lwbs_cost + self.harm_cost
    }

    pub fn staffing_cost(&self) -> i64 {
        self.staffing_cost_by_type.total()
    }

    pub fn patients_served(&self) -> u32 {
        self.patients_served_by_type.total()
    }
}

// ── Ledger ────────────────────────────────────────────────────────────────────

/// Append-only record of one run.
#[derive(Clone, Debug)]
pub struct Ledger {
    rooms:      RoomCounts,
    rows:       Vec<HourRecord>,
    discharged: PerTier<u32>,
    summary:    Option<RunSummary>,
}

impl Ledger {
    pub fn new(rooms: RoomCounts) -> Self {
        Self {
            rooms,
            rows:       Vec::with_capacity(ed_core::CYCLE_HOURS as usize),
            discharged: PerTier::default(),
            summary:    None,
        }
    }

    pub fn record_hour(&mut self, row: HourRecord) {
        self.rows.push(row);
    }

    pub fn record_discharge(&mut self, tier: Tier) {
        self.discharged[tier] += 1;
    }

    #[inline]
    pub fn rows(&self) -> &[HourRecord] {
        &self.rows
    }

    #[inline]
    pub fn rooms(&self) -> RoomCounts {
        self.rooms
    }

    #[inline]
    pub fn discharged(&self) -> PerTier<u32> {
        self.discharged
    }

    /// Occupied room-hours per tier.
    pub fn room_hours(&self) -> PerTier<u64> {
        self.sum_rows(|r| &r.busy_rooms)
    }

    /// Waiting patient-hours per tier.
    pub fn waiting_hours(&self) -> PerTier<u64> {
        self.sum_rows(|r| &r.waiting_patients)
    }

    pub fn total_lwbs(&self) -> u32 {
        self.rows.iter().map(|r| r.left_without_being_seen).sum()
    }

    pub fn total_harmed(&self) -> u32 {
        self.rows.iter().map(|r| r.harmed).sum()
    }

    fn sum_rows(&self, field: impl Fn(&HourRecord) -> &PerTier<u32>) -> PerTier<u64> {
        let mut total = PerTier::<u64>::default();
        for row in &self.rows {
            for (tier, &n) in field(row).iter() {
                total[tier] += u64::from(n);
            }
        }
        total
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.summary.is_some()
    }

    pub fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    /// Derive the end-of-run aggregates.  The first call freezes them;
    /// later calls return the same figures.
    pub fn finalize(&mut self) -> RunSummary {
        if let Some(summary) = &self.summary {
            return summary.clone();
        }
        let summary = self.compute();
        self.summary = Some(summary.clone());
        summary
    }

    fn compute(&self) -> RunSummary {
        let hours = self.rows.len() as u32;
        let room_hours = self.room_hours();
        let waiting_hours = self.waiting_hours();

        let utilization_by_type = room_hours.map(|tier, &busy| {
            let available = u64::from(hours) * u64::from(self.rooms.of(tier));
            if available == 0 {
                0.0
            } else {
                busy as f64 / available as f64
            }
        });
        let average_utilization =
            (utilization_by_type.a + utilization_by_type.b + utilization_by_type.c) / 3.0;

        let revenue_by_type =
            self.discharged.map(|tier, &n| i64::from(n) * tier.discharge_revenue());
        let waiting_cost_by_type =
            waiting_hours.map(|tier, &h| h as i64 * tier.waiting_cost_per_hour());
        let staffing_cost_by_type =
            self.rooms.per_tier().map(|tier, &n| i64::from(n) * tier.room_cost_per_day());

        let total_lwbs = self.total_lwbs();
        let total_harmed = self.total_harmed();
        let lwbs_cost = i64::from(total_lwbs) * LWBS_PENALTY;
        let harm_cost = i64::from(total_harmed) * HARM_PENALTY;

        let total_revenue = revenue_by_type.total();
        let total_cost = waiting_cost_by_type.total()
            + lwbs_cost
            + harm_cost
            + staffing_cost_by_type.total();

        RunSummary {
            rooms: self.rooms,
            hours,
            total_room_hours_by_type: room_hours,
            utilization_by_type,
            average_utilization,
            patients_served_by_type: self.discharged,
            revenue_by_type,
            total_revenue,
            waiting_hours_by_type: waiting_hours,
            waiting_cost_by_type,
            total_lwbs,
            total_harmed,
            lwbs_cost,
            harm_cost,
            staffing_cost_by_type,
            total_cost,
            operating_profit: total_revenue - total_cost,
        }
    }
}
