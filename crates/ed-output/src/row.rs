//! Flat row types written by every backend.
//!
//! Ledger types keep per-tier figures in [`PerTier`][ed_core::PerTier]; the
//! rows here spread them into `_a`/`_b`/`_c` columns so each backend can
//! write them without knowing about tiers.

use ed_core::Tier;
use ed_sim::{HourRecord, RunSummary, SweepRow};

// ── HourRow ───────────────────────────────────────────────────────────────────

/// One line of `hourly_metrics`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HourRow {
    pub tick:                    u64,
    pub hour_label:              String,
    pub busy_a:                  u32,
    pub busy_b:                  u32,
    pub busy_c:                  u32,
    pub waiting_a:               u32,
    pub waiting_b:               u32,
    pub waiting_c:               u32,
    pub roomed_above_triage:     u32,
    pub left_without_being_seen: u32,
    pub harmed:                  u32,
}

impl From<&HourRecord> for HourRow {
    fn from(r: &HourRecord) -> Self {
        Self {
            tick:                    r.tick.0,
            hour_label:              r.hour_label.clone(),
            busy_a:                  r.busy_rooms[Tier::A],
            busy_b:                  r.busy_rooms[Tier::B],
            busy_c:                  r.busy_rooms[Tier::C],
            waiting_a:               r.waiting_patients[Tier::A],
            waiting_b:               r.waiting_patients[Tier::B],
            waiting_c:               r.waiting_patients[Tier::C],
            roomed_above_triage:     r.roomed_above_triage,
            left_without_being_seen: r.left_without_being_seen,
            harmed:                  r.harmed,
        }
    }
}

impl HourRow {
    pub const HEADERS: [&'static str; 11] = [
        "tick",
        "hour",
        "busy_a",
        "busy_b",
        "busy_c",
        "waiting_a",
        "waiting_b",
        "waiting_c",
        "roomed_above_triage",
        "left_without_being_seen",
        "harmed",
    ];
}

// ── SummaryRow ────────────────────────────────────────────────────────────────

/// One line of `run_summary`.
///
/// Aggregate waiting and staffing costs are not stored; they are the sums of
/// their `_a`/`_b`/`_c` columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryRow {
    pub rooms_a:             u32,
    pub rooms_b:             u32,
    pub rooms_c:             u32,
    pub hours:               u32,
    pub room_hours_a:        u64,
    pub room_hours_b:        u64,
    pub room_hours_c:        u64,
    pub utilization_a:       f64,
    pub utilization_b:       f64,
    pub utilization_c:       f64,
    pub average_utilization: f64,
    pub served_a:            u32,
    pub served_b:            u32,
    pub served_c:            u32,
    pub revenue_a:           i64,
    pub revenue_b:           i64,
    pub revenue_c:           i64,
    pub total_revenue:       i64,
    pub waiting_cost_a:      i64,
    pub waiting_cost_b:      i64,
    pub waiting_cost_c:      i64,
    pub total_lwbs:          u32,
    pub total_harmed:        u32,
    pub lwbs_cost:           i64,
    pub harm_cost:           i64,
    pub staffing_cost_a:     i64,
    pub staffing_cost_b:     i64,
    pub staffing_cost_c:     i64,
    pub total_cost:          i64,
    pub operating_profit:    i64,
}

impl From<&RunSummary> for SummaryRow {
    fn from(s: &RunSummary) -> Self {
        Self {
            rooms_a:             s.rooms.a,
            rooms_b:             s.rooms.b,
            rooms_c:             s.rooms.c,
            hours:               s.hours,
            room_hours_a:        s.total_room_hours_by_type[Tier::A],
            room_hours_b:        s.total_room_hours_by_type[Tier::B],
            room_hours_c:        s.total_room_hours_by_type[Tier::C],
            utilization_a:       s.utilization_by_type[Tier::A],
            utilization_b:       s.utilization_by_type[Tier::B],
            utilization_c:       s.utilization_by_type[Tier::C],
            average_utilization: s.average_utilization,
            served_a:            s.patients_served_by_type[Tier::A],
            served_b:            s.patients_served_by_type[Tier::B],
            served_c:            s.patients_served_by_type[Tier::C],
            revenue_a:           s.revenue_by_type[Tier::A],
            revenue_b:           s.revenue_by_type[Tier::B],
            revenue_c:           s.revenue_by_type[Tier::C],
            total_revenue:       s.total_revenue,
            waiting_cost_a:      s.waiting_cost_by_type[Tier::A],
            waiting_cost_b:      s.waiting_cost_by_type[Tier::B],
            waiting_cost_c:      s.waiting_cost_by_type[Tier::C],
            total_lwbs:          s.total_lwbs,
            total_harmed:        s.total_harmed,
            lwbs_cost:           s.lwbs_cost,
            harm_cost:           s.harm_cost,
            staffing_cost_a:     s.staffing_cost_by_type[Tier::A],
            staffing_cost_b:     s.staffing_cost_by_type[Tier::B],
            staffing_cost_c:     s.staffing_cost_by_type[Tier::C],
            total_cost:          s.total_cost,
            operating_profit:    s.operating_profit,
        }
    }
}

impl SummaryRow {
    pub const HEADERS: [&'static str; 30] = [
        "rooms_a",
        "rooms_b",
        "rooms_c",
        "hours",
        "room_hours_a",
        "room_hours_b",
        "room_hours_c",
        "utilization_a",
        "utilization_b",
        "utilization_c",
        "average_utilization",
        "served_a",
        "served_b",
        "served_c",
        "revenue_a",
        "revenue_b",
        "revenue_c",
        "total_revenue",
        "waiting_cost_a",
        "waiting_cost_b",
        "waiting_cost_c",
        "total_lwbs",
        "total_harmed",
        "lwbs_cost",
        "harm_cost",
        "staffing_cost_a",
        "staffing_cost_b",
        "staffing_cost_c",
        "total_cost",
        "operating_profit",
    ];

    pub fn waiting_cost(&self) -> i64 {
        self.waiting_cost_a + self.waiting_cost_b + self.waiting_cost_c
    }

    pub fn staffing_cost(&self) -> i64 {
        self.staffing_cost_a + self.staffing_cost_b + self.staffing_cost_c
    }
}

// ── SweepSummaryRow ───────────────────────────────────────────────────────────

/// One line of `sweep_summary`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepSummaryRow {
    pub rooms_a:             u32,
    pub rooms_b:             u32,
    pub rooms_c:             u32,
    pub repetitions:         u32,
    pub average_utilization: f64,
    pub average_revenue:     f64,
    pub average_cost:        f64,
    pub average_profit:      f64,
}

impl From<&SweepRow> for SweepSummaryRow {
    fn from(r: &SweepRow) -> Self {
        Self {
            rooms_a:             r.rooms.a,
            rooms_b:             r.rooms.b,
            rooms_c:             r.rooms.c,
            repetitions:         r.repetitions,
            average_utilization: r.average_utilization,
            average_revenue:     r.average_revenue,
            average_cost:        r.average_cost,
            average_profit:      r.average_profit,
        }
    }
}

impl SweepSummaryRow {
    pub const HEADERS: [&'static str; 8] = [
        "rooms_a",
        "rooms_b",
        "rooms_c",
        "repetitions",
        "average_utilization",
        "average_revenue",
        "average_cost",
        "average_profit",
    ];
}
