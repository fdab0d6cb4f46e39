//! Simulation observer trait for progress reporting and data collection.

use ed_core::Tick;

use crate::{HourRecord, RunSummary};

/// Callbacks invoked by [`Sim`][crate::Sim] at hour boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — hourly printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_hour_end(&mut self, record: &HourRecord) {
///         println!("{}: {} waiting", record.hour_label, record.waiting_patients.total());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each hour, before the discharge pass.
    fn on_hour_start(&mut self, _tick: Tick, _label: &str) {}

    /// Called after the clock has advanced, with the metrics row captured
    /// during the hour.
    fn on_hour_end(&mut self, _record: &HourRecord) {}

    /// Called once, right after the ledger is finalized.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_hour_start(&mut self, tick: Tick, label: &str) {
        (**self).on_hour_start(tick, label);
    }

    fn on_hour_end(&mut self, record: &HourRecord) {
        (**self).on_hour_end(record);
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        (**self).on_sim_end(summary);
    }
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
