//! The `OutputWriter` trait implemented by all backend writers.

use crate::{HourRow, OutputResult, SummaryRow, SweepSummaryRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// When driven by [`SimOutputObserver`][crate::SimOutputObserver], errors
/// are stored rather than propagated and retrieved with
/// [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one hourly metrics row.
    fn write_hour(&mut self, row: &HourRow) -> OutputResult<()>;

    /// Write the end-of-run summary of one run.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Write the averaged result of one sweep configuration.
    fn write_sweep_row(&mut self, row: &SweepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_hour(&mut self, row: &HourRow) -> OutputResult<()> {
        (**self).write_hour(row)
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        (**self).write_summary(row)
    }

    fn write_sweep_row(&mut self, row: &SweepSummaryRow) -> OutputResult<()> {
        (**self).write_sweep_row(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
