//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `hourly_metrics.csv`
//! - `run_summary.csv`
//! - `sweep_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{HourRow, OutputResult, SummaryRow, SweepSummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    hours:    Writer<File>,
    summary:  Writer<File>,
    sweep:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut hours = Writer::from_path(dir.join("hourly_metrics.csv"))?;
        hours.write_record(HourRow::HEADERS)?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record(SummaryRow::HEADERS)?;

        let mut sweep = Writer::from_path(dir.join("sweep_summary.csv"))?;
        sweep.write_record(SweepSummaryRow::HEADERS)?;

        Ok(Self {
            hours,
            summary,
            sweep,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_hour(&mut self, row: &HourRow) -> OutputResult<()> {
        self.hours.write_record(&[
            row.tick.to_string(),
            row.hour_label.clone(),
            row.busy_a.to_string(),
            row.busy_b.to_string(),
            row.busy_c.to_string(),
            row.waiting_a.to_string(),
            row.waiting_b.to_string(),
            row.waiting_c.to_string(),
            row.roomed_above_triage.to_string(),
            row.left_without_being_seen.to_string(),
            row.harmed.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.rooms_a.to_string(),
            row.rooms_b.to_string(),
            row.rooms_c.to_string(),
            row.hours.to_string(),
            row.room_hours_a.to_string(),
            row.room_hours_b.to_string(),
            row.room_hours_c.to_string(),
            row.utilization_a.to_string(),
            row.utilization_b.to_string(),
            row.utilization_c.to_string(),
            row.average_utilization.to_string(),
            row.served_a.to_string(),
            row.served_b.to_string(),
            row.served_c.to_string(),
            row.revenue_a.to_string(),
            row.revenue_b.to_string(),
            row.revenue_c.to_string(),
            row.total_revenue.to_string(),
            row.waiting_cost_a.to_string(),
            row.waiting_cost_b.to_string(),
            row.waiting_cost_c.to_string(),
            row.total_lwbs.to_string(),
            row.total_harmed.to_string(),
            row.lwbs_cost.to_string(),
            row.harm_cost.to_string(),
            row.staffing_cost_a.to_string(),
            row.staffing_cost_b.to_string(),
            row.staffing_cost_c.to_string(),
            row.total_cost.to_string(),
            row.operating_profit.to_string(),
        ])?;
        Ok(())
    }

    fn write_sweep_row(&mut self, row: &SweepSummaryRow) -> OutputResult<()> {
        self.sweep.write_record(&[
            row.rooms_a.to_string(),
            row.rooms_b.to_string(),
            row.rooms_c.to_string(),
            row.repetitions.to_string(),
            row.average_utilization.to_string(),
            row.average_revenue.to_string(),
            row.average_cost.to_string(),
            row.average_profit.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.hours.flush()?;
        self.summary.flush()?;
        self.sweep.flush()?;
        Ok(())
    }
}
