//! One-shot export of a finished run or a completed sweep.

use ed_sim::{Ledger, SweepRow};

use crate::row::{HourRow, SummaryRow, SweepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Write every hourly row of `ledger` followed by its summary, then finish
/// the writer.
///
/// The ledger must be finalized; a run still in progress is refused before
/// anything is written.
pub fn export_run<W: OutputWriter>(writer: &mut W, ledger: &Ledger) -> OutputResult<()> {
    let summary = ledger.summary().ok_or(OutputError::NotFinalized)?;
    for record in ledger.rows() {
        writer.write_hour(&HourRow::from(record))?;
    }
    writer.write_summary(&SummaryRow::from(summary))?;
    writer.finish()
}

/// Write one row per swept configuration, in order, then finish the writer.
pub fn export_sweep<W: OutputWriter>(writer: &mut W, rows: &[SweepRow]) -> OutputResult<()> {
    for row in rows {
        writer.write_sweep_row(&SweepSummaryRow::from(row))?;
    }
    writer.finish()
}
