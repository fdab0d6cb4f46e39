//! Parquet output backend (feature `parquet`).
//!
//! Creates three files in the configured output directory:
//! - `hourly_metrics.parquet`
//! - `run_summary.parquet`
//! - `sweep_summary.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Builder, Int64Builder, StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{HourRow, OutputResult, SummaryRow, SweepSummaryRow};

fn hour_schema() -> Arc<Schema> {
    let mut fields = vec![
        Field::new("tick", DataType::UInt64, false),
        Field::new("hour", DataType::Utf8,   false),
    ];
    fields.extend(HourRow::HEADERS[2..].iter().map(|name| Field::new(*name, DataType::UInt32, false)));
    Arc::new(Schema::new(fields))
}

fn summary_schema() -> Arc<Schema> {
    let ty = |name: &str| match name {
        "hours" | "rooms_a" | "rooms_b" | "rooms_c" | "served_a" | "served_b" | "served_c"
        | "total_lwbs" | "total_harmed" => DataType::UInt32,
        "room_hours_a" | "room_hours_b" | "room_hours_c" => DataType::UInt64,
        n if n.starts_with("utilization") || n == "average_utilization" => DataType::Float64,
        _ => DataType::Int64,
    };
    Arc::new(Schema::new(
        SummaryRow::HEADERS
            .iter()
            .map(|name| Field::new(*name, ty(*name), false))
            .collect::<Vec<_>>(),
    ))
}

fn sweep_schema() -> Arc<Schema> {
    Arc::new(Schema::new(
        SweepSummaryRow::HEADERS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let ty = if i < 4 { DataType::UInt32 } else { DataType::Float64 };
                Field::new(*name, ty, false)
            })
            .collect::<Vec<_>>(),
    ))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

fn open(dir: &Path, name: &str, schema: &Arc<Schema>) -> OutputResult<ArrowWriter<File>> {
    let file = File::create(dir.join(name))?;
    Ok(ArrowWriter::try_new(file, Arc::clone(schema), Some(snappy_props()))?)
}

fn u32_col(values: &[u32]) -> ArrayRef {
    let mut b = UInt32Builder::with_capacity(values.len());
    b.append_slice(values);
    Arc::new(b.finish())
}

fn u64_col(values: &[u64]) -> ArrayRef {
    let mut b = UInt64Builder::with_capacity(values.len());
    b.append_slice(values);
    Arc::new(b.finish())
}

fn i64_col(values: &[i64]) -> ArrayRef {
    let mut b = Int64Builder::with_capacity(values.len());
    b.append_slice(values);
    Arc::new(b.finish())
}

fn f64_col(values: &[f64]) -> ArrayRef {
    let mut b = Float64Builder::with_capacity(values.len());
    b.append_slice(values);
    Arc::new(b.finish())
}

/// Writes simulation output to three Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footers; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    hours:          Option<ArrowWriter<File>>,
    summary:        Option<ArrowWriter<File>>,
    sweep:          Option<ArrowWriter<File>>,
    hour_schema:    Arc<Schema>,
    summary_schema: Arc<Schema>,
    sweep_schema:   Arc<Schema>,
}

impl ParquetWriter {
    /// Create the three Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let hour_schema = hour_schema();
        let summary_schema = summary_schema();
        let sweep_schema = sweep_schema();

        Ok(Self {
            hours:   Some(open(dir, "hourly_metrics.parquet", &hour_schema)?),
            summary: Some(open(dir, "run_summary.parquet", &summary_schema)?),
            sweep:   Some(open(dir, "sweep_summary.parquet", &sweep_schema)?),
            hour_schema,
            summary_schema,
            sweep_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_hour(&mut self, row: &HourRow) -> OutputResult<()> {
        let Some(writer) = self.hours.as_mut() else {
            return Ok(());
        };

        let mut labels = StringBuilder::new();
        labels.append_value(&row.hour_label);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.hour_schema),
            vec![
                u64_col(&[row.tick]),
                Arc::new(labels.finish()),
                u32_col(&[row.busy_a]),
                u32_col(&[row.busy_b]),
                u32_col(&[row.busy_c]),
                u32_col(&[row.waiting_a]),
                u32_col(&[row.waiting_b]),
                u32_col(&[row.waiting_c]),
                u32_col(&[row.roomed_above_triage]),
                u32_col(&[row.left_without_being_seen]),
                u32_col(&[row.harmed]),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summary.as_mut() else {
            return Ok(());
        };

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summary_schema),
            vec![
                u32_col(&[row.rooms_a]),
                u32_col(&[row.rooms_b]),
                u32_col(&[row.rooms_c]),
                u32_col(&[row.hours]),
                u64_col(&[row.room_hours_a]),
                u64_col(&[row.room_hours_b]),
                u64_col(&[row.room_hours_c]),
                f64_col(&[row.utilization_a]),
                f64_col(&[row.utilization_b]),
                f64_col(&[row.utilization_c]),
                f64_col(&[row.average_utilization]),
                u32_col(&[row.served_a]),
                u32_col(&[row.served_b]),
                u32_col(&[row.served_c]),
                i64_col(&[row.revenue_a]),
                i64_col(&[row.revenue_b]),
                i64_col(&[row.revenue_c]),
                i64_col(&[row.total_revenue]),
                i64_col(&[row.waiting_cost_a]),
                i64_col(&[row.waiting_cost_b]),
                i64_col(&[row.waiting_cost_c]),
                u32_col(&[row.total_lwbs]),
                u32_col(&[row.total_harmed]),
                i64_col(&[row.lwbs_cost]),
                i64_col(&[row.harm_cost]),
                i64_col(&[row.staffing_cost_a]),
                i64_col(&[row.staffing_cost_b]),
                i64_col(&[row.staffing_cost_c]),
                i64_col(&[row.total_cost]),
                i64_col(&[row.operating_profit]),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_sweep_row(&mut self, row: &SweepSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.sweep.as_mut() else {
            return Ok(());
        };

        let batch = RecordBatch::try_new(
            Arc::clone(&self.sweep_schema),
            vec![
                u32_col(&[row.rooms_a]),
                u32_col(&[row.rooms_b]),
                u32_col(&[row.rooms_c]),
                u32_col(&[row.repetitions]),
                f64_col(&[row.average_utilization]),
                f64_col(&[row.average_revenue]),
                f64_col(&[row.average_cost]),
                f64_col(&[row.average_profit]),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.hours.take() {
            w.close()?;
        }
        if let Some(w) = self.summary.take() {
            w.close()?;
        }
        if let Some(w) = self.sweep.take() {
            w.close()?;
        }
        Ok(())
    }
}
