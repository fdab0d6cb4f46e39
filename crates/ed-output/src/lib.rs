//! `ed-output` — ledger and sweep writers for the emergency department
//! simulator.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                                  |
//! |-----------|---------|----------------------------------------------------------------|
//! | *(none)*  | CSV     | `hourly_metrics.csv`, `run_summary.csv`, `sweep_summary.csv`   |
//! | `sqlite`  | SQLite  | `output.db`                                                    |
//! | `parquet` | Parquet | `hourly_metrics.parquet`, `run_summary.parquet`, `sweep_summary.parquet` |
//!
//! All backends implement [`OutputWriter`].  A single run streams through
//! [`SimOutputObserver`], which implements `ed_sim::SimObserver`; a finished
//! ledger or a list of sweep rows can be written in one go with
//! [`export_run`] and [`export_sweep`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use ed_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{export_run, export_sweep};
pub use observer::SimOutputObserver;
pub use row::{HourRow, SummaryRow, SweepSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
