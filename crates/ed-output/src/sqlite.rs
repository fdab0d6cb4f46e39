//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `hourly_metrics`, `run_summary`, and `sweep_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{HourRow, OutputResult, SummaryRow, SweepSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS hourly_metrics (
                 tick                    INTEGER PRIMARY KEY,
                 hour                    TEXT    NOT NULL,
                 busy_a                  INTEGER NOT NULL,
                 busy_b                  INTEGER NOT NULL,
                 busy_c                  INTEGER NOT NULL,
                 waiting_a               INTEGER NOT NULL,
                 waiting_b               INTEGER NOT NULL,
                 waiting_c               INTEGER NOT NULL,
                 roomed_above_triage     INTEGER NOT NULL,
                 left_without_being_seen INTEGER NOT NULL,
                 harmed                  INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 rooms_a             INTEGER NOT NULL,
                 rooms_b             INTEGER NOT NULL,
                 rooms_c             INTEGER NOT NULL,
                 hours               INTEGER NOT NULL,
                 room_hours_a        INTEGER NOT NULL,
                 room_hours_b        INTEGER NOT NULL,
                 room_hours_c        INTEGER NOT NULL,
                 utilization_a       REAL    NOT NULL,
                 utilization_b       REAL    NOT NULL,
                 utilization_c       REAL    NOT NULL,
                 average_utilization REAL    NOT NULL,
                 served_a            INTEGER NOT NULL,
                 served_b            INTEGER NOT NULL,
                 served_c            INTEGER NOT NULL,
                 revenue_a           INTEGER NOT NULL,
                 revenue_b           INTEGER NOT NULL,
                 revenue_c           INTEGER NOT NULL,
                 total_revenue       INTEGER NOT NULL,
                 waiting_cost_a      INTEGER NOT NULL,
                 waiting_cost_b      INTEGER NOT NULL,
                 waiting_cost_c      INTEGER NOT NULL,
                 total_lwbs          INTEGER NOT NULL,
                 total_harmed        INTEGER NOT NULL,
                 lwbs_cost           INTEGER NOT NULL,
                 harm_cost           INTEGER NOT NULL,
                 staffing_cost_a     INTEGER NOT NULL,
                 staffing_cost_b     INTEGER NOT NULL,
                 staffing_cost_c     INTEGER NOT NULL,
                 total_cost          INTEGER NOT NULL,
                 operating_profit    INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS sweep_summary (
                 rooms_a             INTEGER NOT NULL,
                 rooms_b             INTEGER NOT NULL,
                 rooms_c             INTEGER NOT NULL,
                 repetitions         INTEGER NOT NULL,
                 average_utilization REAL    NOT NULL,
                 average_revenue     REAL    NOT NULL,
                 average_cost        REAL    NOT NULL,
                 average_profit      REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_hour(&mut self, row: &HourRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO hourly_metrics \
             (tick, hour, busy_a, busy_b, busy_c, waiting_a, waiting_b, waiting_c, \
              roomed_above_triage, left_without_being_seen, harmed) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            rusqlite::params![
                row.tick as i64,
                row.hour_label,
                row.busy_a,
                row.busy_b,
                row.busy_c,
                row.waiting_a,
                row.waiting_b,
                row.waiting_c,
                row.roomed_above_triage,
                row.left_without_being_seen,
                row.harmed,
            ],
        )?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summary \
             (rooms_a, rooms_b, rooms_c, hours, room_hours_a, room_hours_b, room_hours_c, \
              utilization_a, utilization_b, utilization_c, average_utilization, \
              served_a, served_b, served_c, revenue_a, revenue_b, revenue_c, total_revenue, \
              waiting_cost_a, waiting_cost_b, waiting_cost_c, total_lwbs, total_harmed, \
              lwbs_cost, harm_cost, staffing_cost_a, staffing_cost_b, staffing_cost_c, \
              total_cost, operating_profit) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, \
                     ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29, ?30)",
            rusqlite::params![
                row.rooms_a,
                row.rooms_b,
                row.rooms_c,
                row.hours,
                row.room_hours_a as i64,
                row.room_hours_b as i64,
                row.room_hours_c as i64,
                row.utilization_a,
                row.utilization_b,
                row.utilization_c,
                row.average_utilization,
                row.served_a,
                row.served_b,
                row.served_c,
                row.revenue_a,
                row.revenue_b,
                row.revenue_c,
                row.total_revenue,
                row.waiting_cost_a,
                row.waiting_cost_b,
                row.waiting_cost_c,
                row.total_lwbs,
                row.total_harmed,
                row.lwbs_cost,
                row.harm_cost,
                row.staffing_cost_a,
                row.staffing_cost_b,
                row.staffing_cost_c,
                row.total_cost,
                row.operating_profit,
            ],
        )?;
        Ok(())
    }

    fn write_sweep_row(&mut self, row: &SweepSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO sweep_summary \
             (rooms_a, rooms_b, rooms_c, repetitions, average_utilization, \
              average_revenue, average_cost, average_profit) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                row.rooms_a,
                row.rooms_b,
                row.rooms_c,
                row.repetitions,
                row.average_utilization,
                row.average_revenue,
                row.average_cost,
                row.average_profit,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
