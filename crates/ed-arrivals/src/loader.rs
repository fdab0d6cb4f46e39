//! CSV arrival-script loader.
//!
//! # CSV format
//!
//! One row per tick with arrivals.  Ticks are hours since the run's start
//! label; a repeated tick adds to the earlier row.  A merged count that no
//! longer fits in a `u32` is a parse error.
//!
//! ```csv
//! tick,a,b,c
//! 0,0,1,3
//! 1,1,0,2
//! 5,0,0,4
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ed_core::{PerTier, Tick};

use crate::{ArrivalError, ScriptedArrivals};

#[derive(Deserialize)]
struct ScriptRecord {
    tick: u64,
    a:    u32,
    b:    u32,
    c:    u32,
}

/// Load a [`ScriptedArrivals`] from a CSV file.
pub fn load_script_csv(path: &Path) -> Result<ScriptedArrivals, ArrivalError> {
    let file = std::fs::File::open(path).map_err(ArrivalError::Io)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
pub fn load_script_reader<R: Read>(reader: R) -> Result<ScriptedArrivals, ArrivalError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows: std::collections::BTreeMap<u64, PerTier<u32>> = Default::default();

    for result in csv_reader.deserialize::<ScriptRecord>() {
        let row = result.map_err(|e| ArrivalError::Parse(e.to_string()))?;
        let add = |total: u32, extra: u32| {
            total
                .checked_add(extra)
                .ok_or_else(|| ArrivalError::Parse(format!("arrival count overflow at tick {}", row.tick)))
        };
        let entry = rows.entry(row.tick).or_default();
        entry.a = add(entry.a, row.a)?;
        entry.b = add(entry.b, row.b)?;
        entry.c = add(entry.c, row.c)?;
    }

    let mut script = ScriptedArrivals::new();
    for (tick, counts) in rows {
        script.insert(Tick(tick), counts);
    }
    Ok(script)
}
