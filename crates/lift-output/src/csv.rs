//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `car_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CarSnapshotRow, OutputResult, TickSummaryRow};

/// Writes episode output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "reward", "waiting", "delivered", "spawned", "max_passengers"])?;

        let mut snapshots = Writer::from_path(dir.join("car_snapshots.csv"))?;
        snapshots.write_record(["car_id", "tick", "floor", "direction", "door_open", "load"])?;

        Ok(Self {
            summaries,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.car_id.to_string(),
                row.tick.to_string(),
                row.floor.to_string(),
                row.direction.to_string(),
                (row.door_open as u8).to_string(),
                row.load.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.4}", row.reward),
            row.waiting.to_string(),
            row.delivered.to_string(),
            row.spawned.to_string(),
            row.max_passengers.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
