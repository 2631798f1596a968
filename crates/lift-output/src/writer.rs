//! The `OutputWriter` trait implemented by backend writers.

use crate::{CarSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for episode rows.
///
/// Errors are surfaced to [`SimOutputObserver`][crate::SimOutputObserver],
/// which stores the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write every car's row for one snapshot tick.
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
