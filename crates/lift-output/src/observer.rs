//! `SimOutputObserver<W>` — bridges `EnvObserver` to an `OutputWriter`.

use lift_core::Tick;
use lift_sim::{EnvObserver, EpisodeSummary, StepResult};
use lift_state::{CarStore, FloorStore};

use crate::row::{CarSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`EnvObserver`] that writes tick summaries and car snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `EnvObserver`
/// methods have no return value.  After `run_episode` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the episode).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EnvObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, result: &StepResult) {
        let row = TickSummaryRow {
            tick:           tick.0,
            reward:         result.reward,
            waiting:        result.info.waiting as u64,
            delivered:      result.breakdown.delivered as u64,
            spawned:        result.breakdown.spawned as u64,
            max_passengers: result.info.max_passengers as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, cars: &CarStore, _floors: &FloorStore) {
        let rows: Vec<CarSnapshotRow> = cars
            .car_ids()
            .map(|car| {
                let i = car.index();
                CarSnapshotRow {
                    car_id:    car.0,
                    tick:      tick.0,
                    floor:     cars.floor[i].0,
                    direction: cars.direction[i].as_i8(),
                    door_open: cars.door_open[i],
                    load:      cars.load(car) as u32,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_episode_end(&mut self, _summary: &EpisodeSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
