//! `lift-output` — episode output writers for the rust_lift environment.
//!
//! | Backend | Files created                                 |
//! |---------|-----------------------------------------------|
//! | CSV     | `tick_summaries.csv`, `car_snapshots.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lift_sim::EnvObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! run_episode(&mut env, &mut controller, &mut obs, None)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CarSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
