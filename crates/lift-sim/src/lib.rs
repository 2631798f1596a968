//! `lift-sim` — the elevator environment's tick engine.
//!
//! # Tick order
//!
//! ```text
//! step(input):
//!   ⓪ Decode    input → one Action per car (fails here, before any mutation,
//!                if the shape is wrong)
//!   ① Actions   for each car in ascending CarId order:
//!                  penalties for wasteful opens, moving with the door open,
//!                  and running into the roof/basement; then the effective
//!                  move / open / close.  An open runs ② immediately.
//!   ② Door      alight riders for this floor, refresh car calls, board
//!                eligible waiting passengers up to capacity, refresh hall calls
//!   ③ Backlog   waiting cost on everyone not yet delivered
//!   ④ Demand    Poisson arrivals on every floor
//!   ⑤ Report    observation, reward, truncation, info
//! ```
//!
//! The backlog is charged before new arrivals.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `EnvBatch::step_all` runs members on Rayon's pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::EnvConfig;
//! use lift_policy::CollectiveController;
//! use lift_sim::{EnvBuilder, NoopObserver, run_episode};
//!
//! let mut env = EnvBuilder::new(EnvConfig::default()).seed(42).build()?;
//! let summary = run_episode(&mut env, &mut CollectiveController::new(), &mut NoopObserver, None)?;
//! println!("reward {:.1}, delivered {}", summary.total_reward, summary.delivered);
//! ```

pub mod batch;
pub mod builder;
pub mod demand;
pub mod door;
pub mod env;
pub mod error;
pub mod events;
pub mod observer;
pub mod outcome;
pub mod resolver;
pub mod reward;
pub mod runner;

#[cfg(test)]
mod tests;

pub use batch::EnvBatch;
pub use builder::EnvBuilder;
pub use env::ElevatorEnv;
pub use error::{SimError, SimResult};
pub use events::{PenaltyKind, TickEvent};
pub use observer::{EnvObserver, NoopObserver};
pub use outcome::{StepInfo, StepResult};
pub use reward::RewardBreakdown;
pub use runner::{EpisodeSummary, run_episode};
