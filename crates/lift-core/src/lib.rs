//! `lift-core` — foundational types for the `rust_lift` elevator environment.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`ids`]         | `CarId`, `FloorId`                                          |
//! | [`time`]        | `Tick`                                                      |
//! | [`direction`]   | `Direction` (−1 / 0 / +1)                                   |
//! | [`action`]      | `Action`, `ActionMode`, `ActionInput`, `CombinedAction`     |
//! | [`config`]      | `EnvConfig`, `RewardConfig`                                 |
//! | [`rng`]         | `DemandRng` trait, `SimRng`                                 |
//! | [`error`]       | `LiftError`, `LiftResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod action;
pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::{Action, ActionInput, ActionMode, CombinedAction, ACTIONS_PER_CAR};
pub use config::{EnvConfig, MAX_SPAWN_RATE, RewardConfig};
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use ids::{CarId, FloorId};
pub use rng::{DemandRng, SimRng};
pub use time::Tick;
