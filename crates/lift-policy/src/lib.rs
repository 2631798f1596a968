//! `lift-policy` — the two extension points around the engine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                           |
//! |----------------|--------------------------------------------------------------------|
//! | [`boarding`]   | `BoardingPolicy` trait, `DirectionalBoarding`, `UnrestrictedBoarding` |
//! | [`context`]    | `ControlContext<'a>`, the read-only view handed to controllers     |
//! | [`controller`] | `Controller` trait                                                 |
//! | [`idle`]       | `IdleController`: every car always stays                           |
//! | [`collective`] | `CollectiveController`: simple direction-aware heuristic           |
//!
//! # Design notes
//!
//! A `BoardingPolicy` runs *inside* the engine's tick, once per waiting
//! passenger offered to a car that just opened its door.  It must be a pure
//! function of its arguments.
//!
//! A `Controller` runs *outside* the tick: it reads the observation the
//! engine returned and produces the next tick's `ActionInput`.  Learning
//! agents live behind this trait in the caller's code; the two controllers
//! here are baselines for demos and tests.

pub mod boarding;
pub mod collective;
pub mod context;
pub mod controller;
pub mod idle;


pub use boarding::{BoardingPolicy, DirectionalBoarding, UnrestrictedBoarding};
pub use collective::CollectiveController;
pub use context::ControlContext;
pub use controller::Controller;
pub use idle::IdleController;
