//! `lift-state` — arena-style storage for cars and floors.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`cars`]          | `CarStore` (SoA arrays indexed by `CarId`)                 |
//! | [`floors`]        | `FloorStore` (waiting lists + derived hall calls)          |
//! | [`observation`]   | `Observation`, `CarState`: what a controller sees          |
//!
//! Stores own plain `Vec`s indexed by id; nothing is shared between cars or
//! between floors, so no reference counting or interior mutability is needed.
//! Only the simulation engine mutates them.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Observation`.    |

pub mod cars;
pub mod floors;
pub mod observation;


pub use cars::CarStore;
pub use floors::FloorStore;
pub use observation::{CarState, Observation};
