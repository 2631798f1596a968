//! Who may board a car that has just opened its door.

use lift_core::{Direction, FloorId};

/// Decides whether a waiting passenger is eligible to board.
///
/// Eligibility is the only thing a policy controls.  Capacity, offer order
/// (oldest waiting first) and the stop-at-first-overflow rule are enforced by
/// the engine for every policy.
pub trait BoardingPolicy: Send + Sync + 'static {
    /// `true` if a passenger waiting at `floor` for `destination` may board
    /// a car whose last movement direction is `direction`.
    fn eligible(&self, floor: FloorId, direction: Direction, destination: FloorId) -> bool;
}

/// The default policy: a car moving up only takes passengers going up, a car
/// moving down only takes passengers going down, and a car with no direction
/// yet takes anyone.
///
/// The idle case can load riders bound in opposite directions on a car's
/// very first stop.
#[derive(Copy, Clone, Debug, Default)]
pub struct DirectionalBoarding;

impl BoardingPolicy for DirectionalBoarding {
    #[inline]
    fn eligible(&self, floor: FloorId, direction: Direction, destination: FloorId) -> bool {
        direction.admits(floor, destination)
    }
}

/// Everyone waiting is eligible regardless of the car's direction.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnrestrictedBoarding;

impl BoardingPolicy for UnrestrictedBoarding {
    #[inline]
    fn eligible(&self, _floor: FloorId, _direction: Direction, _destination: FloorId) -> bool {
        true
    }
}
