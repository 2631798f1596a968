//! Travel direction of a car.

use crate::FloorId;

/// The last commanded movement direction of a car.
///
/// `Idle` means no direction has been established yet (fresh reset, or only
/// `Stay`/door actions since).  A car keeps its direction while stationary;
/// only an effective move changes it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Down,
    #[default]
    Idle,
    Up,
}

impl Direction {
    /// Signed encoding used in observations: −1, 0, +1.
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Direction::Down => -1,
            Direction::Idle => 0,
            Direction::Up   => 1,
        }
    }

    /// `true` if a passenger going from `origin` to `destination` travels
    /// this way.  `Idle` admits every trip.
    #[inline]
    pub fn admits(self, origin: FloorId, destination: FloorId) -> bool {
        match self {
            Direction::Up   => destination > origin,
            Direction::Down => destination < origin,
            Direction::Idle => true,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Down => "down",
            Direction::Idle => "idle",
            Direction::Up   => "up",
        })
    }
}
