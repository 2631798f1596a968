//! Per-tick event log.
//!
//! Every state change and every reward delta of a tick is recorded here in
//! the order it happened.  Tests assert on this log to check processing
//! order (ascending cars; alight before board within a car).

use lift_core::{CarId, FloorId};

/// Soft failures that cost reward but never abort a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PenaltyKind {
    /// Door opened with nobody to drop off and nobody waiting.
    EmptyFloorOpen,
    /// Move commanded while the door was open.
    DoorOpenMove,
    /// Move commanded past the top or bottom floor.
    Boundary,
}

impl std::fmt::Display for PenaltyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PenaltyKind::EmptyFloorOpen => "empty_floor_open",
            PenaltyKind::DoorOpenMove   => "door_open_move",
            PenaltyKind::Boundary       => "boundary",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TickEvent {
    Penalty {
        car:    CarId,
        kind:   PenaltyKind,
        amount: f64,
    },
    Moved {
        car:  CarId,
        from: FloorId,
        to:   FloorId,
    },
    DoorOpened {
        car:   CarId,
        floor: FloorId,
    },
    DoorClosed {
        car: CarId,
    },
    Delivered {
        car:   CarId,
        floor: FloorId,
        count: usize,
    },
    Boarded {
        car:   CarId,
        floor: FloorId,
        count: usize,
    },
    Spawned {
        floor: FloorId,
        count: usize,
    },
}
