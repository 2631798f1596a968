//! Per-car action resolution.

use lift_core::{Action, CarId, Direction, EnvConfig};
use lift_policy::BoardingPolicy;
use lift_state::{CarStore, FloorStore};

use crate::door::open_door;
use crate::reward::TickLedger;
use crate::{PenaltyKind, TickEvent};

/// Apply one car's action for this tick.
///
/// Penalties are judged on the car's state before the action.  A blocked
/// move (door open, or no floor in that direction) costs its penalty and
/// leaves the car where it is; a move that is both takes both penalties.
/// Only `car` and the waiting list of its current floor are touched.
pub(crate) fn resolve_action<B: BoardingPolicy>(
    cars:   &mut CarStore,
    floors: &mut FloorStore,
    car:    CarId,
    action: Action,
    config: &EnvConfig,
    policy: &B,
    ledger: &mut TickLedger,
) {
    let i = car.index();
    let here = cars.floor[i];
    let door_open = cars.door_open[i];
    let rewards = &config.rewards;

    // ── Soft failures ─────────────────────────────────────────────────────
    if action == Action::OpenDoor
        && !door_open
        && cars.riders_for(car, here) == 0
        && floors.waiting_at(here).is_empty()
    {
        ledger.penalise(car, PenaltyKind::EmptyFloorOpen, rewards.penalty_empty_floor_open);
    }
    if door_open && action.is_move() {
        ledger.penalise(car, PenaltyKind::DoorOpenMove, rewards.penalty_door_open_move);
    }
    let next = match action {
        Action::MoveUp   => Some(here.above(config.num_floors)),
        Action::MoveDown => Some(here.below()),
        _ => None,
    };
    if next == Some(None) {
        ledger.penalise(car, PenaltyKind::Boundary, rewards.penalty_boundary);
    }

    // ── Effective transition ──────────────────────────────────────────────
    match action {
        Action::MoveUp | Action::MoveDown if !door_open => {
            if let Some(Some(to)) = next {
                cars.floor[i] = to;
                cars.direction[i] = if action == Action::MoveUp {
                    Direction::Up
                } else {
                    Direction::Down
                };
                ledger.event(TickEvent::Moved { car, from: here, to });
            }
        }
        Action::OpenDoor if !door_open => {
            cars.door_open[i] = true;
            ledger.event(TickEvent::DoorOpened { car, floor: here });
            open_door(cars, floors, car, config.capacity, policy, rewards, ledger);
        }
        Action::CloseDoor => {
            if door_open {
                ledger.event(TickEvent::DoorClosed { car });
            }
            cars.door_open[i] = false;
        }
        _ => {}
    }
}
