//! A direction-aware "collective" baseline controller.
//!
//! Each car, independently:
//!
//! 1. door open → close it;
//! 2. a rider wants out here, or a hall call here matches the car's
//!    direction and the car has room → open;
//! 3. otherwise keep going while there is a target ahead, else head for the
//!    nearest target, else stay.
//!
//! A hall call only counts as a target if the car can arrive there travelling
//! the right way (an up call must be approached from below, a down call from
//! above), because the default boarding policy would refuse the passenger
//! otherwise.  Own car calls are always targets.

use lift_core::{Action, ActionInput, ActionMode, CarId, CombinedAction, Direction, FloorId};
use lift_state::Observation;

use crate::{ControlContext, Controller};

/// Baseline controller.  In combined mode it commands one car per tick,
/// rotating through cars that have something useful to do.
#[derive(Debug, Default)]
pub struct CollectiveController {
    /// Next car to consider first in combined mode.
    cursor: usize,
}

impl CollectiveController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The action this car would take if it were the only one commanded.
    pub fn choose(obs: &Observation, car: CarId, capacity: usize) -> Action {
        let state = obs.car(car);
        if state.door_open {
            return Action::CloseDoor;
        }

        let here = state.floor;
        let has_room = state.load < capacity;
        let hall_here = match state.direction {
            Direction::Up   => obs.hall_up[here.index()],
            Direction::Down => obs.hall_down[here.index()],
            Direction::Idle => obs.hall_up[here.index()] || obs.hall_down[here.index()],
        };
        if obs.car_call(car, here) || (has_room && hall_here) {
            return Action::OpenDoor;
        }

        let targets: Vec<FloorId> = (0..obs.num_floors() as u16)
            .map(FloorId)
            .filter(|&f| f != here && is_target(obs, car, here, f, has_room))
            .collect();

        let above = targets.iter().any(|&f| f > here);
        let below = targets.iter().any(|&f| f < here);
        match state.direction {
            Direction::Up if above => return Action::MoveUp,
            Direction::Down if below => return Action::MoveDown,
            _ => {}
        }

        let nearest = targets
            .iter()
            .min_by_key(|&&f| (f.0 as i32 - here.0 as i32).unsigned_abs());
        match nearest {
            Some(&f) if f > here => Action::MoveUp,
            Some(_) => Action::MoveDown,
            None => Action::Stay,
        }
    }
}

fn is_target(obs: &Observation, car: CarId, here: FloorId, floor: FloorId, has_room: bool) -> bool {
    if obs.car_call(car, floor) {
        return true;
    }
    has_room
        && ((obs.hall_up[floor.index()] && floor > here)
            || (obs.hall_down[floor.index()] && floor < here))
}

impl Controller for CollectiveController {
    fn act(&mut self, ctx: &ControlContext<'_>) -> ActionInput {
        let obs = ctx.observation;
        let n = obs.num_cars();
        match ctx.mode {
            ActionMode::PerCar => ActionInput::PerCar(
                (0..n as u16)
                    .map(|c| Self::choose(obs, CarId(c), ctx.capacity))
                    .collect(),
            ),
            ActionMode::Combined => {
                for offset in 0..n {
                    let car = CarId(((self.cursor + offset) % n) as u16);
                    let action = Self::choose(obs, car, ctx.capacity);
                    if action != Action::Stay {
                        self.cursor = (car.index() + 1) % n;
                        return CombinedAction { car, action }.into();
                    }
                }
                ActionInput::idle(ActionMode::Combined, n)
            }
        }
    }

    fn on_reset(&mut self) {
        self.cursor = 0;
    }
}
