//! Door/boarding resolution.  Runs once each time a door goes closed → open.

use lift_core::{CarId, RewardConfig};
use lift_policy::BoardingPolicy;
use lift_state::{CarStore, FloorStore};

use crate::reward::TickLedger;

/// Serve the floor `car` is standing on.
///
/// 1. Riders bound for this floor leave (`reward_per_arrival` each).
/// 2. The car call for this floor is cleared and re-raised for every
///    remaining destination.
/// 3. Waiting passengers are offered oldest first; eligible ones board while
///    the car has room.  Once full, nobody else boards.
/// 4. The floor's hall calls are recomputed (inside `take_waiting`).
pub(crate) fn open_door<B: BoardingPolicy>(
    cars:     &mut CarStore,
    floors:   &mut FloorStore,
    car:      CarId,
    capacity: usize,
    policy:   &B,
    rewards:  &RewardConfig,
    ledger:   &mut TickLedger,
) {
    let here = cars.floor[car.index()];

    let delivered = cars.alight(car, here);
    if delivered > 0 {
        ledger.deliver(car, here, delivered, rewards.reward_per_arrival);
    }

    cars.refresh_car_calls(car, here);

    let direction = cars.direction[car.index()];
    let boarded = floors.take_waiting(here, |destination| {
        if !policy.eligible(here, direction, destination) || cars.load(car) >= capacity {
            return false;
        }
        cars.board(car, destination);
        true
    });
    if boarded > 0 {
        ledger.board(car, here, boarded);
    }
}
