//! Passenger demand generation.

use lift_core::{DemandRng, FloorId};
use lift_state::FloorStore;

use crate::TickEvent;

/// Spawn new passengers on every floor, ground first.
///
/// Each floor draws a Poisson count with mean `rate`; each arrival gets a
/// destination drawn uniformly from the other floors.  In a one-floor
/// building the counts are still drawn (keeping the random sequence aligned)
/// but nobody is created.  Hall calls for every floor are recomputed at the
/// end.  Returns the number of passengers created.
pub fn spawn_passengers<R: DemandRng>(
    floors: &mut FloorStore,
    rng:    &mut R,
    rate:   f64,
    events: &mut Vec<TickEvent>,
) -> usize {
    let n = floors.count;
    let mut spawned = 0;

    for origin in 0..n {
        let arrivals = rng.poisson(rate) as usize;
        if n < 2 || arrivals == 0 {
            continue;
        }
        let origin_id = FloorId(origin as u16);
        for _ in 0..arrivals {
            // Skip over the origin so every other floor is equally likely.
            let mut dest = rng.pick_index(n - 1);
            if dest >= origin {
                dest += 1;
            }
            floors.push_waiting(origin_id, FloorId(dest as u16));
        }
        spawned += arrivals;
        events.push(TickEvent::Spawned { floor: origin_id, count: arrivals });
    }

    floors.refresh_all();
    spawned
}
