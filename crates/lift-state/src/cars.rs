//! `CarStore` — Structure-of-Arrays state for every elevator car.
//!
//! Every `Vec` field has exactly `count` elements and is indexed by
//! `CarId::index()`:
//!
//! ```ignore
//! let here = cars.floor[car.index()];
//! ```
//!
//! A rider is just the destination floor they asked for; a car's load is
//! the length of its `destinations` list.

use lift_core::{CarId, Direction, FloorId};

pub struct CarStore {
    /// Number of cars.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Number of floors the car-call rows span.
    pub num_floors: usize,

    /// Current floor.  Always `< num_floors`.
    pub floor: Vec<FloorId>,

    /// Last effective movement direction.
    pub direction: Vec<Direction>,

    pub door_open: Vec<bool>,

    /// One entry per rider, in boarding order.  Duplicates are expected.
    pub destinations: Vec<Vec<FloorId>>,

    /// `car_calls[car][floor]` — the car still has a rider for `floor`.
    pub car_calls: Vec<Vec<bool>>,
}

impl CarStore {
    /// `count` cars parked at the ground floor, doors closed, empty.
    pub fn new(count: usize, num_floors: usize) -> Self {
        Self {
            count,
            num_floors,
            floor:        vec![FloorId::GROUND; count],
            direction:    vec![Direction::Idle; count],
            door_open:    vec![false; count],
            destinations: vec![Vec::new(); count],
            car_calls:    vec![vec![false; num_floors]; count],
        }
    }

    /// Return every car to its freshly built state, keeping allocations.
    pub fn reset(&mut self) {
        self.floor.fill(FloorId::GROUND);
        self.direction.fill(Direction::Idle);
        self.door_open.fill(false);
        for d in &mut self.destinations {
            d.clear();
        }
        for row in &mut self.car_calls {
            row.fill(false);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `CarId`s in ascending index order.
    pub fn car_ids(&self) -> impl Iterator<Item = CarId> + '_ {
        (0..self.count as u16).map(CarId)
    }

    /// Riders currently in `car`.
    #[inline]
    pub fn load(&self, car: CarId) -> usize {
        self.destinations[car.index()].len()
    }

    /// Riders across all cars.
    pub fn total_riders(&self) -> usize {
        self.destinations.iter().map(Vec::len).sum()
    }

    /// Riders in `car` whose destination is `floor`.
    pub fn riders_for(&self, car: CarId, floor: FloorId) -> usize {
        self.destinations[car.index()]
            .iter()
            .filter(|&&d| d == floor)
            .count()
    }

    /// Remove every rider of `car` bound for `floor`; returns how many left.
    pub fn alight(&mut self, car: CarId, floor: FloorId) -> usize {
        let dests = &mut self.destinations[car.index()];
        let before = dests.len();
        dests.retain(|&d| d != floor);
        before - dests.len()
    }

    /// Clear the call for `floor`, then re-raise one call per distinct
    /// remaining destination.
    pub fn refresh_car_calls(&mut self, car: CarId, floor: FloorId) {
        let i = car.index();
        self.car_calls[i][floor.index()] = false;
        for &d in &self.destinations[i] {
            self.car_calls[i][d.index()] = true;
        }
    }

    /// Add one rider bound for `destination`.  The caller checks capacity.
    pub fn board(&mut self, car: CarId, destination: FloorId) {
        let i = car.index();
        self.destinations[i].push(destination);
        self.car_calls[i][destination.index()] = true;
    }
}
