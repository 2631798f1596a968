//! What a controller sees after `reset` and after every `step`.

use lift_core::{CarId, Direction, FloorId};

use crate::{CarStore, FloorStore};

/// Values per car in the flat layout: floor, direction, door, load.
const CAR_FIELDS: usize = 4;

/// Public state of one car.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarState {
    pub floor:     FloorId,
    pub direction: Direction,
    pub door_open: bool,
    pub load:      usize,
}

/// A full, owned snapshot of everything a controller may look at.
///
/// Waiting passengers' destinations are not included: a controller only
/// sees the up/down hall buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// One entry per car, ascending `CarId`.
    pub cars:      Vec<CarState>,
    /// One entry per floor, ground first.
    pub hall_up:   Vec<bool>,
    pub hall_down: Vec<bool>,
    /// `car_calls[car][floor]`.
    pub car_calls: Vec<Vec<bool>>,
}

impl Observation {
    /// Copy the controller-visible parts of the stores.
    pub fn capture(cars: &CarStore, floors: &FloorStore) -> Self {
        let states = cars
            .car_ids()
            .map(|c| CarState {
                floor:     cars.floor[c.index()],
                direction: cars.direction[c.index()],
                door_open: cars.door_open[c.index()],
                load:      cars.load(c),
            })
            .collect();
        Self {
            cars:      states,
            hall_up:   floors.hall_up().to_vec(),
            hall_down: floors.hall_down().to_vec(),
            car_calls: cars.car_calls.clone(),
        }
    }

    #[inline]
    pub fn num_cars(&self) -> usize {
        self.cars.len()
    }

    #[inline]
    pub fn num_floors(&self) -> usize {
        self.hall_up.len()
    }

    #[inline]
    pub fn car(&self, car: CarId) -> &CarState {
        &self.cars[car.index()]
    }

    #[inline]
    pub fn car_call(&self, car: CarId, floor: FloorId) -> bool {
        self.car_calls[car.index()][floor.index()]
    }

    /// Length of [`to_flat`](Self::to_flat) for a building of this shape.
    pub fn flat_len(num_cars: usize, num_floors: usize) -> usize {
        num_cars * CAR_FIELDS + 2 * num_floors + num_cars * num_floors
    }

    /// Flatten for learning code:
    ///
    /// ```text
    /// [floor, direction, door_open, load] × cars
    /// hall_up × floors
    /// hall_down × floors
    /// car_calls row-major (car, floor)
    /// ```
    pub fn to_flat(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(Self::flat_len(self.num_cars(), self.num_floors()));
        for c in &self.cars {
            out.push(c.floor.0 as f32);
            out.push(c.direction.as_i8() as f32);
            out.push(if c.door_open { 1.0 } else { 0.0 });
            out.push(c.load as f32);
        }
        let flag = |b: &bool| if *b { 1.0 } else { 0.0 };
        out.extend(self.hall_up.iter().map(flag));
        out.extend(self.hall_down.iter().map(flag));
        for row in &self.car_calls {
            out.extend(row.iter().map(flag));
        }
        out
    }
}
