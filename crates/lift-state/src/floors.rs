//! `FloorStore` — who is waiting where, and the hall calls derived from it.
//!
//! Hall calls are never written directly.  Every method that changes a
//! waiting list finishes by recomputing that floor's flags, except
//! [`push_waiting`](FloorStore::push_waiting), whose callers batch the
//! recomputation with [`refresh_all`](FloorStore::refresh_all).

use lift_core::FloorId;

pub struct FloorStore {
    /// Number of floors.  Equals the length of every `Vec`.
    pub count: usize,

    /// Destinations of the passengers waiting on each floor, oldest first.
    waiting: Vec<Vec<FloorId>>,

    /// Someone on this floor wants to go up.
    hall_up: Vec<bool>,

    /// Someone on this floor wants to go down.
    hall_down: Vec<bool>,
}

impl FloorStore {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            waiting:   vec![Vec::new(); count],
            hall_up:   vec![false; count],
            hall_down: vec![false; count],
        }
    }

    /// Empty every floor, keeping allocations.
    pub fn reset(&mut self) {
        for w in &mut self.waiting {
            w.clear();
        }
        self.hall_up.fill(false);
        self.hall_down.fill(false);
    }

    /// Iterator over all `FloorId`s from the ground up.
    pub fn floor_ids(&self) -> impl Iterator<Item = FloorId> + '_ {
        (0..self.count as u16).map(FloorId)
    }

    #[inline]
    pub fn waiting_at(&self, floor: FloorId) -> &[FloorId] {
        &self.waiting[floor.index()]
    }

    #[inline]
    pub fn hall_up(&self) -> &[bool] {
        &self.hall_up
    }

    #[inline]
    pub fn hall_down(&self) -> &[bool] {
        &self.hall_down
    }

    /// Passengers waiting across all floors.
    pub fn total_waiting(&self) -> usize {
        self.waiting.iter().map(Vec::len).sum()
    }

    /// Append a new arrival.  Hall calls are NOT refreshed.
    #[inline]
    pub fn push_waiting(&mut self, origin: FloorId, destination: FloorId) {
        self.waiting[origin.index()].push(destination);
    }

    /// Recompute one floor's hall calls from its waiting list.
    pub fn refresh_hall_calls(&mut self, floor: FloorId) {
        let i = floor.index();
        let waiting = &self.waiting[i];
        self.hall_up[i] = waiting.iter().any(|&d| d > floor);
        self.hall_down[i] = waiting.iter().any(|&d| d < floor);
    }

    pub fn refresh_all(&mut self) {
        for i in 0..self.count {
            self.refresh_hall_calls(FloorId(i as u16));
        }
    }

    /// Offer each waiting passenger at `floor` to `take`, oldest first.
    ///
    /// Passengers for whom `take` returns `true` leave the floor; everyone
    /// else stays in their original relative order.  Hall calls are
    /// refreshed afterwards.  Returns the number of passengers taken.
    pub fn take_waiting<F>(&mut self, floor: FloorId, mut take: F) -> usize
    where
        F: FnMut(FloorId) -> bool,
    {
        let i = floor.index();
        let before = self.waiting[i].len();
        self.waiting[i].retain(|&d| !take(d));
        let taken = before - self.waiting[i].len();
        self.refresh_hall_calls(floor);
        taken
    }
}
