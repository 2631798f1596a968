//! What `reset` and `step` hand back to the caller.

use lift_state::Observation;

use crate::{RewardBreakdown, TickEvent};

/// Episode counters reported alongside every observation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepInfo {
    /// Ticks elapsed in this episode.
    pub step: u64,
    /// Passengers not yet delivered (waiting + riding), after this tick's
    /// arrivals.
    pub waiting: usize,
    /// High-water mark of `waiting` over the episode.
    pub max_passengers: usize,
}

/// Result of one `step`.
#[derive(Clone, Debug)]
pub struct StepResult {
    pub observation: Observation,
    pub reward:      f64,
    /// Always `false`: the environment has no absorbing state.
    pub terminated:  bool,
    /// `true` once the tick count reaches `max_steps`.
    pub truncated:   bool,
    pub info:        StepInfo,
    pub breakdown:   RewardBreakdown,
    /// Everything that happened this tick, in processing order.
    pub events:      Vec<TickEvent>,
}

impl StepResult {
    /// `terminated || truncated`.
    #[inline]
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }

    /// Events concerning one car, in order.
    pub fn events_for(&self, car: lift_core::CarId) -> impl Iterator<Item = &TickEvent> + '_ {
        self.events.iter().filter(move |e| match e {
            TickEvent::Penalty { car: c, .. }
            | TickEvent::Moved { car: c, .. }
            | TickEvent::DoorOpened { car: c, .. }
            | TickEvent::DoorClosed { car: c }
            | TickEvent::Delivered { car: c, .. }
            | TickEvent::Boarded { car: c, .. } => *c == car,
            TickEvent::Spawned { .. } => false,
        })
    }
}
