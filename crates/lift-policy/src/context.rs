//! Read-only state passed to every controller call.

use lift_core::{ActionMode, Tick};
use lift_state::Observation;

/// Everything a [`Controller`][crate::Controller] may consult when choosing
/// the next action.
///
/// Built by the episode runner once per tick from the latest observation.
/// Borrows end before the engine is stepped again.
pub struct ControlContext<'a> {
    /// Ticks elapsed in the current episode.
    pub tick: Tick,

    /// The shape the returned `ActionInput` must have.
    pub mode: ActionMode,

    /// Maximum riders per car.
    pub capacity: usize,

    /// The observation produced by the previous `reset` or `step`.
    pub observation: &'a Observation,
}

impl<'a> ControlContext<'a> {
    #[inline]
    pub fn new(
        tick:        Tick,
        mode:        ActionMode,
        capacity:    usize,
        observation: &'a Observation,
    ) -> Self {
        Self { tick, mode, capacity, observation }
    }
}
