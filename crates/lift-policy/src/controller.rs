//! The `Controller` trait: the caller-side extension point.

use lift_core::ActionInput;

use crate::ControlContext;

/// Chooses one tick's action input from the latest observation.
///
/// Controllers may keep state between calls (round-robin cursors, recurrent
/// memory, …), hence `&mut self`.  They must return input matching
/// `ctx.mode`; a mismatched shape makes the engine's `step` fail without
/// applying the tick.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysOpen;
///
/// impl Controller for AlwaysOpen {
///     fn act(&mut self, ctx: &ControlContext<'_>) -> ActionInput {
///         let n = ctx.observation.num_cars();
///         ActionInput::PerCar(vec![Action::OpenDoor; n])
///     }
/// }
/// ```
pub trait Controller {
    fn act(&mut self, ctx: &ControlContext<'_>) -> ActionInput;

    /// Called when a new episode starts.  Default: nothing to forget.
    fn on_reset(&mut self) {}
}
