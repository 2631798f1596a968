//! A controller that never moves anything.

use lift_core::ActionInput;

use crate::{ControlContext, Controller};

/// A [`Controller`] whose every car always stays.
///
/// Useful as a placeholder in tests, and as the "do nothing" baseline: its
/// episode reward is pure waiting cost.
pub struct IdleController;

impl Controller for IdleController {
    fn act(&mut self, ctx: &ControlContext<'_>) -> ActionInput {
        ActionInput::idle(ctx.mode, ctx.observation.num_cars())
    }
}
