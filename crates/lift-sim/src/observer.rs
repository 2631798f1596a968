//! Episode observer trait for progress reporting and data collection.

use lift_core::Tick;
use lift_state::{CarStore, FloorStore, Observation};

use crate::{EpisodeSummary, StepInfo, StepResult};

/// Callbacks invoked by [`run_episode`][crate::run_episode] at key points in
/// the episode loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl EnvObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, result: &StepResult) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: reward {:.2}, waiting {}", result.reward, result.info.waiting);
///         }
///     }
/// }
/// ```
pub trait EnvObserver {
    /// Called once after `reset`, with the initial observation.
    fn on_reset(&mut self, _observation: &Observation, _info: &StepInfo) {}

    /// Called before the environment is stepped for `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after tick `tick` has been applied.
    fn on_tick_end(&mut self, _tick: Tick, _result: &StepResult) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), after the step.
    ///
    /// Provides read-only access to the full stores, including waiting-list
    /// contents a controller never sees.
    fn on_snapshot(&mut self, _tick: Tick, _cars: &CarStore, _floors: &FloorStore) {}

    /// Called once after the final tick.
    fn on_episode_end(&mut self, _summary: &EpisodeSummary) {}
}

/// An [`EnvObserver`] that does nothing.
pub struct NoopObserver;

impl EnvObserver for NoopObserver {}
