//! Controller-driven episode loop.

use lift_core::DemandRng;
use lift_policy::{BoardingPolicy, ControlContext, Controller};
use tracing::info;

use crate::{ElevatorEnv, EnvObserver, SimResult};

/// Totals for one episode driven by [`run_episode`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EpisodeSummary {
    /// Ticks stepped.
    pub ticks:          u64,
    pub total_reward:   f64,
    pub delivered:      usize,
    /// Passengers spawned after `reset` (the initial demand pass excluded).
    pub spawned:        usize,
    /// Soft-failure penalties applied.
    pub penalties:      usize,
    pub max_passengers: usize,
    /// Passengers still waiting or riding when the episode ended.
    pub final_waiting:  usize,
}

/// Reset `env` and step it under `controller` until truncation.
///
/// Observer hooks fire around every tick; `tick` arguments are the tick
/// being processed (0-based).  Snapshots are taken after the step whenever
/// `config.output_interval_ticks` divides that tick.  Stops early only on
/// an input error from the controller.
pub fn run_episode<B, R, C, O>(
    env:        &mut ElevatorEnv<B, R>,
    controller: &mut C,
    observer:   &mut O,
    seed:       Option<u64>,
) -> SimResult<EpisodeSummary>
where
    B: BoardingPolicy,
    R: DemandRng,
    C: Controller + ?Sized,
    O: EnvObserver + ?Sized,
{
    let (mut observation, info) = env.reset(seed);
    controller.on_reset();
    observer.on_reset(&observation, &info);

    let mode     = env.config().action_mode;
    let capacity = env.config().capacity;
    let interval = env.config().output_interval_ticks;
    let end      = env.config().end_tick();

    let mut summary = EpisodeSummary::default();

    loop {
        let now = env.tick();
        if now >= end {
            break;
        }

        let input = {
            let ctx = ControlContext::new(now, mode, capacity, &observation);
            controller.act(&ctx)
        };

        observer.on_tick_start(now);
        let result = env.step(&input)?;

        summary.ticks        += 1;
        summary.total_reward += result.reward;
        summary.delivered    += result.breakdown.delivered;
        summary.spawned      += result.breakdown.spawned;
        summary.penalties    += result.breakdown.penalties;

        observer.on_tick_end(now, &result);
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, env.cars(), env.floors());
        }

        let truncated = result.truncated;
        observation = result.observation;
        if truncated {
            break;
        }
    }

    summary.max_passengers = env.max_passengers();
    summary.final_waiting  = env.total_passengers();
    observer.on_episode_end(&summary);

    info!(
        ticks = summary.ticks,
        reward = summary.total_reward,
        delivered = summary.delivered,
        penalties = summary.penalties,
        "episode finished"
    );
    Ok(summary)
}
