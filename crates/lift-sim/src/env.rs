//! The `ElevatorEnv` struct: state plus `reset` / `step`.

use lift_core::{ActionInput, CarId, DemandRng, EnvConfig, SimRng, Tick};
use lift_policy::{BoardingPolicy, DirectionalBoarding};
use lift_state::{CarStore, FloorStore, Observation};
use tracing::{debug, info};

use crate::demand::spawn_passengers;
use crate::resolver::resolve_action;
use crate::reward::TickLedger;
use crate::{SimResult, StepInfo, StepResult};

/// A single elevator environment instance.
///
/// `ElevatorEnv<B, R>` owns every piece of mutable simulation state: the car
/// and floor stores, the episode counters, and its own random generator.
/// Nothing else may mutate that state; callers only `reset` and `step`.
///
/// Create via [`EnvBuilder`][crate::EnvBuilder].  A freshly built
/// environment is an empty building; call [`reset`](Self::reset) to seed the
/// first passengers before stepping.
pub struct ElevatorEnv<B: BoardingPolicy = DirectionalBoarding, R: DemandRng = SimRng> {
    pub(crate) config: EnvConfig,

    pub(crate) cars: CarStore,

    pub(crate) floors: FloorStore,

    /// Who may board an opening car.
    pub(crate) policy: B,

    /// Demand randomness.  The only source of non-determinism in a tick.
    pub(crate) rng: R,

    /// Ticks elapsed in the current episode.
    pub(crate) tick: Tick,

    /// High-water mark of waiting + riding passengers this episode.
    pub(crate) max_passengers: usize,
}

impl<B: BoardingPolicy, R: DemandRng> ElevatorEnv<B, R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Start a new episode.
    ///
    /// Every car returns to the ground floor with its door closed and no
    /// riders, every floor is emptied, and counters restart.  The generator
    /// is reseeded only when `seed` is given; otherwise its sequence simply
    /// continues.  One demand pass then seeds the initial passengers.
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, StepInfo) {
        if let Some(s) = seed {
            self.rng.reseed(s);
        }
        self.cars.reset();
        self.floors.reset();
        self.tick = Tick::ZERO;

        let mut events = Vec::new();
        let spawned = spawn_passengers(
            &mut self.floors,
            &mut self.rng,
            self.config.passenger_spawn_rate,
            &mut events,
        );
        self.max_passengers = self.total_passengers();

        info!(
            seed = ?seed,
            floors = self.config.num_floors,
            cars = self.config.num_cars,
            spawned,
            "episode reset"
        );
        (self.observation(), self.info())
    }

    /// Advance one tick.
    ///
    /// Fails only on malformed input (wrong shape for the configured action
    /// mode, or a per-car vector of the wrong length), and then before any
    /// state changes.  Every other problem with the commanded actions is a
    /// reward penalty.
    ///
    /// Stepping past `max_steps` is allowed; `truncated` stays `true`.
    pub fn step(&mut self, input: &ActionInput) -> SimResult<StepResult> {
        let actions = self.config.action_mode.decode(input, self.cars.count)?;

        let mut ledger = TickLedger::default();

        // Ascending CarId: a later car sees waiting lists as earlier cars
        // left them this tick.
        for (i, action) in actions.into_iter().enumerate() {
            resolve_action(
                &mut self.cars,
                &mut self.floors,
                CarId(i as u16),
                action,
                &self.config,
                &self.policy,
                &mut ledger,
            );
        }

        let backlog = self.total_passengers();
        ledger.charge_backlog(backlog, self.config.rewards.reward_per_step_per_waiting);

        let spawned = spawn_passengers(
            &mut self.floors,
            &mut self.rng,
            self.config.passenger_spawn_rate,
            &mut ledger.events,
        );
        ledger.breakdown.spawned = spawned;

        self.tick.advance();
        self.max_passengers = self.max_passengers.max(self.total_passengers());
        let truncated = self.is_truncated();

        debug!(
            tick = self.tick.0,
            reward = ledger.reward,
            backlog,
            delivered = ledger.breakdown.delivered,
            spawned,
            "step"
        );

        Ok(StepResult {
            observation: self.observation(),
            reward:      ledger.reward,
            terminated:  false,
            truncated,
            info:        self.info(),
            breakdown:   ledger.breakdown,
            events:      ledger.events,
        })
    }

    // ── Read-only views ───────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn cars(&self) -> &CarStore {
        &self.cars
    }

    #[inline]
    pub fn floors(&self) -> &FloorStore {
        &self.floors
    }

    #[inline]
    pub fn max_passengers(&self) -> usize {
        self.max_passengers
    }

    /// Passengers not yet delivered: waiting on floors plus riding in cars.
    pub fn total_passengers(&self) -> usize {
        self.floors.total_waiting() + self.cars.total_riders()
    }

    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.tick >= self.config.end_tick()
    }

    pub fn observation(&self) -> Observation {
        Observation::capture(&self.cars, &self.floors)
    }

    pub fn info(&self) -> StepInfo {
        StepInfo {
            step:           self.tick.0,
            waiting:        self.total_passengers(),
            max_passengers: self.max_passengers,
        }
    }
}
