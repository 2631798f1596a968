//! Environment configuration.
//!
//! All values are fixed for the lifetime of one environment instance.
//! Applications usually start from [`EnvConfig::default`] and override a few
//! fields, or load the whole struct from JSON with the `serde` feature
//! (missing fields fall back to the defaults).

use crate::{ActionMode, LiftError, LiftResult, Tick};

/// Largest accepted `passenger_spawn_rate`.  Poisson sampling cost grows
/// linearly with the mean.
pub const MAX_SPAWN_RATE: f64 = 64.0;

// ── RewardConfig ──────────────────────────────────────────────────────────────

/// Reward and penalty magnitudes.  Penalties are stored with their sign, so
/// they are added to the tick reward as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardConfig {
    /// Applied once per tick per passenger not yet delivered (waiting or
    /// riding).  Default: −0.1.
    pub reward_per_step_per_waiting: f64,

    /// Applied once per passenger delivered.  Default: 10.0.
    pub reward_per_arrival: f64,

    /// Applied when a move is commanded with the door open.  Default: −10.0.
    pub penalty_door_open_move: f64,

    /// Applied when a move would leave the building.  Default: −1.0.
    pub penalty_boundary: f64,

    /// Applied when a door opens with nobody to drop off or pick up.
    /// Default: −0.5.
    pub penalty_empty_floor_open: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            reward_per_step_per_waiting: -0.1,
            reward_per_arrival:          10.0,
            penalty_door_open_move:      -10.0,
            penalty_boundary:            -1.0,
            penalty_empty_floor_open:    -0.5,
        }
    }
}

impl RewardConfig {
    /// All magnitudes zero: only useful in tests that inspect raw dynamics.
    pub fn zero() -> Self {
        Self {
            reward_per_step_per_waiting: 0.0,
            reward_per_arrival:          0.0,
            penalty_door_open_move:      0.0,
            penalty_boundary:            0.0,
            penalty_empty_floor_open:    0.0,
        }
    }

    fn values(&self) -> [(&'static str, f64); 5] {
        [
            ("reward_per_step_per_waiting", self.reward_per_step_per_waiting),
            ("reward_per_arrival",          self.reward_per_arrival),
            ("penalty_door_open_move",      self.penalty_door_open_move),
            ("penalty_boundary",            self.penalty_boundary),
            ("penalty_empty_floor_open",    self.penalty_empty_floor_open),
        ]
    }
}

// ── EnvConfig ─────────────────────────────────────────────────────────────────

/// Top-level environment configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnvConfig {
    /// Number of building levels.  Default: 20.
    pub num_floors: usize,

    /// Number of elevator cars.  Default: 6.
    pub num_cars: usize,

    /// Maximum riders per car.  Default: 10.
    pub capacity: usize,

    /// Episode length; `truncated` becomes true once this many ticks have
    /// elapsed.  Default: 1000.
    pub max_steps: u64,

    /// Mean Poisson arrivals per floor per tick, at most [`MAX_SPAWN_RATE`].
    /// Default: 0.15.
    pub passenger_spawn_rate: f64,

    /// Shape of the per-tick action input.  Default: `Combined`.
    pub action_mode: ActionMode,

    pub rewards: RewardConfig,

    /// Master RNG seed used when the environment is built.  `reset(Some(s))`
    /// replaces it for the rest of the instance's life.
    pub seed: u64,

    /// Observers get a full state snapshot every N ticks.  0 disables
    /// snapshots.  Default: 1.
    pub output_interval_ticks: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            num_floors:            20,
            num_cars:              6,
            capacity:              10,
            max_steps:             1_000,
            passenger_spawn_rate:  0.15,
            action_mode:           ActionMode::Combined,
            rewards:               RewardConfig::default(),
            seed:                  0,
            output_interval_ticks: 1,
        }
    }
}

impl EnvConfig {
    /// The tick at which episodes are truncated.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_steps)
    }

    /// Check structural limits.  Called by the environment builder.
    pub fn validate(&self) -> LiftResult<()> {
        if self.num_floors == 0 {
            return Err(LiftError::Config("num_floors must be at least 1".into()));
        }
        if self.num_floors > u16::MAX as usize {
            return Err(LiftError::Config(format!(
                "num_floors {} exceeds {}", self.num_floors, u16::MAX
            )));
        }
        if self.num_cars == 0 {
            return Err(LiftError::Config("num_cars must be at least 1".into()));
        }
        if self.num_cars > u16::MAX as usize {
            return Err(LiftError::Config(format!(
                "num_cars {} exceeds {}", self.num_cars, u16::MAX
            )));
        }
        if self.capacity == 0 {
            return Err(LiftError::Config("capacity must be at least 1".into()));
        }
        if !(0.0..=MAX_SPAWN_RATE).contains(&self.passenger_spawn_rate) {
            return Err(LiftError::Config(format!(
                "passenger_spawn_rate must be in [0, {MAX_SPAWN_RATE}], got {}",
                self.passenger_spawn_rate
            )));
        }
        for (name, value) in self.rewards.values() {
            if !value.is_finite() {
                return Err(LiftError::Config(format!("{name} must be finite, got {value}")));
            }
        }
        Ok(())
    }
}
