//! Fluent builder for constructing an [`ElevatorEnv`].

use lift_core::{DemandRng, EnvConfig, SimRng, Tick};
use lift_policy::{BoardingPolicy, DirectionalBoarding};
use lift_state::{CarStore, FloorStore};

use crate::{ElevatorEnv, SimError, SimResult};

/// Fluent builder for [`ElevatorEnv<B, R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                         |
/// |--------------------------|---------------------------------|
/// | `.seed(s)`               | `config.seed`                   |
/// | `.boarding_policy(p)`    | `DirectionalBoarding`           |
/// | `.rng(r)`                | `SimRng`                        |
///
/// The generator is always seeded from the final `config.seed` in
/// [`build`](Self::build), so a custom `rng` only chooses the algorithm.
///
/// # Example
///
/// ```rust,ignore
/// let mut env = EnvBuilder::new(EnvConfig { num_floors: 10, ..EnvConfig::default() })
///     .seed(7)
///     .boarding_policy(UnrestrictedBoarding)
///     .build()?;
/// let (obs, info) = env.reset(None);
/// ```
pub struct EnvBuilder<B: BoardingPolicy = DirectionalBoarding, R: DemandRng = SimRng> {
    config: EnvConfig,
    policy: B,
    rng:    R,
}

impl EnvBuilder {
    /// Create a builder with the default boarding policy and generator.
    pub fn new(config: EnvConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self {
            config,
            policy: DirectionalBoarding,
            rng,
        }
    }
}

impl<B: BoardingPolicy, R: DemandRng> EnvBuilder<B, R> {
    /// Override the master seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use a different boarding eligibility rule.
    pub fn boarding_policy<B2: BoardingPolicy>(self, policy: B2) -> EnvBuilder<B2, R> {
        EnvBuilder {
            config: self.config,
            policy,
            rng:    self.rng,
        }
    }

    /// Use a different demand generator implementation.
    pub fn rng<R2: DemandRng>(self, rng: R2) -> EnvBuilder<B, R2> {
        EnvBuilder {
            config: self.config,
            policy: self.policy,
            rng,
        }
    }

    /// Validate the configuration and return an empty, un-reset environment.
    pub fn build(self) -> SimResult<ElevatorEnv<B, R>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let mut rng = self.rng;
        rng.reseed(self.config.seed);

        Ok(ElevatorEnv {
            cars:           CarStore::new(self.config.num_cars, self.config.num_floors),
            floors:         FloorStore::new(self.config.num_floors),
            config:         self.config,
            policy:         self.policy,
            rng,
            tick:           Tick::ZERO,
            max_passengers: 0,
        })
    }
}
