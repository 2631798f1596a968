//! Several independent environments stepped together.

use lift_core::{ActionInput, EnvConfig, SimRng};
use lift_policy::{BoardingPolicy, DirectionalBoarding};
use lift_state::Observation;

use crate::{ElevatorEnv, EnvBuilder, SimError, SimResult, StepInfo, StepResult};

/// A fixed-size batch of environments sharing one configuration.
///
/// Member `i` is seeded with `SimRng::child_seed(i)` drawn from a root
/// generator seeded with `config.seed`, so a batch is reproducible from a
/// single number.  Members share no state; with the `parallel` feature
/// [`step_all`](Self::step_all) runs them on Rayon's pool and produces the
/// same results as the sequential path.
pub struct EnvBatch<B: BoardingPolicy + Clone = DirectionalBoarding> {
    envs:  Vec<ElevatorEnv<B, SimRng>>,
    seeds: Vec<u64>,
}

impl EnvBatch {
    /// Build `size` environments with the default boarding policy.
    pub fn new(config: EnvConfig, size: usize) -> SimResult<Self> {
        Self::with_policy(config, size, DirectionalBoarding)
    }
}

impl<B: BoardingPolicy + Clone> EnvBatch<B> {
    pub fn with_policy(config: EnvConfig, size: usize, policy: B) -> SimResult<Self> {
        if size == 0 {
            return Err(SimError::Config("batch size must be at least 1".into()));
        }

        let mut root = SimRng::new(config.seed);
        let mut envs  = Vec::with_capacity(size);
        let mut seeds = Vec::with_capacity(size);
        for i in 0..size {
            let seed = root.child_seed(i as u64);
            let env = EnvBuilder::new(config.clone())
                .seed(seed)
                .boarding_policy(policy.clone())
                .build()?;
            envs.push(env);
            seeds.push(seed);
        }
        Ok(Self { envs, seeds })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.envs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }

    /// Per-member seeds, in member order.
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    pub fn envs(&self) -> &[ElevatorEnv<B, SimRng>] {
        &self.envs
    }

    /// Reset every member with its own seed.
    pub fn reset_all(&mut self) -> Vec<(Observation, StepInfo)> {
        self.envs
            .iter_mut()
            .zip(&self.seeds)
            .map(|(env, &seed)| env.reset(Some(seed)))
            .collect()
    }

    /// Step every member with its own input.
    ///
    /// All inputs are checked before any member is stepped, so a malformed
    /// input leaves the whole batch untouched.
    pub fn step_all(&mut self, inputs: &[ActionInput]) -> SimResult<Vec<StepResult>> {
        if inputs.len() != self.envs.len() {
            return Err(SimError::BatchSizeMismatch {
                expected: self.envs.len(),
                got:      inputs.len(),
            });
        }
        for (env, input) in self.envs.iter().zip(inputs) {
            env.config().action_mode.decode(input, env.config().num_cars)?;
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.envs
                .iter_mut()
                .zip(inputs)
                .map(|(env, input)| env.step(input))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.envs
                .par_iter_mut()
                .zip(inputs.par_iter())
                .map(|(env, input)| env.step(input))
                .collect()
        }
    }
}
