//! Seeded randomness for passenger demand.
//!
//! # Determinism strategy
//!
//! Every environment owns exactly one generator implementing [`DemandRng`].
//! Nothing else in the tick consumes randomness, so a fixed seed plus a fixed
//! action sequence reproduces the same passengers, observations and rewards.
//! There is no global generator: environments stepped side by side (see the
//! batch runner in `lift-sim`) never share state.
//!
//! Batch members get their seeds from [`SimRng::child`], which mixes a root
//! draw with the member offset using the 64-bit golden-ratio constant.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Largest mean sampled in one Knuth pass.  `exp(-30)` is still far from
/// underflow; larger means are split into chunks and summed.
const POISSON_CHUNK: f64 = 30.0;

// ── DemandRng ─────────────────────────────────────────────────────────────────

/// The randomness the demand generator needs.
pub trait DemandRng: Send {
    /// Draw from a Poisson distribution with the given mean.  A mean of zero
    /// (or less) always yields 0.
    fn poisson(&mut self, mean: f64) -> u32;

    /// Uniform index in `0..n`.  `n` is always at least 1.
    fn pick_index(&mut self, n: usize) -> usize;

    /// Restart the sequence from `seed`.
    fn reseed(&mut self, seed: u64);
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Default [`DemandRng`]: a `SmallRng` seeded from a `u64`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.  Used to seed
    /// batch members deterministically from one root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        SimRng::new(self.child_seed(offset))
    }

    /// The seed [`child`](Self::child) would use, without building the rng.
    pub fn child_seed(&mut self, offset: u64) -> u64 {
        self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT)
    }

    /// Knuth's multiplication method for one chunk with `mean <= POISSON_CHUNK`.
    fn poisson_chunk(&mut self, mean: f64) -> u32 {
        let limit = (-mean).exp();
        let mut count = 0u32;
        let mut product: f64 = self.0.r#gen();
        while product > limit {
            count += 1;
            product *= self.0.r#gen::<f64>();
        }
        count
    }
}

impl DemandRng for SimRng {
    fn poisson(&mut self, mean: f64) -> u32 {
        if mean <= 0.0 || !mean.is_finite() {
            return 0;
        }
        let mut remaining = mean;
        let mut total = 0u32;
        while remaining > POISSON_CHUNK {
            total = total.saturating_add(self.poisson_chunk(POISSON_CHUNK));
            remaining -= POISSON_CHUNK;
        }
        total.saturating_add(self.poisson_chunk(remaining))
    }

    #[inline]
    fn pick_index(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }

    fn reseed(&mut self, seed: u64) {
        self.0 = SmallRng::seed_from_u64(seed);
    }
}
