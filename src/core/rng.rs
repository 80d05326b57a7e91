//! Random source for the simulation.
//!
//! The step logic only ever asks for two kinds of draws, so it depends on the
//! small `SimRandom` trait instead of a concrete generator. Production code
//! uses `SimRng` (ChaCha8, seedable for deterministic replays); tests plug in
//! fixed sources.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait SimRandom {
    /// Uniform real in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Uniform integer in `[low, high]`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;
}

pub struct SimRng(ChaCha8Rng);

impl SimRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// Seeded when the user asked for a reproducible run, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => {
                log::debug!("SimRng seeded with {s}");
                Self::from_seed_u64(s)
            }
            None => Self::from_entropy(),
        }
    }
}

impl SimRandom for SimRng {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.0.gen_range(low..high)
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..=high)
    }
}
