//! Deterministic per-candidate random streams.
//!
//! Every stream is derived from one base seed, a phase tag and a candidate
//! index. A candidate's draws therefore never depend on which worker ran it or
//! in what order, and no random state is shared between workers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const INIT_TAG: u64 = 0;

/// Factory for independent, reproducible random streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngPool {
    base_seed: u64,
}

impl RngPool {
    /// Creates a pool from `seed`, or from OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let base_seed = seed.unwrap_or_else(|| rand::rng().random());
        Self { base_seed }
    }

    /// The seed every stream is derived from.
    ///
    /// Passing it back as `seed` replays an entropy-seeded run.
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Stream for one candidate within one phase.
    pub fn stream(&self, tag: u64, index: usize) -> StdRng {
        let seed = self
            .base_seed
            .wrapping_add(tag << 32)
            .wrapping_add(index as u64);
        StdRng::seed_from_u64(seed)
    }

    /// Stream used to draw the initial position of candidate `index`.
    pub fn init_stream(&self, index: usize) -> StdRng {
        self.stream(INIT_TAG, index)
    }

    /// Stream used by candidate `index` during `generation` (0-based).
    pub fn generation_stream(&self, generation: usize, index: usize) -> StdRng {
        self.stream(generation as u64 + 1, index)
    }
}
