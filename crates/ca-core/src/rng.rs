//! Deterministic per-partition RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each partition gets its own independent `SmallRng` seeded by
//! `base_seed + rank`.  This means:
//!
//! - Partitions never share RNG state, so thread scheduling cannot perturb
//!   trajectories — a fixed seed and partition count always reproduce the
//!   same run.
//! - All RNG calls are local to the owning partition thread; no
//!   synchronisation needed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PartitionId;

/// Per-partition deterministic RNG.
///
/// Created once at partition startup and threaded through the movement
/// engine for the life of the run.  The type is `!Sync` to prevent
/// accidental sharing across threads.
pub struct PartitionRng(SmallRng);

impl PartitionRng {
    /// Seed deterministically from the run's base seed and a partition rank.
    pub fn new(base_seed: u64, rank: PartitionId) -> Self {
        PartitionRng(SmallRng::seed_from_u64(base_seed.wrapping_add(rank.0 as u64)))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.  Returns `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
