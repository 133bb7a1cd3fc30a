//! Top-level simulation configuration and startup validation.

use crate::{CaError, CaResult};

/// Everything a run needs, typically filled in from CLI flags.
///
/// Configuration errors are the only fatal startup errors the simulation
/// defines: [`SimConfig::validate`] must pass before any simulation state is
/// built.  All later conditions (capacity contention, movement dead-ends)
/// are handled in-model and never raise.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells (rows; this is the partitioned axis).
    pub height: u32,
    /// Ticks to simulate.
    pub steps: u64,
    /// Total agents across all partitions, divided evenly at startup.
    pub agents: u32,
    /// Maximum agent speed in cells per tick.
    pub vmax: u32,
    /// Probability of random slowdown per tick.
    pub p_slow: f64,
    /// Probability of turning at an intersection per tick.
    pub p_turn: f64,
    /// Road spacing: one lane every `block` rows/columns.
    pub block: u32,
    /// Maximum agents per `(cell, direction)` lane.
    pub lane_capacity: u32,
    /// Number of cooperating partitions (row bands).
    pub partitions: u32,
    /// Base RNG seed; partition `r` uses `seed + r`.
    pub seed: u64,
    /// Emit a snapshot every N ticks; 0 disables snapshots.
    pub snapshot_interval: u64,
}

impl SimConfig {
    /// Validate before building any simulation state.  Fail-fast with a
    /// descriptive message, per the error taxonomy.
    pub fn validate(&self) -> CaResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CaError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.block == 0 {
            return Err(CaError::Config("road block spacing must be positive".into()));
        }
        if self.lane_capacity == 0 {
            return Err(CaError::Config("lane capacity must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.p_slow) {
            return Err(CaError::Config(format!(
                "p_slow must be in [0, 1], got {}",
                self.p_slow
            )));
        }
        if !(0.0..=1.0).contains(&self.p_turn) {
            return Err(CaError::Config(format!(
                "p_turn must be in [0, 1], got {}",
                self.p_turn
            )));
        }
        if self.partitions == 0 {
            return Err(CaError::Config("partition count must be at least 1".into()));
        }
        if self.partitions > self.height {
            return Err(CaError::Config(format!(
                "{} partitions cannot cover {} grid rows",
                self.partitions, self.height
            )));
        }
        // Migration is wired only between ring-adjacent bands, so one tick's
        // advance must never cross more than one band boundary.
        if self.partitions > 1 && self.height / self.partitions < self.vmax {
            return Err(CaError::Config(format!(
                "band of {} rows is smaller than vmax={}; agents could out-run \
                 the neighbour exchange",
                self.height / self.partitions,
                self.vmax
            )));
        }
        Ok(())
    }

    /// Agents each partition seeds at startup (`agents` divided evenly;
    /// remainder agents are simply not created, matching even division).
    #[inline]
    pub fn agents_per_partition(&self) -> u32 {
        self.agents / self.partitions
    }
}

impl Default for SimConfig {
    /// Defaults mirror the reference benchmark configuration.
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            steps: 200,
            agents: 500,
            vmax: 5,
            p_slow: 0.2,
            p_turn: 0.2,
            block: 10,
            lane_capacity: 2,
            partitions: 1,
            seed: 42,
            snapshot_interval: 0,
        }
    }
}
