//! Simulation observer trait for progress reporting and data collection.

use ca_core::Direction;

use crate::PartitionMetrics;

/// Callbacks invoked by a [`Partition`][crate::Partition] at key points in
/// its tick loop.  One observer instance exists per partition and runs on
/// that partition's thread.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called at the end of each tick, after collision resolution.
    ///
    /// `local_agents` is the partition's post-merge population and
    /// `migrated_in` the number of agents that arrived this tick.
    fn on_tick_end(&mut self, _tick: u64, _local_agents: usize, _migrated_in: usize) {}

    /// Called every `snapshot_interval` ticks (never when the interval is 0)
    /// with the position and heading of every locally held agent.
    ///
    /// This is the hook external rendering/collection layers attach to; the
    /// core produces the list and nothing else.
    fn on_snapshot(&mut self, _tick: u64, _agents: &[(u32, u32, Direction)]) {}

    /// Called once after the final tick, with this partition's report.
    fn on_sim_end(&mut self, _metrics: &PartitionMetrics) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to run a
/// simulation but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
