//! Per-partition wall-clock accounting.
//!
//! The tick loop alternates compute and communication phases; the timer
//! accumulates each separately so the caller can see where a run spends its
//! time as the partition count grows.  Durations are opaque to the core —
//! reduction (mean/max across partitions) happens in the reporting layer.

use std::time::{Duration, Instant};

use ca_core::PartitionId;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Phase {
    Idle,
    Compute,
    Comm,
}

/// Accumulates compute and communication time across ticks.
pub struct StepTimer {
    compute: Duration,
    comm: Duration,
    steps: u64,
    started: Instant,
    phase: Phase,
}

impl StepTimer {
    pub fn new() -> Self {
        Self {
            compute: Duration::ZERO,
            comm: Duration::ZERO,
            steps: 0,
            started: Instant::now(),
            phase: Phase::Idle,
        }
    }

    pub fn start_compute(&mut self) {
        self.started = Instant::now();
        self.phase = Phase::Compute;
    }

    /// Close the compute phase; counts one executed step.
    pub fn end_compute(&mut self) {
        if self.phase == Phase::Compute {
            self.compute += self.started.elapsed();
            self.steps += 1;
        }
        self.phase = Phase::Idle;
    }

    pub fn start_comm(&mut self) {
        self.started = Instant::now();
        self.phase = Phase::Comm;
    }

    pub fn end_comm(&mut self) {
        if self.phase == Phase::Comm {
            self.comm += self.started.elapsed();
        }
        self.phase = Phase::Idle;
    }

    /// Freeze into the end-of-run report for `rank`.
    pub fn into_metrics(self, rank: PartitionId, local_agent_count: usize) -> PartitionMetrics {
        PartitionMetrics {
            rank,
            compute_time: self.compute,
            comm_time: self.comm,
            steps_executed: self.steps,
            local_agent_count,
        }
    }
}

impl Default for StepTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// What one partition reports after its final tick.
///
/// The core never aggregates these; summing counts and averaging timings
/// across partitions belongs to the reporting layer.
#[derive(Copy, Clone, Debug)]
pub struct PartitionMetrics {
    pub rank: PartitionId,
    pub compute_time: Duration,
    pub comm_time: Duration,
    pub steps_executed: u64,
    pub local_agent_count: usize,
}
