//! Transient per-lane occupancy counters.
//!
//! A *lane* is one `(cell, direction)` combination; at most `lane_capacity`
//! agents may occupy it simultaneously.  The index is rebuilt from the live
//! agent set at the start of every tick, mutated incrementally as agents
//! move within the tick, and owned exclusively by the partition's tick
//! routine — it is never shared across ticks or threads.
//!
//! The capacity invariant (every count ≤ `lane_capacity`) may be violated
//! transiently between migration merge and collision resolution; the
//! resolver closes that window before the tick completes.

use ca_core::Direction;
use rustc_hash::FxHashMap;

use crate::Agent;

/// `(x, y, direction)` lane key.  `Ord` so resolver passes can iterate
/// lanes in a deterministic order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Lane {
    pub x: u32,
    pub y: u32,
    pub direction: Direction,
}

/// Count of agents per lane.  Absent key means zero.
#[derive(Default)]
pub struct OccupancyIndex {
    counts: FxHashMap<Lane, u32>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all counts and re-derive them from `agents`.
    pub fn rebuild(&mut self, agents: &[Agent]) {
        self.counts.clear();
        for agent in agents {
            self.acquire(agent.lane());
        }
    }

    /// Discard all counts and load explicit per-lane totals.  Used by the
    /// collision resolver, which already has agents grouped by lane.
    pub fn rebuild_from_counts(&mut self, lanes: impl IntoIterator<Item = (Lane, u32)>) {
        self.counts.clear();
        for (lane, count) in lanes {
            if count > 0 {
                self.counts.insert(lane, count);
            }
        }
    }

    /// Current count for `lane`.
    #[inline]
    pub fn count(&self, lane: Lane) -> u32 {
        self.counts.get(&lane).copied().unwrap_or(0)
    }

    /// `true` while `lane` is strictly below `capacity`.
    #[inline]
    pub fn has_room(&self, lane: Lane, capacity: u32) -> bool {
        self.count(lane) < capacity
    }

    /// Take one slot in `lane`.
    #[inline]
    pub fn acquire(&mut self, lane: Lane) {
        *self.counts.entry(lane).or_insert(0) += 1;
    }

    /// Give back one slot in `lane`.  Saturates at zero so a release for an
    /// agent that was never counted (fresh arrival) cannot underflow.
    #[inline]
    pub fn release(&mut self, lane: Lane) {
        if let Some(count) = self.counts.get_mut(&lane) {
            *count = count.saturating_sub(1);
        }
    }

    /// `true` when every lane respects `capacity`.  Test/debug helper.
    pub fn within_capacity(&self, capacity: u32) -> bool {
        self.counts.values().all(|&c| c <= capacity)
    }
}
