//! The agent record and per-partition ID allocation.

use ca_core::{AgentId, Direction, PartitionId};

use crate::Lane;

/// One vehicle.
///
/// Identity is permanent and survives migration; position and speed are the
/// only mutable state.  This is also the migration wire record — the
/// exchange encodes agents exactly as stored.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,
    pub x: u32,
    pub y: u32,
    pub direction: Direction,
    /// Cells per tick, always in `[0, vmax]`.
    pub speed: u32,
}

impl Agent {
    /// The lane this agent currently occupies.
    #[inline]
    pub fn lane(&self) -> Lane {
        Lane { x: self.x, y: self.y, direction: self.direction }
    }
}

/// Allocates agent IDs from this partition's disjoint numeric range.
///
/// Rank `r` hands out `r * ID_STRIDE, r * ID_STRIDE + 1, …`, so IDs are
/// globally unique without any cross-partition coordination.
pub struct IdAllocator {
    partition: PartitionId,
    next_sequence: u64,
}

impl IdAllocator {
    pub fn new(partition: PartitionId) -> Self {
        Self { partition, next_sequence: 0 }
    }

    pub fn allocate(&mut self) -> AgentId {
        let id = AgentId::from_parts(self.partition, self.next_sequence);
        self.next_sequence += 1;
        id
    }
}
