//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` for
//! direct arithmetic (ring-neighbour math, metrics rows), but callers should
//! prefer the named helpers where one exists.

use std::fmt;

/// Agent-ID range reserved per partition.  Rank `r` allocates IDs in
/// `[r * ID_STRIDE, (r + 1) * ID_STRIDE)`, so uniqueness needs no
/// cross-partition coordination.
pub const ID_STRIDE: u64 = 1_000_000;

// ── AgentId ───────────────────────────────────────────────────────────────────

/// Globally unique agent identity.  Survives migration between partitions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u64);

impl AgentId {
    /// The `sequence`-th ID of `partition`'s disjoint range.
    #[inline]
    pub fn from_parts(partition: PartitionId, sequence: u64) -> AgentId {
        debug_assert!(sequence < ID_STRIDE);
        AgentId(partition.0 as u64 * ID_STRIDE + sequence)
    }

    /// The partition that originally allocated this ID.  Not necessarily the
    /// current owner — agents migrate.
    #[inline]
    pub fn home_partition(self) -> PartitionId {
        PartitionId((self.0 / ID_STRIDE) as u32)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

// ── PartitionId ───────────────────────────────────────────────────────────────

/// Index of one of the cooperating partitions (a "rank").
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionId(pub u32);

impl PartitionId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rank{}", self.0)
    }
}

impl From<PartitionId> for usize {
    #[inline(always)]
    fn from(id: PartitionId) -> usize {
        id.0 as usize
    }
}
