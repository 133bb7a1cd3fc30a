//! Row-band domain decomposition.
//!
//! The grid's row range `[0, height)` is split into contiguous, near-equal
//! bands, one per partition.  Partitions are logically a ring: rank 0's
//! "previous" neighbour is the last rank, consistent with the toroidal wrap
//! on the row axis (an agent wrapping off the top band arrives in the
//! bottom band's owner).

use ca_core::PartitionId;

use crate::{GridError, GridResult};

/// The half-open row range `[start, end)` owned by each partition, plus the
/// row → owner lookup and ring adjacency.
pub struct BandTable {
    bands: Vec<(u32, u32)>,
    height: u32,
}

impl BandTable {
    /// Divide `height` rows among `partitions` bands.
    ///
    /// Integer division; the first `height % partitions` ranks receive one
    /// extra row.  The union of all bands is exactly `[0, height)` with no
    /// gaps or overlaps, and band sizes differ by at most one row.
    pub fn new(partitions: u32, height: u32) -> GridResult<BandTable> {
        if height == 0 {
            return Err(GridError::InvalidDimensions { width: 1, height });
        }
        if partitions == 0 || partitions > height {
            return Err(GridError::TooManyPartitions { partitions, height });
        }
        let bands = (0..partitions)
            .map(|r| Self::bounds(r, partitions, height))
            .collect();
        Ok(BandTable { bands, height })
    }

    /// Band `[start, end)` for `rank` out of `partitions` over `height` rows.
    pub fn bounds(rank: u32, partitions: u32, height: u32) -> (u32, u32) {
        let base = height / partitions;
        let extra = height % partitions;
        let start = rank * base + rank.min(extra);
        let rows = base + u32::from(rank < extra);
        (start, start + rows)
    }

    #[inline]
    pub fn partition_count(&self) -> u32 {
        self.bands.len() as u32
    }

    /// The row range owned by `rank`.
    #[inline]
    pub fn band(&self, rank: PartitionId) -> (u32, u32) {
        self.bands[rank.index()]
    }

    /// The partition owning row `y`.
    ///
    /// Valid for every `y` in `[0, height)`; callers wrap toroidal
    /// coordinates before asking.  Binary search over the sorted band table.
    pub fn owner_of(&self, y: u32) -> PartitionId {
        debug_assert!(y < self.height);
        let idx = self
            .bands
            .partition_point(|&(_, end)| end <= y);
        PartitionId(idx as u32)
    }

    // ── Ring adjacency ────────────────────────────────────────────────────

    /// The neighbour one band below (wrapping to the last rank at 0).
    #[inline]
    pub fn prev(&self, rank: PartitionId) -> PartitionId {
        let n = self.partition_count();
        PartitionId((rank.0 + n - 1) % n)
    }

    /// The neighbour one band above (wrapping to rank 0 at the top).
    #[inline]
    pub fn next(&self, rank: PartitionId) -> PartitionId {
        PartitionId((rank.0 + 1) % self.partition_count())
    }
}
