//! Channel wiring for the partition ring and the per-tick exchange.
//!
//! Partitions are arranged in a ring matching the toroidal wrap of the row
//! axis: rank 0's "previous" neighbour is the last rank.  Each adjacent pair
//! is connected by one mpsc channel per direction of travel, created once at
//! startup by [`RingTopology::connect`]; each partition thread then owns its
//! [`PartitionLinks`] endpoint for the life of the run.
//!
//! Every tick, every partition sends exactly one (possibly empty) batch to
//! each neighbour and blocks until it has received one batch from each.
//! Channels are FIFO, so the k-th message on a link always belongs to tick
//! k — the blocking receives are the tick barrier, with no extra
//! synchronisation primitive.

use std::sync::mpsc::{Receiver, Sender, channel};

use ca_agent::Agent;
use ca_core::PartitionId;

use crate::wire::{decode_batch, encode_batch};
use crate::{ExchangeError, ExchangeResult};

/// One partition's endpoint into the migration ring.
pub struct PartitionLinks {
    rank: PartitionId,
    prev: PartitionId,
    next: PartitionId,
    to_prev: Sender<Vec<u8>>,
    to_next: Sender<Vec<u8>>,
    from_prev: Receiver<Vec<u8>>,
    from_next: Receiver<Vec<u8>>,
}

impl PartitionLinks {
    #[inline]
    pub fn rank(&self) -> PartitionId {
        self.rank
    }

    /// The ring neighbours this partition may migrate agents to.
    #[inline]
    pub fn neighbors(&self) -> (PartitionId, PartitionId) {
        (self.prev, self.next)
    }

    /// Ship `outbound` batches and collect whatever the neighbours sent.
    ///
    /// Two-phase: both sends are posted first (mpsc sends never block), then
    /// the two receives block until the neighbours' batches for this tick
    /// arrive.  Inbound agents are returned in deterministic order: the
    /// previous neighbour's batch first, then the next neighbour's.
    ///
    /// A batch destined for a partition that is neither `self.rank` nor a
    /// ring neighbour means an agent out-ran the band adjacency guarantee —
    /// a topology error, fatal to the run.
    pub fn exchange(
        &self,
        mut outbound: std::collections::HashMap<PartitionId, Vec<Agent>, impl std::hash::BuildHasher>,
    ) -> ExchangeResult<Vec<Agent>> {
        let prev_batch = outbound.remove(&self.prev).unwrap_or_default();
        let next_batch = if self.next != self.prev {
            outbound.remove(&self.next).unwrap_or_default()
        } else {
            Vec::new()
        };
        if let Some(&dest) = outbound.keys().next() {
            return Err(ExchangeError::NonAdjacentDestination { from: self.rank, dest });
        }

        self.to_prev
            .send(encode_batch(&prev_batch)?)
            .map_err(|_| self.disconnected(self.prev))?;
        self.to_next
            .send(encode_batch(&next_batch)?)
            .map_err(|_| self.disconnected(self.next))?;

        let mut inbound = decode_batch(
            &self.from_prev.recv().map_err(|_| self.disconnected(self.prev))?,
        )?;
        inbound.extend(decode_batch(
            &self.from_next.recv().map_err(|_| self.disconnected(self.next))?,
        )?);
        Ok(inbound)
    }

    fn disconnected(&self, neighbor: PartitionId) -> ExchangeError {
        ExchangeError::Disconnected { rank: self.rank, neighbor }
    }
}

/// Builds the full set of [`PartitionLinks`], one per partition, wired into
/// a ring.
pub struct RingTopology;

impl RingTopology {
    /// Create channel endpoints for `partitions` ranks.
    ///
    /// `links[r]` is moved into partition `r`'s thread.  A one-partition
    /// ring loops both links back to the owner, which keeps the exchange
    /// code path identical for every partition count.
    pub fn connect(partitions: u32) -> ExchangeResult<Vec<PartitionLinks>> {
        if partitions == 0 {
            return Err(ExchangeError::EmptyRing);
        }
        let n = partitions as usize;
        let prev_of = |r: usize| (r + n - 1) % n;
        let next_of = |r: usize| (r + 1) % n;

        // One channel per (rank, travel direction): up[r] carries rank r's
        // batch to next(r); down[r] carries it to prev(r).  Rank r therefore
        // listens on up[prev(r)] for its previous neighbour and on
        // down[next(r)] for its next neighbour.
        let (up_tx, up_rx): (Vec<Sender<Vec<u8>>>, Vec<Receiver<Vec<u8>>>) =
            (0..n).map(|_| channel()).unzip();
        let (down_tx, down_rx): (Vec<Sender<Vec<u8>>>, Vec<Receiver<Vec<u8>>>) =
            (0..n).map(|_| channel()).unzip();

        let mut up_tx: Vec<_> = up_tx.into_iter().map(Some).collect();
        let mut down_tx: Vec<_> = down_tx.into_iter().map(Some).collect();
        let mut up_rx: Vec<_> = up_rx.into_iter().map(Some).collect();
        let mut down_rx: Vec<_> = down_rx.into_iter().map(Some).collect();

        fn take<T>(slot: &mut Option<T>) -> T {
            slot.take().expect("ring endpoint wired twice")
        }

        let mut links = Vec::with_capacity(n);
        for r in 0..n {
            let prev = prev_of(r);
            let next = next_of(r);
            links.push(PartitionLinks {
                rank: PartitionId(r as u32),
                prev: PartitionId(prev as u32),
                next: PartitionId(next as u32),
                to_prev: take(&mut down_tx[r]),
                to_next: take(&mut up_tx[r]),
                from_prev: take(&mut up_rx[prev]),
                from_next: take(&mut down_rx[next]),
            });
        }
        Ok(links)
    }
}
