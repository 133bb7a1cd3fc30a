//! Unit tests for the wire codec and ring exchange.

use std::collections::HashMap;

use ca_agent::Agent;
use ca_core::{AgentId, Direction, PartitionId};

use crate::wire::{decode_batch, encode_batch};
use crate::{ExchangeError, RingTopology};

/// The exchange is generic over the map hasher, so tests can use the std
/// hasher where production code passes `FxHashMap`.
fn outbound(
    batches: impl IntoIterator<Item = (PartitionId, Vec<Agent>)>,
) -> HashMap<PartitionId, Vec<Agent>> {
    batches.into_iter().collect()
}

fn agent(id: u64, x: u32, y: u32) -> Agent {
    Agent { id: AgentId(id), x, y, direction: Direction::South, speed: 2 }
}

#[cfg(test)]
mod wire {
    use super::*;

    #[test]
    fn batch_roundtrip_preserves_records_and_order() {
        let batch = vec![agent(3, 1, 2), agent(1, 5, 0), agent(2, 9, 9)];
        let decoded = decode_batch(&encode_batch(&batch).unwrap()).unwrap();
        assert_eq!(decoded, batch);
    }

    #[test]
    fn empty_batch_is_a_valid_message() {
        let bytes = encode_batch(&[]).unwrap();
        assert!(!bytes.is_empty()); // length prefix still present
        assert_eq!(decode_batch(&bytes).unwrap(), vec![]);
    }

    #[test]
    fn garbage_fails_to_decode() {
        assert!(decode_batch(&[0xff; 3]).is_err());
    }
}

#[cfg(test)]
mod ring {
    use std::thread;

    use super::*;

    #[test]
    fn zero_partitions_is_an_error() {
        assert!(matches!(RingTopology::connect(0), Err(ExchangeError::EmptyRing)));
    }

    #[test]
    fn single_partition_loops_to_itself() {
        let links = RingTopology::connect(1).unwrap();
        assert_eq!(links[0].neighbors(), (PartitionId(0), PartitionId(0)));
        // Nothing outbound: the self-loop still completes the barrier.
        let inbound = links[0].exchange(outbound([])).unwrap();
        assert!(inbound.is_empty());
    }

    #[test]
    fn two_partitions_swap_batches() {
        let mut links = RingTopology::connect(2).unwrap();
        let l1 = links.pop().unwrap();
        let l0 = links.pop().unwrap();

        let handle = thread::spawn(move || {
            l1.exchange(outbound([(PartitionId(0), vec![agent(10, 0, 0)])]))
                .unwrap()
        });
        let inbound0 = l0
            .exchange(outbound([(PartitionId(1), vec![agent(20, 3, 7)])]))
            .unwrap();
        let inbound1 = handle.join().unwrap();

        assert_eq!(inbound0.len(), 1);
        assert_eq!(inbound0[0].id, AgentId(20));
        assert_eq!(inbound1.len(), 1);
        assert_eq!(inbound1[0].id, AgentId(10));
    }

    #[test]
    fn three_partition_ring_routes_to_both_neighbours() {
        let links = RingTopology::connect(3).unwrap();
        let handles: Vec<_> = links
            .into_iter()
            .map(|link| {
                thread::spawn(move || {
                    let rank = link.rank();
                    let (prev, next) = link.neighbors();
                    // Encode the sender and target in the agent id: rank*100 + dest.
                    let out = outbound([
                        (prev, vec![agent((rank.0 * 100 + prev.0) as u64, 0, 0)]),
                        (next, vec![agent((rank.0 * 100 + next.0) as u64, 0, 0)]),
                    ]);
                    (rank, link.exchange(out).unwrap())
                })
            })
            .collect();

        for handle in handles {
            let (rank, inbound) = handle.join().unwrap();
            assert_eq!(inbound.len(), 2, "{rank} expected one batch per neighbour");
            for a in inbound {
                // Every received record was addressed to this rank.
                assert_eq!(a.id.0 % 100, rank.0 as u64);
            }
        }
    }

    #[test]
    fn non_adjacent_destination_is_fatal() {
        let links = RingTopology::connect(4).unwrap();
        let err = links[0]
            .exchange(outbound([(PartitionId(2), vec![agent(1, 0, 0)])]))
            .unwrap_err();
        assert!(matches!(err, ExchangeError::NonAdjacentDestination { .. }));
        // Unblock ranks we never ran: drop the remaining links.
        drop(links);
    }

    #[test]
    fn batches_stay_ordered_across_ticks() {
        // Two ticks back to back: FIFO channels must keep tick k's batch k-th.
        let mut links = RingTopology::connect(2).unwrap();
        let l1 = links.pop().unwrap();
        let l0 = links.pop().unwrap();

        let handle = thread::spawn(move || {
            let first = l1.exchange(outbound([])).unwrap();
            let second = l1.exchange(outbound([])).unwrap();
            (first, second)
        });
        l0.exchange(outbound([(PartitionId(1), vec![agent(1, 0, 0)])])).unwrap();
        l0.exchange(outbound([(PartitionId(1), vec![agent(2, 0, 0)])])).unwrap();

        let (first, second) = handle.join().unwrap();
        assert_eq!(first[0].id, AgentId(1));
        assert_eq!(second[0].id, AgentId(2));
    }
}
