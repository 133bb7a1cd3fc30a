//! Unit tests for the road network and band table.

#[cfg(test)]
mod road {
    use ca_core::Direction;

    use crate::{GridError, RoadNetwork};

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            RoadNetwork::build(0, 10, 5),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(RoadNetwork::build(10, 10, 0), Err(GridError::InvalidBlock)));
    }

    #[test]
    fn lanes_alternate_by_index() {
        // block=5 on a 10x10 grid: vertical lanes at x=0 (N) and x=5 (S),
        // horizontal lanes at y=0 (E) and y=5 (W).
        let net = RoadNetwork::build(10, 10, 5).unwrap();
        assert!(net.allowed(0, 3).contains(Direction::North));
        assert!(net.allowed(5, 3).contains(Direction::South));
        assert!(net.allowed(3, 0).contains(Direction::East));
        assert!(net.allowed(3, 5).contains(Direction::West));
    }

    #[test]
    fn off_lane_cells_are_not_traversable() {
        let net = RoadNetwork::build(10, 10, 5).unwrap();
        assert!(!net.is_traversable(3, 3));
        assert!(net.is_traversable(0, 3));
    }

    #[test]
    fn intersections_span_both_axes() {
        let net = RoadNetwork::build(10, 10, 5).unwrap();
        assert!(net.is_intersection(0, 0));
        assert!(net.is_intersection(5, 5));
        assert!(!net.is_intersection(0, 3)); // vertical lane only
        assert!(!net.is_intersection(3, 0)); // horizontal lane only
    }

    #[test]
    fn step_wraps_all_four_edges() {
        let net = RoadNetwork::build(10, 10, 5).unwrap();
        assert_eq!(net.step(9, 4, Direction::East), (0, 4));
        assert_eq!(net.step(0, 4, Direction::West), (9, 4));
        assert_eq!(net.step(4, 9, Direction::North), (4, 0));
        assert_eq!(net.step(4, 0, Direction::South), (4, 9));
    }

    #[test]
    fn can_depart_requires_lane_and_traversable_neighbour() {
        let net = RoadNetwork::build(10, 10, 5).unwrap();
        // East along the y=0 lane: allowed and next cell is on the same lane.
        assert!(net.can_depart(3, 0, Direction::East));
        // North from a plain horizontal-lane cell: direction not in the set.
        assert!(!net.can_depart(3, 0, Direction::North));
    }

    #[test]
    fn builds_are_identical_across_calls() {
        let a = RoadNetwork::build(30, 20, 7).unwrap();
        let b = RoadNetwork::build(30, 20, 7).unwrap();
        for y in 0..20 {
            for x in 0..30 {
                assert_eq!(a.allowed(x, y), b.allowed(x, y));
            }
        }
    }

    #[test]
    fn traversable_cells_restricted_to_rows() {
        let net = RoadNetwork::build(10, 10, 5).unwrap();
        let cells = net.traversable_cells_in_rows(5, 10);
        assert!(!cells.is_empty());
        assert!(cells.iter().all(|&(_, y)| (5..10).contains(&y)));
    }
}

#[cfg(test)]
mod band {
    use ca_core::PartitionId;

    use crate::BandTable;

    /// Exact coverage with no gaps, overlaps, or >1-row size spread.
    fn check_coverage(partitions: u32, height: u32) {
        let table = BandTable::new(partitions, height).unwrap();
        let mut cursor = 0;
        let mut sizes = Vec::new();
        for r in 0..partitions {
            let (start, end) = table.band(PartitionId(r));
            assert_eq!(start, cursor, "gap or overlap before rank {r}");
            assert!(end > start);
            sizes.push(end - start);
            cursor = end;
        }
        assert_eq!(cursor, height);
        let min = *sizes.iter().min().unwrap();
        let max = *sizes.iter().max().unwrap();
        assert!(max - min <= 1);
    }

    #[test]
    fn coverage_across_shapes() {
        for partitions in 1..=8 {
            for height in partitions..=40 {
                check_coverage(partitions, height);
            }
        }
    }

    #[test]
    fn remainder_rows_go_to_lowest_ranks() {
        // 10 rows over 3 partitions: 4, 3, 3.
        let table = BandTable::new(3, 10).unwrap();
        assert_eq!(table.band(PartitionId(0)), (0, 4));
        assert_eq!(table.band(PartitionId(1)), (4, 7));
        assert_eq!(table.band(PartitionId(2)), (7, 10));
    }

    #[test]
    fn owner_of_agrees_with_bounds() {
        let table = BandTable::new(4, 37).unwrap();
        for y in 0..37 {
            let owner = table.owner_of(y);
            let (start, end) = table.band(owner);
            assert!((start..end).contains(&y), "row {y} misattributed");
        }
    }

    #[test]
    fn ring_wraps_both_ways() {
        let table = BandTable::new(4, 16).unwrap();
        assert_eq!(table.prev(PartitionId(0)), PartitionId(3));
        assert_eq!(table.next(PartitionId(3)), PartitionId(0));
        assert_eq!(table.prev(PartitionId(2)), PartitionId(1));
        assert_eq!(table.next(PartitionId(1)), PartitionId(2));
    }

    #[test]
    fn single_partition_ring_is_self() {
        let table = BandTable::new(1, 10).unwrap();
        assert_eq!(table.prev(PartitionId(0)), PartitionId(0));
        assert_eq!(table.next(PartitionId(0)), PartitionId(0));
    }

    #[test]
    fn rejects_more_partitions_than_rows() {
        assert!(BandTable::new(11, 10).is_err());
        assert!(BandTable::new(0, 10).is_err());
    }
}
