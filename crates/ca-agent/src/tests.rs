//! Unit tests for agent storage and the occupancy index.

#[cfg(test)]
mod ids {
    use ca_core::PartitionId;
    use ca_core::ids::ID_STRIDE;

    use crate::IdAllocator;

    #[test]
    fn allocation_is_sequential_within_rank() {
        let mut alloc = IdAllocator::new(PartitionId(2));
        let a = alloc.allocate();
        let b = alloc.allocate();
        assert_eq!(a.0, 2 * ID_STRIDE);
        assert_eq!(b.0, 2 * ID_STRIDE + 1);
    }

    #[test]
    fn ranks_never_collide() {
        let mut r0 = IdAllocator::new(PartitionId(0));
        let mut r1 = IdAllocator::new(PartitionId(1));
        let from_r0: Vec<_> = (0..100).map(|_| r0.allocate()).collect();
        let from_r1: Vec<_> = (0..100).map(|_| r1.allocate()).collect();
        for a in &from_r0 {
            assert!(!from_r1.contains(a));
        }
    }
}

#[cfg(test)]
mod occupancy {
    use ca_core::{AgentId, Direction};

    use crate::{Agent, Lane, OccupancyIndex};

    fn lane(x: u32, y: u32, direction: Direction) -> Lane {
        Lane { x, y, direction }
    }

    #[test]
    fn acquire_release_roundtrip() {
        let mut occ = OccupancyIndex::new();
        let l = lane(3, 4, Direction::East);
        occ.acquire(l);
        occ.acquire(l);
        assert_eq!(occ.count(l), 2);
        occ.release(l);
        assert_eq!(occ.count(l), 1);
    }

    #[test]
    fn release_saturates_at_zero() {
        let mut occ = OccupancyIndex::new();
        let l = lane(0, 0, Direction::North);
        occ.release(l);
        assert_eq!(occ.count(l), 0);
    }

    #[test]
    fn has_room_respects_capacity() {
        let mut occ = OccupancyIndex::new();
        let l = lane(1, 1, Direction::West);
        assert!(occ.has_room(l, 1));
        occ.acquire(l);
        assert!(!occ.has_room(l, 1));
        assert!(occ.has_room(l, 2));
    }

    #[test]
    fn directions_are_distinct_lanes() {
        let mut occ = OccupancyIndex::new();
        occ.acquire(lane(2, 2, Direction::North));
        assert_eq!(occ.count(lane(2, 2, Direction::South)), 0);
    }

    #[test]
    fn rebuild_matches_agent_set() {
        let agents = vec![
            Agent { id: AgentId(1), x: 0, y: 0, direction: Direction::East, speed: 0 },
            Agent { id: AgentId(2), x: 0, y: 0, direction: Direction::East, speed: 3 },
            Agent { id: AgentId(3), x: 5, y: 0, direction: Direction::North, speed: 1 },
        ];
        let mut occ = OccupancyIndex::new();
        occ.rebuild(&agents);
        assert_eq!(occ.count(lane(0, 0, Direction::East)), 2);
        assert_eq!(occ.count(lane(5, 0, Direction::North)), 1);
        assert!(occ.within_capacity(2));
        assert!(!occ.within_capacity(1));
    }
}

#[cfg(test)]
mod store {
    use ca_core::{PartitionId, PartitionRng};
    use ca_grid::RoadNetwork;

    use crate::{AgentStore, IdAllocator};

    #[test]
    fn seeds_only_on_traversable_cells_in_band() {
        let road = RoadNetwork::build(20, 20, 5).unwrap();
        let mut alloc = IdAllocator::new(PartitionId(0));
        let mut rng = PartitionRng::new(42, PartitionId(0));
        let store = AgentStore::seed_on_roads(50, &road, 0, 10, 5, &mut alloc, &mut rng);
        assert_eq!(store.len(), 50);
        for agent in store.agents() {
            assert!(agent.y < 10);
            assert!(road.is_traversable(agent.x, agent.y));
            assert!(agent.speed <= 5);
        }
    }

    #[test]
    fn seeded_ids_are_unique() {
        let road = RoadNetwork::build(20, 20, 5).unwrap();
        let mut alloc = IdAllocator::new(PartitionId(1));
        let mut rng = PartitionRng::new(42, PartitionId(1));
        let store = AgentStore::seed_on_roads(30, &road, 10, 20, 3, &mut alloc, &mut rng);
        let mut ids: Vec<_> = store.agents().iter().map(|a| a.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 30);
    }

    #[test]
    fn snapshot_lists_every_agent() {
        let road = RoadNetwork::build(10, 10, 5).unwrap();
        let mut alloc = IdAllocator::new(PartitionId(0));
        let mut rng = PartitionRng::new(7, PartitionId(0));
        let store = AgentStore::seed_on_roads(12, &road, 0, 10, 2, &mut alloc, &mut rng);
        let snap = store.snapshot();
        assert_eq!(snap.len(), 12);
    }
}
