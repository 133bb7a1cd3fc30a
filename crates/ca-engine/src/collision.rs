//! Post-migration lane-capacity rebalancing.
//!
//! Inbound agents are appended to the store without capacity checks, so a
//! lane can transiently exceed `lane_capacity` after a merge.  This pass
//! closes that window: surplus agents are re-pointed at an alternate
//! direction at the same cell when one has room, and otherwise left where
//! they are — capacity is a soft constraint under contention, never a
//! reason to lose an agent.

use ca_agent::{Agent, Lane, OccupancyIndex};
use ca_core::Direction;
use ca_grid::RoadNetwork;
use rustc_hash::FxHashMap;

/// Enforce `capacity` on every lane of `agents`, repositioning surplus
/// agents in place.
///
/// Deterministic tie-break: lanes are processed in ascending key order and
/// each group in ascending agent-id order, so which agents keep their slot
/// does not depend on map iteration order.  Which agent is displaced is not
/// part of the contract — only that capacity is restored where possible and
/// no agent is dropped or duplicated.
pub fn resolve(
    agents: &mut Vec<Agent>,
    road: &RoadNetwork,
    occ: &mut OccupancyIndex,
    capacity: u32,
) {
    let mut buckets: FxHashMap<Lane, Vec<Agent>> = FxHashMap::default();
    for agent in agents.drain(..) {
        buckets.entry(agent.lane()).or_default().push(agent);
    }

    let mut lanes: Vec<Lane> = buckets.keys().copied().collect();
    lanes.sort_unstable();

    // Seed counts from the bucket sizes so relocation checks see the full
    // post-merge picture, over-capacity lanes included.
    occ.rebuild_from_counts(lanes.iter().map(|&l| (l, buckets[&l].len() as u32)));

    let mut survivors = Vec::with_capacity(buckets.values().map(Vec::len).sum());
    for lane in lanes {
        let mut group = buckets.remove(&lane).unwrap_or_default();
        if group.len() <= capacity as usize {
            survivors.append(&mut group);
            continue;
        }

        group.sort_unstable_by_key(|a| a.id);
        for (i, mut agent) in group.into_iter().enumerate() {
            if i < capacity as usize {
                survivors.push(agent);
                continue;
            }
            // Surplus: first alternate direction at this cell with room, in
            // canonical N, S, E, W order.  Stays put if none fits.
            let alt = Direction::ALL.into_iter().find(|&d| {
                d != lane.direction
                    && road.allowed(lane.x, lane.y).contains(d)
                    && occ.has_room(Lane { x: lane.x, y: lane.y, direction: d }, capacity)
            });
            if let Some(d) = alt {
                occ.release(agent.lane());
                agent.direction = d;
                occ.acquire(agent.lane());
            }
            survivors.push(agent);
        }
    }

    *agents = survivors;
    occ.rebuild(agents);
}
