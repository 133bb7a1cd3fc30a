//! The per-tick agent movement rule.
//!
//! For each locally owned agent, in store order:
//!
//! 1. release the current lane slot;
//! 2. at an intersection, turn with probability `p_turn` onto a random
//!    departable direction;
//! 3. accelerate by one up to `vmax`;
//! 4. randomly slow by one with probability `p_slow` (floor 0);
//! 5. advance up to `speed` cells, one per iteration, each gated on
//!    departability and destination-lane capacity; when blocked, try any
//!    departable direction with spare capacity (retries the iteration
//!    without consuming a step), otherwise halt with `speed = 0`;
//! 6. re-acquire the final lane slot;
//! 7. classify by destination row owner: local stayer or outbound migrant.
//!
//! The update is sequential per agent — every advance reads and mutates the
//! shared occupancy counters, so agents are applied one at a time in store
//! order rather than in parallel.

use ca_agent::{Agent, AgentStore, Lane, OccupancyIndex};
use ca_core::{Direction, PartitionId, PartitionRng, SimConfig};
use ca_grid::{BandTable, RoadNetwork};
use rustc_hash::FxHashMap;

use crate::collision;

/// Departing agents grouped by destination partition.
pub type Outbound = FxHashMap<PartitionId, Vec<Agent>>;

/// One partition's movement engine.
///
/// Owns the (immutable) road network and band table plus the tick-rule
/// parameters; the mutable per-tick state (store, occupancy, RNG) is passed
/// in explicitly so its mutation stays scoped to one tick.
pub struct MovementEngine {
    rank: PartitionId,
    road: RoadNetwork,
    bands: BandTable,
    vmax: u32,
    p_slow: f64,
    p_turn: f64,
    lane_capacity: u32,
}

impl MovementEngine {
    pub fn new(rank: PartitionId, road: RoadNetwork, bands: BandTable, config: &SimConfig) -> Self {
        Self {
            rank,
            road,
            bands,
            vmax: config.vmax,
            p_slow: config.p_slow,
            p_turn: config.p_turn,
            lane_capacity: config.lane_capacity,
        }
    }

    #[inline]
    pub fn rank(&self) -> PartitionId {
        self.rank
    }

    #[inline]
    pub fn road(&self) -> &RoadNetwork {
        &self.road
    }

    #[inline]
    pub fn bands(&self) -> &BandTable {
        &self.bands
    }

    // ── Tick update ───────────────────────────────────────────────────────

    /// Apply the movement rule to every local agent.
    ///
    /// Rebuilds the occupancy index from the live agent set first, then
    /// updates agents one at a time.  Stayers are written back to the store
    /// in their original relative order; departing agents are returned
    /// grouped by destination partition.
    pub fn step(
        &self,
        store: &mut AgentStore,
        occ: &mut OccupancyIndex,
        rng: &mut PartitionRng,
    ) -> Outbound {
        occ.rebuild(store.agents());

        let current = std::mem::take(store.agents_mut());
        let mut local = Vec::with_capacity(current.len());
        let mut outbound = Outbound::default();

        for mut agent in current {
            let dest = self.advance_agent(&mut agent, occ, rng);
            if dest == self.rank {
                local.push(agent);
            } else {
                outbound.entry(dest).or_default().push(agent);
            }
        }

        store.replace(local);
        outbound
    }

    /// Rebalance lanes over capacity after a migration merge.
    ///
    /// Call only when at least one agent arrived; repositioning never drops
    /// or duplicates an agent.
    pub fn resolve_collisions(&self, store: &mut AgentStore, occ: &mut OccupancyIndex) {
        collision::resolve(store.agents_mut(), &self.road, occ, self.lane_capacity);
    }

    // ── Per-agent rule ────────────────────────────────────────────────────

    pub(crate) fn advance_agent(
        &self,
        agent: &mut Agent,
        occ: &mut OccupancyIndex,
        rng: &mut PartitionRng,
    ) -> PartitionId {
        occ.release(agent.lane());

        // Turn only at intersections.  Candidates must be departable: the
        // direction is allowed here and the neighbour cell is traversable.
        if self.road.is_intersection(agent.x, agent.y) && rng.gen_bool(self.p_turn) {
            let candidates: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&d| self.road.can_depart(agent.x, agent.y, d))
                .collect();
            if let Some(&d) = rng.choose(&candidates) {
                agent.direction = d;
            }
        }

        // Accelerate toward vmax.
        if agent.speed < self.vmax {
            agent.speed += 1;
        }

        // Random slowdown.
        if rng.gen_bool(self.p_slow) {
            agent.speed = agent.speed.saturating_sub(1);
        }

        // Multi-cell advance: one cell per iteration, capacity-gated.
        let mut steps = agent.speed;
        let (mut x, mut y) = (agent.x, agent.y);
        while steps > 0 {
            let (nx, ny) = self.road.step(x, y, agent.direction);
            let target = Lane { x: nx, y: ny, direction: agent.direction };
            if self.road.can_depart(x, y, agent.direction)
                && occ.has_room(target, self.lane_capacity)
            {
                (x, y) = (nx, ny);
                steps -= 1;
                continue;
            }

            // Blocked: adopt any departable direction with a free destination
            // lane and retry this iteration without consuming a step.
            let turns: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&d| {
                    if !self.road.can_depart(x, y, d) {
                        return false;
                    }
                    let (tx, ty) = self.road.step(x, y, d);
                    occ.has_room(Lane { x: tx, y: ty, direction: d }, self.lane_capacity)
                })
                .collect();
            match rng.choose(&turns) {
                Some(&d) => agent.direction = d,
                None => {
                    // Dead end: hold position for the rest of the tick.
                    agent.speed = 0;
                    break;
                }
            }
        }

        (agent.x, agent.y) = (x, y);
        occ.acquire(agent.lane());
        self.bands.owner_of(agent.y)
    }
}
