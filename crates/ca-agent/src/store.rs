//! The partition's live agent collection.

use ca_core::{Direction, PartitionRng};
use ca_grid::RoadNetwork;

use crate::{Agent, IdAllocator};

/// All agents currently owned by one partition.
///
/// Agents are held in a plain `Vec` and processed in insertion order; the
/// movement engine swaps in a fresh vec each tick (stayers first, then
/// merged arrivals), which keeps the per-tick iteration order — and with it
/// the whole run — deterministic.
#[derive(Default)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `count` agents uniformly at random on traversable cells within
    /// the band `[y_start, y_end)`, each with a random valid direction and a
    /// random speed in `[0, vmax]`.
    ///
    /// A cell with no departable direction gets North as a placeholder; such
    /// an agent simply halts every tick, it is never an error.
    pub fn seed_on_roads(
        count: u32,
        road: &RoadNetwork,
        y_start: u32,
        y_end: u32,
        vmax: u32,
        alloc: &mut IdAllocator,
        rng: &mut PartitionRng,
    ) -> AgentStore {
        let cells = road.traversable_cells_in_rows(y_start, y_end);
        let mut agents = Vec::with_capacity(count as usize);
        if cells.is_empty() {
            return AgentStore { agents };
        }
        for _ in 0..count {
            let &(x, y) = rng.choose(&cells).unwrap_or(&cells[0]);
            let candidates: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&d| road.can_depart(x, y, d))
                .collect();
            let direction = rng.choose(&candidates).copied().unwrap_or(Direction::North);
            let speed = rng.gen_range(0..=vmax);
            agents.push(Agent { id: alloc.allocate(), x, y, direction, speed });
        }
        AgentStore { agents }
    }

    // ── Access ────────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn agents_mut(&mut self) -> &mut Vec<Agent> {
        &mut self.agents
    }

    /// Replace the whole collection (end-of-movement swap).
    pub fn replace(&mut self, agents: Vec<Agent>) {
        self.agents = agents;
    }

    /// Append migrated-in agents in arrival order.
    pub fn extend(&mut self, inbound: impl IntoIterator<Item = Agent>) {
        self.agents.extend(inbound);
    }

    /// `(x, y, direction)` for every held agent — the snapshot interface
    /// consumed by external rendering/collection layers.
    pub fn snapshot(&self) -> Vec<(u32, u32, Direction)> {
        self.agents.iter().map(|a| (a.x, a.y, a.direction)).collect()
    }
}
