//! One partition's state and tick loop.

use ca_agent::{AgentStore, IdAllocator, OccupancyIndex};
use ca_core::{PartitionId, PartitionRng, SimConfig};
use ca_engine::MovementEngine;
use ca_exchange::PartitionLinks;
use ca_grid::{BandTable, RoadNetwork};
use tracing::{debug, info};

use crate::{PartitionMetrics, SimObserver, SimResult, StepTimer};

/// Everything one rank owns: its band's agents, the occupancy index, the
/// movement engine (with its private copy of the static topology), the RNG,
/// and the channel endpoints into the migration ring.
///
/// Nothing here is shared: each partition recomputes the road network and
/// band table independently — cheap, and it avoids a startup broadcast.
pub struct Partition {
    rank: PartitionId,
    engine: MovementEngine,
    store: AgentStore,
    occ: OccupancyIndex,
    rng: PartitionRng,
    links: PartitionLinks,
    timer: StepTimer,
    snapshot_interval: u64,
}

impl Partition {
    /// Build this rank's full local state from a validated configuration.
    pub fn new(rank: PartitionId, config: &SimConfig, links: PartitionLinks) -> SimResult<Partition> {
        let road = RoadNetwork::build(config.width, config.height, config.block)?;
        let bands = BandTable::new(config.partitions, config.height)?;
        let (y_start, y_end) = bands.band(rank);

        let mut rng = PartitionRng::new(config.seed, rank);
        let mut alloc = IdAllocator::new(rank);
        let store = AgentStore::seed_on_roads(
            config.agents_per_partition(),
            &road,
            y_start,
            y_end,
            config.vmax,
            &mut alloc,
            &mut rng,
        );

        info!(
            rank = rank.0,
            band_start = y_start,
            band_end = y_end,
            agents = store.len(),
            "partition initialised"
        );

        Ok(Partition {
            rank,
            engine: MovementEngine::new(rank, road, bands, config),
            store,
            occ: OccupancyIndex::new(),
            rng,
            links,
            timer: StepTimer::new(),
            snapshot_interval: config.snapshot_interval,
        })
    }

    #[inline]
    pub fn rank(&self) -> PartitionId {
        self.rank
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.store.len()
    }

    /// Run `steps` ticks and return this partition's metrics report.
    pub fn run<O: SimObserver>(mut self, steps: u64, observer: &mut O) -> SimResult<PartitionMetrics> {
        for tick in 0..steps {
            self.tick(tick, observer)?;
        }
        let metrics = self.timer.into_metrics(self.rank, self.store.len());
        observer.on_sim_end(&metrics);
        Ok(metrics)
    }

    /// One full tick: movement, exchange, merge, collision resolution.
    fn tick<O: SimObserver>(&mut self, tick: u64, observer: &mut O) -> SimResult<()> {
        self.timer.start_compute();
        let outbound = self.engine.step(&mut self.store, &mut self.occ, &mut self.rng);
        self.timer.end_compute();

        self.timer.start_comm();
        let inbound = self.links.exchange(outbound)?;
        self.timer.end_comm();

        let migrated_in = inbound.len();
        if migrated_in > 0 {
            self.store.extend(inbound);
            self.engine.resolve_collisions(&mut self.store, &mut self.occ);
            debug!(rank = self.rank.0, tick, migrated_in, "merged inbound agents");
        }

        observer.on_tick_end(tick, self.store.len(), migrated_in);
        if self.snapshot_interval > 0 && tick % self.snapshot_interval == 0 {
            observer.on_snapshot(tick, &self.store.snapshot());
        }
        Ok(())
    }
}
