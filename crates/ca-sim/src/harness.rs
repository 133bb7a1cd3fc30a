//! Thread-per-partition orchestration.

use std::thread;

use ca_core::PartitionId;
use ca_core::SimConfig;
use ca_exchange::RingTopology;
use tracing::info;

use crate::{Partition, PartitionMetrics, SimError, SimObserver, SimResult};

/// Run a full simulation: one OS thread per partition, connected in a
/// migration ring.
///
/// `make_observer` is called once per rank on the calling thread; each
/// observer is then moved onto its partition's thread.  Returns every
/// partition's metrics in rank order.
///
/// There is no fault tolerance: if one partition fails (or panics), its
/// channel endpoints drop, its neighbours' blocking receives fail, and the
/// error cascades around the ring until every thread has stopped.  The
/// first rank's error is the one reported.
pub fn run_simulation<O, F>(config: &SimConfig, make_observer: F) -> SimResult<Vec<PartitionMetrics>>
where
    O: SimObserver + Send,
    F: Fn(PartitionId) -> O,
{
    config.validate()?;
    let links = RingTopology::connect(config.partitions)?;

    info!(
        partitions = config.partitions,
        width = config.width,
        height = config.height,
        agents_per_partition = config.agents_per_partition(),
        steps = config.steps,
        "starting simulation"
    );

    let results: Vec<(PartitionId, SimResult<PartitionMetrics>)> = thread::scope(|scope| {
        let handles: Vec<_> = links
            .into_iter()
            .map(|link| {
                let rank = link.rank();
                let mut observer = make_observer(rank);
                let handle = scope.spawn(move || {
                    let partition = Partition::new(rank, config, link)?;
                    partition.run(config.steps, &mut observer)
                });
                (rank, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(rank, handle)| {
                let result = handle
                    .join()
                    .unwrap_or_else(|_| Err(SimError::PartitionPanicked(rank)));
                (rank, result)
            })
            .collect()
    });

    let mut metrics = Vec::with_capacity(results.len());
    for (_, result) in results {
        metrics.push(result?);
    }
    Ok(metrics)
}
