use ca_core::PartitionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("cannot build a migration ring for 0 partitions")]
    EmptyRing,

    #[error("{from} produced a batch for non-adjacent partition {dest}")]
    NonAdjacentDestination { from: PartitionId, dest: PartitionId },

    #[error("{rank}: channel to/from neighbour {neighbor} is disconnected")]
    Disconnected { rank: PartitionId, neighbor: PartitionId },

    #[error("wire codec error: {0}")]
    Codec(#[from] bincode::Error),
}

pub type ExchangeResult<T> = Result<T, ExchangeError>;
