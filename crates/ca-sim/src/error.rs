use ca_core::{CaError, PartitionId};
use ca_exchange::ExchangeError;
use ca_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CaError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error("partition {0} panicked")]
    PartitionPanicked(PartitionId),
}

pub type SimResult<T> = Result<T, SimError>;
