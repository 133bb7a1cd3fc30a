use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("road block spacing must be positive")]
    InvalidBlock,

    #[error("{partitions} partitions cannot cover {height} grid rows")]
    TooManyPartitions { partitions: u32, height: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
