//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into `CaError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `ca-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CaError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ca-*` crates.
pub type CaResult<T> = Result<T, CaError>;
