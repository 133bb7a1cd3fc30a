//! `ca-exchange` — inter-partition agent migration for the `rust_ca`
//! traffic automaton.
//!
//! | Module   | Contents                                                  |
//! |----------|-----------------------------------------------------------|
//! | [`wire`] | bincode batch codec for agent records                     |
//! | [`ring`] | `RingTopology` channel wiring, `PartitionLinks::exchange` |
//!
//! Partitions communicate exclusively through this crate: point-to-point
//! message passing with the two ring neighbours, no shared mutable state.
//! The per-tick exchange doubles as the synchronisation barrier — no
//! partition proceeds to the next tick until it has sent both outbound
//! batches and received one batch from each neighbour.

pub mod error;
pub mod ring;
pub mod wire;

#[cfg(test)]
mod tests;

pub use error::{ExchangeError, ExchangeResult};
pub use ring::{PartitionLinks, RingTopology};
