//! `ca-agent` — per-partition agent state for the `rust_ca` traffic automaton.
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`agent`]     | `Agent` record, `IdAllocator`                       |
//! | [`store`]     | `AgentStore` (the partition's live agent set)       |
//! | [`occupancy`] | `Lane` key, `OccupancyIndex` per-lane counters      |
//!
//! Everything here is exclusively owned by one partition; there is no shared
//! mutable state across partitions.

pub mod agent;
pub mod occupancy;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Agent, IdAllocator};
pub use occupancy::{Lane, OccupancyIndex};
pub use store::AgentStore;
