//! `ca-grid` — static topology for the `rust_ca` traffic automaton.
//!
//! Two immutable lookups, both computed once at startup:
//!
//! | Module   | Contents                                                   |
//! |----------|------------------------------------------------------------|
//! | [`road`] | `RoadNetwork`: cell → allowed-departure-direction set      |
//! | [`band`] | `BandTable`: row → owning partition, ring adjacency        |
//!
//! Both are pure functions of the configuration, so every partition
//! reconstructs them independently and obtains identical results — no
//! startup broadcast needed.

pub mod band;
pub mod error;
pub mod road;

#[cfg(test)]
mod tests;

pub use band::BandTable;
pub use error::{GridError, GridResult};
pub use road::RoadNetwork;
