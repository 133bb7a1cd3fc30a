//! `ca-engine` — the simulation kernel of the `rust_ca` traffic automaton.
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`movement`]  | `MovementEngine`: the per-tick agent update rule       |
//! | [`collision`] | post-migration lane-capacity rebalancing               |
//!
//! The engine is purely local: it reads and writes one partition's agent
//! store and occupancy index and classifies outbound agents by destination
//! partition.  Shipping them is `ca-exchange`'s job.

pub mod collision;
pub mod movement;


pub use movement::{MovementEngine, Outbound};
