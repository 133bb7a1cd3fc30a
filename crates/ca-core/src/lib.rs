//! `ca-core` — foundational types for the `rust_ca` traffic automaton.
//!
//! This crate is a dependency of every other `ca-*` crate.  It intentionally
//! has no `ca-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`ids`]       | `AgentId`, `PartitionId`                          |
//! | [`direction`] | `Direction` compass enum, `DirSet` bitset         |
//! | [`config`]    | `SimConfig` and startup validation                |
//! | [`rng`]       | `PartitionRng` (per-partition deterministic RNG)  |
//! | [`error`]     | `CaError`, `CaResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                             |
//! |---------|--------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types; required by `ca-exchange`. |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use direction::{DirSet, Direction};
pub use error::{CaError, CaResult};
pub use ids::{AgentId, PartitionId};
pub use rng::PartitionRng;
