//! `ca-sim` — simulation runner for the `rust_ca` traffic automaton.
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`partition`] | `Partition`: one rank's state and tick loop           |
//! | [`harness`]   | `run_simulation`: thread-per-partition orchestration  |
//! | [`metrics`]   | `StepTimer`, `PartitionMetrics`                       |
//! | [`observer`]  | `SimObserver` callbacks, `NoopObserver`               |
//!
//! # Tick loop (per partition)
//!
//! ```text
//! for tick in 0..config.steps:
//!   ① Movement  — rebuild occupancy, apply the update rule to every local
//!                 agent, collect outbound batches by destination rank.
//!   ② Exchange  — ship batches to both ring neighbours, block until both
//!                 inbound batches arrive (the per-tick barrier).
//!   ③ Merge     — append inbound agents to the local store.
//!   ④ Resolve   — rebalance lanes pushed over capacity by the merge.
//! ```
//!
//! Movement (①) and the exchange (②) are timed separately as compute and
//! communication; each partition reports its totals through
//! [`PartitionMetrics`] when the run ends.  Aggregation across partitions is
//! left to the caller.

pub mod error;
pub mod harness;
pub mod metrics;
pub mod observer;
pub mod partition;


pub use error::{SimError, SimResult};
pub use harness::run_simulation;
pub use metrics::{PartitionMetrics, StepTimer};
pub use observer::{NoopObserver, SimObserver};
pub use partition::Partition;
