//! rowhook-sync — reconciles function hooks with database triggers.
//!
//! The synchronizer works in two phases:
//!
//! ```text
//! descriptors + config
//!   │
//!   ▼
//! build_plan            pure: derives every SQL byte and route up front
//!   │
//!   ▼
//! run / apply           one connection, one transaction, strict order
//!   │
//!   ▼
//! SyncOutput            route map keyed by function name
//! ```
//!
//! Each function's trigger is replaced with drop-if-exists followed by
//! create, so re-running with identical inputs always converges on the
//! same trigger set. The whole batch commits atomically: a statement
//! failure rolls back everything applied earlier in the run.

pub mod error;
pub mod plan;
pub mod runner;

pub use error::{SyncError, SyncResult};
pub use plan::{SyncPlan, TriggerStep, build_plan};
pub use runner::{apply, run};
