//! rowhook-core — shared types for the rowhook toolkit.
//!
//! Everything the other crates agree on lives here: the canonical
//! row-change event vocabulary, the descriptor types flowing through a
//! synchronization run, the validated run configuration, and the SQL
//! identifier rules used when trigger statements are built.

pub mod config;
pub mod event;
pub mod ident;
pub mod types;

pub use config::{ConfigError, SyncConfig};
pub use event::{EventKind, UnsupportedEventKind};
pub use types::*;
