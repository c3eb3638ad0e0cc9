//! Shared types used across rowhook crates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::EventKind;

/// A deployed function eligible for trigger wiring.
///
/// Constructed once per eligible manifest entry at the start of a run and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    /// Unique function name; doubles as the trigger name.
    pub name: String,
    /// Table the trigger watches.
    pub table: String,
    /// Which row-change event fires the trigger.
    pub event: EventKind,
}

/// How a function is reachable once its trigger is in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub name: String,
    pub table: String,
    /// Native database event keyword (`INSERT` / `UPDATE`).
    pub event: String,
    /// Route transport; always `"http"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub request: RouteRequest,
    pub headers: BTreeMap<String, String>,
}

/// The HTTP request a trigger issues when it fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub method: String,
    pub url: String,
}

/// Structured result of a synchronization run, keyed by function name.
///
/// One entry per processed [`FunctionDescriptor`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOutput {
    pub functions: BTreeMap<String, RouteDescriptor>,
}
