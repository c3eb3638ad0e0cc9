//! Row-change payload delivered by a trigger.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a trigger's HTTP callback.
///
/// Field presence depends on the event kind and is checked by the
/// validation layer, so everything is optional at the parse layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangePayload {
    #[serde(default)]
    pub table: Option<String>,
    /// Native database event keyword (`INSERT` / `UPDATE`).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// The affected row, as the database serialized it.
    #[serde(default)]
    pub record: Option<Value>,
    /// The row's previous version; present for update events.
    #[serde(default)]
    pub old_record: Option<Value>,
}
