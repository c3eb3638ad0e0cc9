//! Function manifest parsing.
//!
//! The manifest is a JSON document produced by the deployment pipeline:
//!
//! ```json
//! {
//!   "functions": [
//!     { "name": "sendWelcome", "hook": { "table": "users", "event": "row_created" } },
//!     { "name": "cleanupJob" }
//!   ]
//! }
//! ```
//!
//! Only entries carrying a `hook` record take part in trigger
//! synchronization; the rest are deployed functions with no table wiring.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// The on-disk list of deployed functions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionManifest {
    pub functions: Vec<ManifestEntry>,
}

/// One deployed function as the deployment pipeline recorded it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    /// Present only for functions registered for trigger wiring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook: Option<HookRegistration>,
}

/// Explicit registration record attached by the function-creation path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookRegistration {
    pub table: String,
    /// Event kind name; validated against the canonical vocabulary when
    /// the registry is built.
    pub event: String,
}

impl FunctionManifest {
    /// Load and parse a manifest from disk.
    pub fn from_file(path: &Path) -> RegistryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            RegistryError::ManifestIo {
                path: path.to_path_buf(),
                source,
            }
        })?;
        serde_json::from_str(&content).map_err(RegistryError::ManifestParse)
    }
}
