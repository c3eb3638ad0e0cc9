//! Error types for the function registry.

use std::path::PathBuf;

use rowhook_core::UnsupportedEventKind;
use thiserror::Error;

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised while loading or filtering the function manifest.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read function manifest {}", .path.display())]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse function manifest")]
    ManifestParse(#[source] serde_json::Error),

    #[error(
        "found no functions registered for trigger wiring - \
         are you sure the path points at the function manifest?"
    )]
    NoEligibleFunctions,

    #[error("cannot operate on function \"{0}\": it does not exist")]
    UnknownFunction(String),

    #[error("function \"{0}\" is registered more than once")]
    DuplicateFunction(String),

    #[error(transparent)]
    Event(#[from] UnsupportedEventKind),
}
