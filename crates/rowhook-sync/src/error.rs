//! Error types for the trigger synchronizer.

use rowhook_core::ident::InvalidIdentifier;
use thiserror::Error;

/// Result type alias for synchronizer operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors raised while planning or applying trigger changes.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Identifier(#[from] InvalidIdentifier),

    #[error("failed to encode trigger headers: {0}")]
    Headers(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
