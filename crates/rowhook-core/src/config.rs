//! Run-wide configuration.
//!
//! Built once at startup, validated there, and passed by reference into
//! every component. No module-level state.

use thiserror::Error;

/// A required configuration value was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("base URL is not set")]
    MissingBaseUrl,
    #[error("API key is not set")]
    MissingApiKey,
    #[error("PostgreSQL connection URL is not set")]
    MissingDatabaseUrl,
}

/// Configuration shared by every function processed in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Base URL the function endpoints hang off, without a trailing slash.
    pub base_url: String,
    /// Shared secret carried in the `x-api-key` header of every trigger call.
    pub api_key: String,
}

impl SyncConfig {
    /// Validate and assemble the run configuration.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let api_key = api_key.into();

        if base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self { base_url, api_key })
    }

    /// Fully qualified URL a function is invoked at.
    pub fn endpoint_for(&self, function_name: &str) -> String {
        format!("{}/{}", self.base_url, function_name)
    }
}
