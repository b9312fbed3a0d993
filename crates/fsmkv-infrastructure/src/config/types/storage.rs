//! Storage configuration types

use crate::constants::DEFAULT_REDIS_URL;
use fsmkv_domain::constants::DEFAULT_KEY_PREFIX;
use fsmkv_providers::storage::StorageSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Key-value backends
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Shared store (Redis)
    #[default]
    Redis,
    /// In-process store, lost on exit
    Memory,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redis => f.write_str("redis"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Storage configuration
///
/// TTLs and the batch size use `0` for "not set".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend the adapter talks to
    pub backend: BackendKind,

    /// Redis URL (for the Redis backend)
    pub redis_url: String,

    /// Prefix of every stored key
    pub prefix: String,

    /// Expiry of state records in seconds
    pub state_ttl_secs: u64,

    /// Expiry of data records in seconds
    pub data_ttl_secs: u64,

    /// SCAN page-size hint of the bulk data reset
    pub reset_batch_size: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Redis,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            prefix: DEFAULT_KEY_PREFIX.to_string(),
            state_ttl_secs: 0,
            data_ttl_secs: 0,
            reset_batch_size: 0,
        }
    }
}

impl StorageConfig {
    /// Adapter settings described by this configuration
    pub fn settings(&self) -> StorageSettings {
        StorageSettings::default()
            .with_prefix(self.prefix.as_str())
            .with_state_ttl(Duration::from_secs(self.state_ttl_secs))
            .with_data_ttl(Duration::from_secs(self.data_ttl_secs))
            .with_reset_batch_size(self.reset_batch_size)
    }
}
