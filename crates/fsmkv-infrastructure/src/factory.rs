//! Storage construction from configuration

use crate::config::{BackendKind, StorageConfig};
use fsmkv_domain::error::Result;
use fsmkv_domain::ports::KeyValueStore;
use fsmkv_providers::kv::{MemoryKeyValueStore, RedisKeyValueStore};
use fsmkv_providers::storage::KeyedStateStore;
use std::sync::Arc;
use tracing::info;

/// Builds a [`KeyedStateStore`] over the configured backend
pub struct StorageFactory;

impl StorageFactory {
    /// Connect the configured backend and wrap it in a keyed state store
    pub async fn create(config: &StorageConfig) -> Result<KeyedStateStore> {
        let backend = Self::backend(config).await?;
        let settings = config.settings();
        info!(
            backend = %config.backend,
            prefix = %settings.prefix,
            "Storage created"
        );
        Ok(KeyedStateStore::new(backend, settings))
    }

    /// Connect the configured key-value backend
    pub async fn backend(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
        let backend: Arc<dyn KeyValueStore> = match config.backend {
            BackendKind::Redis => Arc::new(RedisKeyValueStore::connect(&config.redis_url).await?),
            BackendKind::Memory => Arc::new(MemoryKeyValueStore::new()),
        };
        Ok(backend)
    }
}
