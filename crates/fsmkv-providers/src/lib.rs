//! # fsmkv - Provider Implementations
//!
//! Implements the [`FsmStorage`] port on top of any [`KeyValueStore`] backend.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`storage::KeyedStateStore`] | FSM state and data adapter over a key-value backend |
//! | [`storage::keys`] | Stored key and scan pattern derivation |
//! | [`codec`] | Generic serde codec for data entries |
//! | [`kv::MemoryKeyValueStore`] | In-process backend with Redis scan semantics |
//! | [`kv::RedisKeyValueStore`] | Redis backend (feature `kv-redis`) |
//!
//! ## Usage
//!
//! ```ignore
//! use fsmkv_providers::kv::RedisKeyValueStore;
//! use fsmkv_providers::storage::{KeyedStateStore, StorageSettings};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let store = RedisKeyValueStore::connect("redis://localhost:6379").await?;
//! let settings = StorageSettings::default()
//!     .with_prefix("mybot")
//!     .with_data_ttl(Duration::from_secs(3600));
//! let storage = KeyedStateStore::new(Arc::new(store), settings);
//! ```

// Re-export domain types commonly used with providers
pub use fsmkv_domain::error::{Error, Result};
pub use fsmkv_domain::ports::{FsmStorage, KeyValueStore, ScanPage};

/// Provider-specific constants
pub mod constants;

/// Data entry codec
pub mod codec;

/// Key-value backend implementations
///
/// Implements the `KeyValueStore` port for Redis and an in-process map.
pub mod kv;

/// FSM storage adapter
///
/// Implements the `FsmStorage` port over a `KeyValueStore`.
pub mod storage;
