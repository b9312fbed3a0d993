//! Key-Value Backend Implementations
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`MemoryKeyValueStore`] | Local | In-process map with TTLs and Redis scan semantics |
//! | [`RedisKeyValueStore`] | Distributed | Redis via a managed multiplexed connection |
//!
//! ## Backend Selection Guide
//!
//! - **Testing / single process**: `MemoryKeyValueStore`
//! - **Multi instance / restart-safe**: `RedisKeyValueStore`

/// Redis-style glob matching
pub mod glob;
/// In-process backend
pub mod memory;
#[cfg(feature = "kv-redis")]
pub mod redis;

pub use self::memory::MemoryKeyValueStore;
#[cfg(feature = "kv-redis")]
pub use self::redis::RedisKeyValueStore;
