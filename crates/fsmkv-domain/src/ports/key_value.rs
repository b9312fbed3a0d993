//! Key-Value Store Port
//!
//! The primitive operations the storage adapter needs from a remote
//! key-value store. Single-key `get`/`set`/`delete` are expected to be atomic;
//! `scan` follows the resumable-cursor contract: pages may repeat keys, keys
//! removed concurrently may be skipped, and a returned cursor of zero marks
//! the end of the iteration.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// One page of a cursor-based key scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanPage {
    /// Keys matched on this page
    pub keys: Vec<String>,
    /// Cursor to resume from, zero when the scan is complete
    pub cursor: u64,
}

impl ScanPage {
    /// Whether this is the last page of the scan
    pub fn is_last(&self) -> bool {
        self.cursor == 0
    }
}

/// Remote key-value store backend
///
/// # Implementations
///
/// - **Redis**: `RedisKeyValueStore` in `fsmkv-providers`
/// - **Memory**: in-process store for tests and single-instance runs
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Fetch the raw value stored under `key`, `None` if absent
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, expiring after `ttl` when given
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Remove every listed key, returning how many existed
    async fn delete(&self, keys: &[String]) -> Result<u64>;

    /// Fetch one page of keys matching a glob `pattern`
    ///
    /// `count` is a page-size hint; `None` lets the store choose.
    async fn scan(&self, cursor: u64, pattern: &str, count: Option<u64>) -> Result<ScanPage>;

    /// Release the underlying connection
    async fn close(&self) -> Result<()>;

    /// Identifier of the backend implementation (e.g. "redis", "memory")
    fn provider_name(&self) -> &str;
}
