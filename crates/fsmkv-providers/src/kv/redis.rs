//! Redis key-value backend
//!
//! `KeyValueStore` implementation over Redis. Commands go through a
//! [`ConnectionManager`], a multiplexed connection that reconnects on its own,
//! so a single backend can be shared by every concurrent caller.
//!
//! ## Commands
//!
//! | Port operation | Redis command |
//! |----------------|---------------|
//! | `get` | `GET key` |
//! | `set` | `SET key value [EX seconds \| PX milliseconds]` |
//! | `delete` | `DEL key [key ...]` |
//! | `scan` | `SCAN cursor MATCH pattern [COUNT count]` |
//!
//! ## Example
//!
//! ```ignore
//! use fsmkv_providers::kv::RedisKeyValueStore;
//!
//! let store = RedisKeyValueStore::connect("redis://localhost:6379").await?;
//! // Or with host/port
//! let store = RedisKeyValueStore::with_host_port("localhost", 6379).await?;
//! ```

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use fsmkv_domain::error::{Error, Result};
use fsmkv_domain::ports::{KeyValueStore, ScanPage};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use std::time::Duration;
use tracing::info;

/// Redis key-value backend
///
/// The connection is dropped on [`close`](KeyValueStore::close); commands
/// issued afterwards fail instead of reconnecting.
pub struct RedisKeyValueStore {
    connection: ArcSwapOption<ConnectionManager>,
}

impl RedisKeyValueStore {
    /// Connect to the Redis server at `connection_string`
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| Error::Infrastructure {
            message: format!("Failed to create Redis client: {e}"),
            source: Some(Box::new(e)),
        })?;

        Self::from_client(client).await
    }

    /// Connect to the Redis server at `host:port`
    pub async fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::connect(&format!("redis://{host}:{port}")).await
    }

    /// Connect through an already configured client
    pub async fn from_client(client: Client) -> Result<Self> {
        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| redis_error("connect", e))?;
        info!("Connected to Redis");

        Ok(Self {
            connection: ArcSwapOption::from_pointee(manager),
        })
    }

    /// Whether the backend has been closed
    pub fn is_closed(&self) -> bool {
        self.connection.load().is_none()
    }

    fn connection(&self) -> Result<ConnectionManager> {
        self.connection
            .load_full()
            .map(|manager| (*manager).clone())
            .ok_or_else(|| Error::infrastructure("Redis connection closed"))
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection()?;

        let value: Option<Vec<u8>> = conn.get(key).await.map_err(|e| redis_error("GET", e))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.connection()?;

        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(ttl) = ttl.filter(|ttl| !ttl.is_zero()) {
            append_expiry(&mut cmd, ttl);
        }

        cmd.query_async::<()>(&mut conn)
            .await
            .map_err(|e| redis_error("SET", e))?;
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<u64> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.connection()?;

        let deleted: u64 = conn.del(keys).await.map_err(|e| redis_error("DEL", e))?;
        Ok(deleted)
    }

    async fn scan(&self, cursor: u64, pattern: &str, count: Option<u64>) -> Result<ScanPage> {
        let mut conn = self.connection()?;

        let mut cmd = redis::cmd("SCAN");
        cmd.arg(cursor).arg("MATCH").arg(pattern);
        if let Some(count) = count.filter(|count| *count > 0) {
            cmd.arg("COUNT").arg(count);
        }

        let (cursor, keys): (u64, Vec<String>) = cmd
            .query_async(&mut conn)
            .await
            .map_err(|e| redis_error("SCAN", e))?;
        Ok(ScanPage { keys, cursor })
    }

    async fn close(&self) -> Result<()> {
        if self.connection.swap(None).is_some() {
            info!("Redis connection closed");
        }
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisKeyValueStore")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Append the expiry option of `SET`
///
/// Whole seconds use `EX`; anything finer uses `PX`, rounded up to at least
/// one millisecond since Redis rejects a zero expiry.
pub fn append_expiry(cmd: &mut redis::Cmd, ttl: Duration) {
    if ttl.subsec_nanos() == 0 {
        cmd.arg("EX").arg(ttl.as_secs());
    } else {
        let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
        cmd.arg("PX").arg(millis);
    }
}

fn redis_error(command: &str, e: redis::RedisError) -> Error {
    Error::Infrastructure {
        message: format!("Redis {command} failed: {e}"),
        source: Some(Box::new(e)),
    }
}

