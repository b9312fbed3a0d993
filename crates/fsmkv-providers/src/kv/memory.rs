//! In-memory key-value backend
//!
//! Process-local implementation of the `KeyValueStore` port with the same
//! observable behaviour the storage adapter relies on from Redis:
//!
//! - per-key TTLs, with expired keys treated as absent
//! - `SCAN` with Redis glob patterns and a count hint
//! - a resumable cursor that stays valid while keys are deleted between pages
//!
//! ## Example
//!
//! ```ignore
//! use fsmkv_providers::kv::MemoryKeyValueStore;
//!
//! let store = MemoryKeyValueStore::with_scan_count(100);
//! ```

use crate::constants::MEMORY_DEFAULT_SCAN_COUNT;
use crate::kv::glob::glob_match;
use async_trait::async_trait;
use fsmkv_domain::error::{Error, Result};
use fsmkv_domain::ports::{KeyValueStore, ScanPage};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug)]
struct Entry {
    seq: u64,
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Keys plus their insertion order
///
/// Every inserted key gets a fresh sequence number; scan cursors are
/// sequence numbers, so deleting already-visited keys never shifts the
/// position of the ones not yet visited.
#[derive(Debug, Default)]
struct Keyspace {
    entries: HashMap<String, Entry>,
    order: BTreeMap<u64, String>,
    last_seq: u64,
    closed: bool,
}

impl Keyspace {
    fn insert(&mut self, key: &str, value: Vec<u8>, expires_at: Option<Instant>) {
        self.last_seq += 1;
        let seq = self.last_seq;
        self.order.insert(seq, key.to_string());
        self.entries.insert(
            key.to_string(),
            Entry {
                seq,
                value,
                expires_at,
            },
        );
    }

    fn remove(&mut self, key: &str) -> Option<Entry> {
        let entry = self.entries.remove(key)?;
        self.order.remove(&entry.seq);
        Some(entry)
    }

    fn purge_expired(&mut self, now: Instant) {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();
        for key in expired {
            self.remove(&key);
        }
    }
}

/// In-memory key-value backend
#[derive(Debug)]
pub struct MemoryKeyValueStore {
    keyspace: Mutex<Keyspace>,
    default_scan_count: u64,
}

impl Default for MemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryKeyValueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_scan_count(MEMORY_DEFAULT_SCAN_COUNT)
    }

    /// Create an empty store whose scans examine `count` keys per page
    /// when the caller gives no hint
    pub fn with_scan_count(count: u64) -> Self {
        Self {
            keyspace: Mutex::new(Keyspace::default()),
            default_scan_count: count.max(1),
        }
    }

    /// Live keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keyspace = self
            .keyspace
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        keyspace.purge_expired(Instant::now());
        let mut keys: Vec<String> = keyspace.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// Whether the store holds no live keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn open_keyspace(&self) -> Result<MutexGuard<'_, Keyspace>> {
        let keyspace = self
            .keyspace
            .lock()
            .map_err(|_| Error::infrastructure("Memory key-value store lock poisoned"))?;
        if keyspace.closed {
            return Err(Error::infrastructure("Memory key-value store is closed"));
        }
        Ok(keyspace)
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let now = Instant::now();
        let mut keyspace = self.open_keyspace()?;

        let Some(entry) = keyspace.entries.get(key) else {
            return Ok(None);
        };
        if !entry.is_expired(now) {
            return Ok(Some(entry.value.clone()));
        }

        keyspace.remove(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let now = Instant::now();
        let expires_at = ttl.filter(|ttl| !ttl.is_zero()).map(|ttl| now + ttl);
        let mut guard = self.open_keyspace()?;
        let keyspace = &mut *guard;

        let live = keyspace
            .entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now));

        if live {
            if let Some(entry) = keyspace.entries.get_mut(key) {
                entry.value = value.to_vec();
                entry.expires_at = expires_at;
            }
        } else {
            keyspace.remove(key);
            keyspace.insert(key, value.to_vec(), expires_at);
        }
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<u64> {
        let now = Instant::now();
        let mut keyspace = self.open_keyspace()?;

        let mut removed = 0;
        for key in keys {
            if keyspace
                .remove(key)
                .is_some_and(|entry| !entry.is_expired(now))
            {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn scan(&self, cursor: u64, pattern: &str, count: Option<u64>) -> Result<ScanPage> {
        let now = Instant::now();
        let budget = usize::try_from(count.unwrap_or(self.default_scan_count))
            .unwrap_or(usize::MAX)
            .max(1);
        let mut guard = self.open_keyspace()?;
        let keyspace = &mut *guard;

        let mut keys = Vec::new();
        let mut expired = Vec::new();
        let mut next_cursor = 0;

        for (examined, (&seq, key)) in keyspace.order.range(cursor.max(1)..).enumerate() {
            if examined == budget {
                next_cursor = seq;
                break;
            }
            let Some(entry) = keyspace.entries.get(key) else {
                continue;
            };
            if entry.is_expired(now) {
                expired.push(key.clone());
            } else if glob_match(pattern, key) {
                keys.push(key.clone());
            }
        }

        for key in expired {
            keyspace.remove(&key);
        }

        Ok(ScanPage {
            keys,
            cursor: next_cursor,
        })
    }

    async fn close(&self) -> Result<()> {
        let mut keyspace = self
            .keyspace
            .lock()
            .map_err(|_| Error::infrastructure("Memory key-value store lock poisoned"))?;
        keyspace.closed = true;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
