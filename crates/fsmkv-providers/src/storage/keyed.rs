//! Keyed state store
//!
//! FSM storage over a remote key-value store. State lives under
//! `<prefix>:<identity>:state`, data entries under
//! `<prefix>:<identity>:data:<name>`.
//!
//! ## Operations
//!
//! | Operation | Store commands | Error operation |
//! |-----------|----------------|-----------------|
//! | `state` | GET | get state |
//! | `set_state` | SET (state TTL) | set state |
//! | `reset_state` | DEL, then SCAN + DEL pages | reset state / reset data |
//! | `data` | GET | get data / decode data |
//! | `set_data` | SET (data TTL) or DEL | encode data / set data / delete data |
//!
//! Reset deletes the state key instead of rewriting it to the default state,
//! so a reset identity leaves no residual record behind.

use crate::codec;
use crate::storage::keys::{data_pattern, derive_key};
use crate::storage::settings::StorageSettings;
use async_trait::async_trait;
use fsmkv_domain::constants::DEFAULT_KEY_PREFIX;
use fsmkv_domain::error::{Error, Result, StorageOperation};
use fsmkv_domain::ports::{FsmStorage, KeyValueStore};
use fsmkv_domain::value_objects::{RecordKind, State, StorageKey};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// FSM state and data storage over a [`KeyValueStore`]
///
/// Holds no mutable state of its own: the settings are fixed at construction
/// and the backend handle is shared by every concurrent caller. Same-identity
/// writers rely on the single-key atomicity of the backend; the bulk data
/// reset is not atomic.
#[derive(Clone)]
pub struct KeyedStateStore {
    store: Arc<dyn KeyValueStore>,
    settings: StorageSettings,
}

impl KeyedStateStore {
    /// Create a store over `store` with the given settings
    ///
    /// An empty prefix falls back to the default; zero TTLs and a zero batch
    /// size are treated as unset.
    pub fn new(store: Arc<dyn KeyValueStore>, mut settings: StorageSettings) -> Self {
        if settings.prefix.is_empty() {
            settings.prefix = DEFAULT_KEY_PREFIX.to_string();
        }
        settings.state_ttl = settings.state_ttl.filter(|ttl| !ttl.is_zero());
        settings.data_ttl = settings.data_ttl.filter(|ttl| !ttl.is_zero());
        settings.reset_batch_size = settings.reset_batch_size.filter(|count| *count > 0);

        Self { store, settings }
    }

    /// Create a store with default settings
    pub fn with_defaults(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, StorageSettings::default())
    }

    /// Settings the store was built with
    pub fn settings(&self) -> &StorageSettings {
        &self.settings
    }

    /// Backend the store issues commands against
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Remove a single data entry
    pub async fn delete_data(
        &self,
        ctx: &CancellationToken,
        key: StorageKey,
        name: &str,
    ) -> Result<()> {
        self.set_data::<()>(ctx, key, name, None).await
    }

    /// Decode a data entry, falling back to `T::default()` when it is absent
    pub async fn data_or_default<T>(
        &self,
        ctx: &CancellationToken,
        key: StorageKey,
        name: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
    {
        match self.data(ctx, key, name).await {
            Err(e) if e.is_not_found() => Ok(T::default()),
            other => other,
        }
    }

    fn key(&self, key: &StorageKey, kind: RecordKind, names: &[&str]) -> String {
        derive_key(&self.settings.prefix, key, kind, names)
    }

    /// Delete every data entry of `key`, one SCAN page at a time
    ///
    /// Pages deleted before a failure stay deleted.
    async fn reset_data(&self, ctx: &CancellationToken, key: &StorageKey) -> Result<u64> {
        let pattern = data_pattern(&self.settings.prefix, key);
        let mut cursor = 0;
        let mut deleted = 0;

        loop {
            let page = cancellable(
                ctx,
                self.store
                    .scan(cursor, &pattern, self.settings.reset_batch_size),
            )
            .await?;

            if !page.keys.is_empty() {
                deleted += cancellable(ctx, self.store.delete(&page.keys)).await?;
            }

            debug!(
                pattern = %pattern,
                matched = page.keys.len(),
                cursor = page.cursor,
                "Reset data page processed"
            );

            if page.is_last() {
                break;
            }
            cursor = page.cursor;
        }

        Ok(deleted)
    }
}

#[async_trait]
impl FsmStorage for KeyedStateStore {
    async fn state(&self, ctx: &CancellationToken, key: StorageKey) -> Result<State> {
        let state_key = self.key(&key, RecordKind::State, &[]);

        match cancellable(ctx, self.store.get(&state_key)).await {
            Ok(Some(raw)) => Ok(State::new(String::from_utf8_lossy(&raw))),
            Ok(None) => Ok(State::default()),
            Err(e) => Err(Error::wrap(StorageOperation::GetState, e)),
        }
    }

    async fn set_state(
        &self,
        ctx: &CancellationToken,
        key: StorageKey,
        state: State,
    ) -> Result<()> {
        let state_key = self.key(&key, RecordKind::State, &[]);

        cancellable(
            ctx,
            self.store
                .set(&state_key, state.as_str().as_bytes(), self.settings.state_ttl),
        )
        .await
        .map_err(|e| Error::wrap(StorageOperation::SetState, e))
    }

    async fn reset_state(
        &self,
        ctx: &CancellationToken,
        key: StorageKey,
        with_data: bool,
    ) -> Result<()> {
        let state_key = self.key(&key, RecordKind::State, &[]);

        cancellable(ctx, self.store.delete(&[state_key]))
            .await
            .map_err(|e| Error::wrap(StorageOperation::ResetState, e))?;

        if with_data {
            let deleted = self
                .reset_data(ctx, &key)
                .await
                .map_err(|e| Error::wrap(StorageOperation::ResetData, e))?;
            debug!(identity = %key, deleted, "Data entries reset");
        }

        Ok(())
    }

    async fn data<T>(&self, ctx: &CancellationToken, key: StorageKey, name: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let data_key = self.key(&key, RecordKind::Data, &[name]);

        let raw = cancellable(ctx, self.store.get(&data_key))
            .await
            .map_err(|e| Error::wrap(StorageOperation::GetData, e))?
            .ok_or_else(|| Error::not_found(data_key.clone()))?;

        codec::decode(&raw).map_err(|e| Error::wrap(StorageOperation::DecodeData, e))
    }

    async fn set_data<T>(
        &self,
        ctx: &CancellationToken,
        key: StorageKey,
        name: &str,
        value: Option<&T>,
    ) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let data_key = self.key(&key, RecordKind::Data, &[name]);

        let Some(value) = value else {
            return cancellable(ctx, self.store.delete(&[data_key]))
                .await
                .map(|_| ())
                .map_err(|e| Error::wrap(StorageOperation::DeleteData, e));
        };

        let encoded =
            codec::encode(value).map_err(|e| Error::wrap(StorageOperation::EncodeData, e))?;

        cancellable(
            ctx,
            self.store.set(&data_key, &encoded, self.settings.data_ttl),
        )
        .await
        .map_err(|e| Error::wrap(StorageOperation::SetData, e))
    }

    async fn close(&self) -> Result<()> {
        self.store.close().await?;
        info!(backend = self.store.provider_name(), "Storage closed");
        Ok(())
    }
}

impl std::fmt::Debug for KeyedStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedStateStore")
            .field("backend", &self.store.provider_name())
            .field("settings", &self.settings)
            .finish()
    }
}

/// Run a store command unless the caller cancels first
async fn cancellable<T, F>(ctx: &CancellationToken, command: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        () = ctx.cancelled() => Err(Error::Cancelled),
        result = command => result,
    }
}
