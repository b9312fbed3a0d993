//! FSM Storage Port
//!
//! The storage contract of the conversation-flow framework. Implementations
//! persist one [`State`] and any number of named data entries per
//! [`StorageKey`].
//!
//! Every operation takes the caller's [`CancellationToken`]; implementations
//! must abandon the in-flight store command once it is cancelled and must not
//! impose deadlines of their own.

use crate::error::Result;
use crate::value_objects::{State, StorageKey};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

/// FSM state and data storage
///
/// # Example
///
/// ```ignore
/// use fsmkv_domain::{FsmStorage, State, StorageKey};
///
/// let key = StorageKey::new(bot_id, chat_id, user_id);
/// storage.set_state(&ctx, key, State::new("awaiting_name")).await?;
/// storage.set_data(&ctx, key, "name", Some(&"Ada".to_string())).await?;
///
/// let name: String = storage.data(&ctx, key, "name").await?;
/// storage.reset_state(&ctx, key, true).await?;
/// ```
#[async_trait]
pub trait FsmStorage: Send + Sync {
    /// Current state of `key`; the default state when none is stored
    async fn state(&self, ctx: &CancellationToken, key: StorageKey) -> Result<State>;

    /// Replace the current state of `key`
    async fn set_state(
        &self,
        ctx: &CancellationToken,
        key: StorageKey,
        state: State,
    ) -> Result<()>;

    /// Drop the current state of `key`, and all of its data when `with_data` is set
    async fn reset_state(
        &self,
        ctx: &CancellationToken,
        key: StorageKey,
        with_data: bool,
    ) -> Result<()>;

    /// Decode the data entry `name` of `key`
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) when the entry does not exist.
    async fn data<T>(&self, ctx: &CancellationToken, key: StorageKey, name: &str) -> Result<T>
    where
        T: DeserializeOwned + Send;

    /// Store the data entry `name` of `key`; `None` removes it
    async fn set_data<T>(
        &self,
        ctx: &CancellationToken,
        key: StorageKey,
        name: &str,
        value: Option<&T>,
    ) -> Result<()>
    where
        T: Serialize + Sync;

    /// Release the storage backend
    async fn close(&self) -> Result<()>;
}
