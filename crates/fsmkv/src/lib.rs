//! # fsmkv
//!
//! Finite-state-machine storage for chat bots: the current state and named,
//! arbitrarily typed data entries of every (bot, chat, user, thread)
//! identity, kept in Redis.
//!
//! ## Example
//!
//! ```ignore
//! use fsmkv::infrastructure::{ConfigLoader, StorageFactory};
//! use fsmkv::{FsmStorage, State, StorageKey};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = ConfigLoader::new().load()?;
//! let storage = StorageFactory::create(&config.storage).await?;
//! let ctx = CancellationToken::new();
//! let key = StorageKey::new(bot_id, chat_id, user_id);
//!
//! storage.set_state(&ctx, key, State::new("awaiting_name")).await?;
//! storage.set_data(&ctx, key, "name", Some(&"Ada")).await?;
//! let name: String = storage.data(&ctx, key, "name").await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - identity, state, errors and the storage ports
//! - `providers` - the keyed state store and its key-value backends
//! - `infrastructure` - configuration, logging and storage construction
//! - `cli` - the `fsmkv` command line tool

/// Domain layer - identity, state, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use fsmkv_domain::*;
}

/// Provider layer - keyed state store and backends
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use fsmkv_providers::*;
}

/// Infrastructure layer - config, logging and storage factory
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use fsmkv_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the adapter at the crate root
pub use providers::storage::{KeyedStateStore, StorageSettings};
