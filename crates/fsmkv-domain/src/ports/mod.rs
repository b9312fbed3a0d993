//! Domain Port Interfaces
//!
//! Contracts between the domain and the layers that implement it.
//!
//! - [`FsmStorage`] is the storage contract a conversation-flow framework
//!   consumes: state and named data per [`StorageKey`](crate::StorageKey).
//! - [`KeyValueStore`] is the backend port: the handful of remote key-value
//!   primitives the storage adapter is built on.

/// Remote key-value backend port
pub mod key_value;
/// FSM storage contract
pub mod storage;

pub use key_value::{KeyValueStore, ScanPage};
pub use storage::FsmStorage;
