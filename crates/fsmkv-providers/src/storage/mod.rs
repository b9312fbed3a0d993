//! FSM storage adapter
//!
//! [`KeyedStateStore`] maps the `FsmStorage` contract onto the primitive
//! operations of a `KeyValueStore`: GET and SET for state and data, DEL for
//! single entries, and SCAN + DEL for the bulk data reset.

/// Keyed state store implementation
pub mod keyed;
/// Stored key derivation
pub mod keys;
/// Adapter settings
pub mod settings;

pub use keyed::KeyedStateStore;
pub use settings::StorageSettings;
