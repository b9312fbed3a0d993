//! # fsmkv Domain Layer
//!
//! Vocabulary shared by every fsmkv crate: who a record belongs to
//! ([`StorageKey`]), what is stored for it ([`State`] and named data entries),
//! how failures are reported ([`Error`]) and the ports storage backends
//! implement.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Identity, state and record-kind value objects |
//! | [`ports`] | `FsmStorage` contract and the `KeyValueStore` backend port |
//! | [`error`] | Domain error type and operation names |
//! | [`constants`] | Defaults shared by providers and infrastructure |

/// Domain-wide default values
pub mod constants;
/// Error handling types
pub mod error;
/// Boundary contracts implemented by providers
pub mod ports;
/// Immutable domain value objects
pub mod value_objects;

pub use error::{Error, Result, StorageOperation};
pub use ports::{FsmStorage, KeyValueStore, ScanPage};
pub use value_objects::{RecordKind, State, StorageKey};
