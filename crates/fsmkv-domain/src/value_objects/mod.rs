//! Domain Value Objects
//!
//! Immutable values describing what is stored and for whom.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`StorageKey`] | Bot/chat/user/thread identity scoping every record |
//! | [`State`] | Current FSM state name of an identity |
//! | [`RecordKind`] | Closed set of record categories sharing a key namespace |

/// Record categories
pub mod record_kind;
/// FSM state value
pub mod state;
/// Composite storage identity
pub mod storage_key;

pub use record_kind::RecordKind;
pub use state::State;
pub use storage_key::StorageKey;
