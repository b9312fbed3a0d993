//! Domain layer constants
//!
//! Values that define the default shape of stored records. Backend and
//! configuration specific constants live in the provider and infrastructure
//! crates.

/// Default prefix prepended to every stored key
pub const DEFAULT_KEY_PREFIX: &str = "fsm";

/// Separator placed between key segments
pub const KEY_SEPARATOR: &str = ":";
