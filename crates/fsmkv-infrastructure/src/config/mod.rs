//! Configuration management
//!
//! Layered configuration: built-in defaults, an optional TOML file and
//! `FSMKV_`-prefixed environment variables, in that order of precedence.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
