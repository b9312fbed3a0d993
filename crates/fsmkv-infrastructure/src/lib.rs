//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the storage adapter.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`factory`] | Builds a keyed state store from configuration |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context helpers mapping foreign errors to domain errors |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod factory;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use factory::StorageFactory;
