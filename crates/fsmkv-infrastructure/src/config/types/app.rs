//! Main application configuration

use crate::config::types::{LoggingConfig, StorageConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage backend and key layout
    pub storage: StorageConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}
