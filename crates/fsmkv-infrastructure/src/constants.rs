//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `fsmkv_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "fsmkv.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "fsmkv";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "FSMKV";

/// Separator between nested keys in environment variable names
///
/// Double underscore, so field names may keep their single underscores
/// (`FSMKV_STORAGE__STATE_TTL_SECS`).
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "FSMKV_LOG";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Default Redis connection URL
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";
