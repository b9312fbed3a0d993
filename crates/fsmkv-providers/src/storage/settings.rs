//! Adapter settings

use fsmkv_domain::constants::DEFAULT_KEY_PREFIX;
use std::time::Duration;

/// Settings of a [`KeyedStateStore`](super::KeyedStateStore)
///
/// Fixed at construction. Zero durations and a zero batch size mean
/// "not set".
///
/// # Example
///
/// ```ignore
/// let settings = StorageSettings::default()
///     .with_prefix("bot")
///     .with_state_ttl(Duration::from_secs(86_400))
///     .with_reset_batch_size(500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    /// Prefix of every stored key
    pub prefix: String,
    /// Expiry of state records, `None` for no expiry
    pub state_ttl: Option<Duration>,
    /// Expiry of data records, `None` for no expiry
    pub data_ttl: Option<Duration>,
    /// SCAN page-size hint of the bulk data reset, `None` for the store default
    pub reset_batch_size: Option<u64>,
}

impl StorageSettings {
    /// Set the key prefix; an empty prefix keeps the default
    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() {
            DEFAULT_KEY_PREFIX.to_string()
        } else {
            prefix
        };
        self
    }

    /// Set the expiry of state records
    pub fn with_state_ttl(mut self, ttl: Duration) -> Self {
        self.state_ttl = non_zero(ttl);
        self
    }

    /// Set the expiry of data records
    pub fn with_data_ttl(mut self, ttl: Duration) -> Self {
        self.data_ttl = non_zero(ttl);
        self
    }

    /// Set the SCAN page-size hint used when resetting data
    pub fn with_reset_batch_size(mut self, batch_size: u64) -> Self {
        self.reset_batch_size = (batch_size > 0).then_some(batch_size);
        self
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_KEY_PREFIX.to_string(),
            state_ttl: None,
            data_ttl: None,
            reset_batch_size: None,
        }
    }
}

fn non_zero(ttl: Duration) -> Option<Duration> {
    (!ttl.is_zero()).then_some(ttl)
}
