//! Composite storage identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one conversation participant
///
/// Every state and data record is scoped by this key. A `thread_id` of zero
/// means the conversation is not bound to a thread.
///
/// # Example
///
/// ```
/// use fsmkv_domain::StorageKey;
///
/// let key = StorageKey::new(1, -100_200, 42).with_thread(7);
/// assert!(key.has_thread());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StorageKey {
    /// Bot identifier
    pub bot_id: i64,
    /// Chat identifier
    pub chat_id: i64,
    /// User identifier
    pub user_id: i64,
    /// Thread identifier, zero when absent
    #[serde(default)]
    pub thread_id: i64,
}

impl StorageKey {
    /// Create a key without a thread
    pub fn new(bot_id: i64, chat_id: i64, user_id: i64) -> Self {
        Self {
            bot_id,
            chat_id,
            user_id,
            thread_id: 0,
        }
    }

    /// Scope the key to a thread
    pub fn with_thread(mut self, thread_id: i64) -> Self {
        self.thread_id = thread_id;
        self
    }

    /// Whether the key carries a thread segment
    pub fn has_thread(&self) -> bool {
        self.thread_id != 0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.bot_id, self.chat_id, self.user_id)?;
        if self.has_thread() {
            write!(f, "#{}", self.thread_id)?;
        }
        Ok(())
    }
}
