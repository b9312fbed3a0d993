//! Stored key derivation
//!
//! Keys have the shape
//!
//! ```text
//! <prefix>:<bot>:<chat>:<user>[:<thread>]:<kind>[:<name>...]
//! ```
//!
//! The thread segment is only present for non-zero thread ids. The kind tag
//! always directly follows the identity segments, so a data entry named
//! `"state"` (`...:data:state`) can never equal the state key (`...:state`).

use fsmkv_domain::constants::KEY_SEPARATOR;
use fsmkv_domain::value_objects::{RecordKind, StorageKey};

/// Build the stored key for a record of `key`
pub fn derive_key(prefix: &str, key: &StorageKey, kind: RecordKind, names: &[&str]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(6 + names.len());
    parts.push(prefix.to_string());
    parts.push(key.bot_id.to_string());
    parts.push(key.chat_id.to_string());
    parts.push(key.user_id.to_string());
    if key.has_thread() {
        parts.push(key.thread_id.to_string());
    }
    parts.push(kind.as_str().to_string());
    parts.extend(names.iter().map(|name| (*name).to_string()));

    parts.join(KEY_SEPARATOR)
}

/// Glob pattern matching every data entry of `key`
///
/// Glob metacharacters in the prefix are escaped, so the pattern never
/// reaches keys of another prefix or identity.
pub fn data_pattern(prefix: &str, key: &StorageKey) -> String {
    derive_key(&escape_glob(prefix), key, RecordKind::Data, &["*"])
}

/// Escape Redis glob metacharacters (`* ? [ ] \`)
pub fn escape_glob(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len());
    for c in segment.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
