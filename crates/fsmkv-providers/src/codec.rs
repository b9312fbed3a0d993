//! Data entry codec
//!
//! Data values are opaque to the storage adapter: callers hand in anything
//! `Serialize` and name the `DeserializeOwned` type they expect back. The
//! adapter only ever sees the encoded bytes.

use fsmkv_domain::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encode a data value into its stored representation
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Decode a stored representation into the caller's type
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}
