//! Provider-specific constants

/// Page size the in-memory backend uses when a scan carries no count hint
///
/// Matches the Redis default `COUNT` for `SCAN`.
pub const MEMORY_DEFAULT_SCAN_COUNT: u64 = 10;
