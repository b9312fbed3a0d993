//! Record categories

use std::fmt;

/// Category of a stored record
///
/// The tag is written at a fixed position of every key, directly after the
/// identity segments, so a state record never shares a key with a data entry
/// named `"state"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// The single current state of an identity
    State,
    /// A named data entry of an identity
    Data,
}

impl RecordKind {
    /// Every record kind
    pub const ALL: [RecordKind; 2] = [RecordKind::State, RecordKind::Data];

    /// Tag written into stored keys
    pub fn as_str(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
