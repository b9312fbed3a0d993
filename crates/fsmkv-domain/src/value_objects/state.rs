//! FSM state value

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named state of a finite-state machine
///
/// The empty string is the default state; an identity without a stored state
/// is in the default state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

impl State {
    /// The default (empty) state
    pub const DEFAULT: State = State(String::new());

    /// Create a state from its name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// State name as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the default state
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the state, returning its name
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
