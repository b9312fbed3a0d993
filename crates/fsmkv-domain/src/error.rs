//! Error handling types

use std::fmt;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Storage operation a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageOperation {
    /// Reading the current state
    GetState,
    /// Writing the current state
    SetState,
    /// Removing the current state
    ResetState,
    /// Bulk removal of every data entry of an identity
    ResetData,
    /// Removing a single data entry
    DeleteData,
    /// Serializing a data value
    EncodeData,
    /// Writing a data entry
    SetData,
    /// Reading a data entry
    GetData,
    /// Deserializing a data value
    DecodeData,
}

impl StorageOperation {
    /// Human readable operation name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetState => "get state",
            Self::SetState => "set state",
            Self::ResetState => "reset state",
            Self::ResetData => "reset data",
            Self::DeleteData => "delete data",
            Self::EncodeData => "encode data",
            Self::SetData => "set data",
            Self::GetData => "get data",
            Self::DecodeData => "decode data",
        }
    }
}

impl fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for fsmkv
#[derive(Error, Debug)]
pub enum Error {
    /// Requested data entry does not exist
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// A storage operation failed
    #[error("fsmkv/storage: {operation}: {source}")]
    Operation {
        /// The failed operation
        operation: StorageOperation,
        /// The underlying failure
        #[source]
        source: Box<Error>,
    },

    /// Payload serialization or deserialization error
    #[error("Codec error: {source}")]
    Codec {
        /// The underlying serde error
        #[from]
        source: serde_json::Error,
    },

    /// The caller cancelled the operation
    #[error("Operation cancelled")]
    Cancelled,

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Backend or transport error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Operation wrapping and inspection
impl Error {
    /// Attribute a failure to a storage operation
    pub fn wrap(operation: StorageOperation, source: Error) -> Self {
        Self::Operation {
            operation,
            source: Box::new(source),
        }
    }

    /// Operation the error was attributed to, if any
    pub fn operation(&self) -> Option<StorageOperation> {
        match self {
            Self::Operation { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Innermost error, skipping operation wrappers
    pub fn cause(&self) -> &Error {
        match self {
            Self::Operation { source, .. } => source.cause(),
            other => other,
        }
    }

    /// Whether this is the not-found error of a data lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the caller cancelled the failed operation
    pub fn is_cancelled(&self) -> bool {
        matches!(self.cause(), Self::Cancelled)
    }
}

// Error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
