//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by infrastructure-facing variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Darth
///
/// Validation variants (`MissingIdentifier`, `UnrecognizedQualifier`,
/// `InvalidKeySegment`, `InvalidWriteQualifier`, `UnexpectedQualifierShape`)
/// and `Serialization` on the write path are raised before any backend
/// call is issued.
#[derive(Error, Debug)]
pub enum Error {
    /// A point or id-scoped qualifier was built without an id
    #[error("Missing identifier: {qualifier} requires a non-empty id")]
    MissingIdentifier {
        /// Kind of qualifier that lacked the id
        qualifier: &'static str,
    },

    /// Option bag did not reduce to one of the four qualifier shapes
    #[error("Unrecognized qualifier: {message}")]
    UnrecognizedQualifier {
        /// Description of the offending combination
        message: String,
    },

    /// A key segment would break the key format
    #[error("Invalid key segment '{segment}': {message}")]
    InvalidKeySegment {
        /// The rejected segment
        segment: String,
        /// Why it was rejected
        message: String,
    },

    /// Write attempted with a wildcard qualifier
    #[error("Invalid write qualifier: cannot write with wildcard qualifier {qualifier}")]
    InvalidWriteQualifier {
        /// Display form of the qualifier
        qualifier: String,
    },

    /// Single-shape operation called with the other qualifier shape
    #[error("{operation} expects a {expected} qualifier, got {qualifier}")]
    UnexpectedQualifierShape {
        /// Operation that rejected the qualifier
        operation: &'static str,
        /// Expected shape ("point" or "wildcard")
        expected: &'static str,
        /// Display form of the qualifier
        qualifier: String,
    },

    /// Value could not be converted to or from the storage representation
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Failure surfaced by a backend primitive (GET/SETEX/DEL/KEYS)
    #[error("Backend error: {message}")]
    Backend {
        /// Description of the backend failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },
}

// Validation error creation methods
impl Error {
    /// Create a missing identifier error
    pub fn missing_identifier(qualifier: &'static str) -> Self {
        Self::MissingIdentifier { qualifier }
    }

    /// Create an unrecognized qualifier error
    pub fn unrecognized_qualifier<S: Into<String>>(message: S) -> Self {
        Self::UnrecognizedQualifier {
            message: message.into(),
        }
    }

    /// Create an invalid key segment error
    pub fn invalid_key_segment<S: Into<String>, M: Into<String>>(segment: S, message: M) -> Self {
        Self::InvalidKeySegment {
            segment: segment.into(),
            message: message.into(),
        }
    }

    /// Create an invalid write qualifier error
    pub fn invalid_write_qualifier<S: Into<String>>(qualifier: S) -> Self {
        Self::InvalidWriteQualifier {
            qualifier: qualifier.into(),
        }
    }

    /// Create an unexpected qualifier shape error
    pub fn unexpected_qualifier_shape<S: Into<String>>(
        operation: &'static str,
        expected: &'static str,
        qualifier: S,
    ) -> Self {
        Self::UnexpectedQualifierShape {
            operation,
            expected,
            qualifier: qualifier.into(),
        }
    }
}

// Infrastructure-facing error creation methods
impl Error {
    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Create a serialization error with source
    pub fn serialization_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a backend error
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend error with source
    pub fn backend_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend {
            message: message.into(),
            source: Some(Box::new(source)),
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
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification
impl Error {
    /// True for errors raised locally before any backend round-trip
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingIdentifier { .. }
                | Self::UnrecognizedQualifier { .. }
                | Self::InvalidKeySegment { .. }
                | Self::InvalidWriteQualifier { .. }
                | Self::UnexpectedQualifierShape { .. }
        )
    }

    /// True for failures reported by the backing store
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::serialization_with_source(source.to_string(), source)
    }
}
