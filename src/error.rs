//! Error types for Helmsman

use std::fmt;

/// Result type alias for Helmsman operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Helmsman
///
/// Every variant is a configuration-time condition. The selection path
/// itself is infallible: filters are total and registry resolution always
/// degrades to the built-in default policy.
#[derive(Debug)]
pub enum Error {
    /// Configuration errors (invalid policy or filter definitions)
    Config(String),
    /// Serialization errors at the configuration boundary
    Serialization(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
