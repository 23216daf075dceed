//! Error types for the library layer.

use std::fmt;

use crate::config::ConfigError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding serialization, configuration, and input validation failures.
#[derive(Debug)]
pub enum ConsoleError {
    /// An error from the underlying API client that no interceptor recovered.
    Api(console_api::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// Configuration could not be loaded.
    Config(ConfigError),
    /// Caller-provided input was unusable.
    InvalidInput(String),
    /// The rendering surface refused to mount the application.
    Mount(String),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::Config(e) => write!(f, "Configuration error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Mount(msg) => write!(f, "Mount failed: {}", msg),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<console_api::Error> for ConsoleError {
    fn from(e: console_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<ConfigError> for ConsoleError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
