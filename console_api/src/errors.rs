//! Error types for the API client.

use std::fmt;

use crate::descriptor::ResponseDescriptor;

/// Named transport failure for a request that never produced a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureCode {
    /// The request was aborted by the client timeout.
    ConnectionAborted,
    /// The server could not be reached at all.
    Network,
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionAborted => write!(f, "ECONNABORTED"),
            Self::Network => write!(f, "ERR_NETWORK"),
        }
    }
}

/// A failed request as seen by interceptors.
///
/// Either the server answered with a non-success status, or the request
/// failed before any response arrived. Never both.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum RequestError {
    /// The server answered with a non-success status.
    #[error("{} {} failed with status {}", .0.method, .0.path, .0.status)]
    Response(ResponseDescriptor),
    /// No response was received.
    #[error("{code}: {message}")]
    Failure { code: FailureCode, message: String },
}

impl RequestError {
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            FailureCode::ConnectionAborted
        } else {
            FailureCode::Network
        };
        Self::Failure {
            code,
            message: err.to_string(),
        }
    }

    /// Returns the response, if the server answered.
    pub fn response(&self) -> Option<&ResponseDescriptor> {
        match self {
            Self::Response(resp) => Some(resp),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the failure code, if no response was received.
    pub fn failure_code(&self) -> Option<FailureCode> {
        match self {
            Self::Response(_) => None,
            Self::Failure { code, .. } => Some(*code),
        }
    }
}

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A request failed and no interceptor recovered it.
    #[error(transparent)]
    Request(#[from] RequestError),
    /// The request path could not be joined onto the base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The response body did not match the expected shape.
    #[error("Failed to decode response from {path}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    Build(#[source] reqwest::Error),
}
