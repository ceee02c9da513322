//! Error types for the Reddit client.

use snoo_core::query::QueryError;

use crate::client::Response;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Client errors.
///
/// Variants raised after the service answered carry the [`Response`]
/// descriptor so callers can inspect the status code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input was empty or not usable as a path segment.
    /// Raised before any request is sent.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Invalid client configuration (base URL, header values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request could not be built (query encoding, URL join)
    #[error("Request error: {0}")]
    Request(String),

    /// Connection failure, timeout, or a body that could not be read
    #[error("Network error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
        response: Option<Response>,
    },

    /// The service answered with a non-2xx status
    #[error("API error [{}]: {body}", .response.status)]
    Api { response: Response, body: String },

    /// The body does not match the expected envelope
    #[error("Failed to decode response from {}: {source}", .response.url)]
    Decode {
        #[source]
        source: serde_json::Error,
        response: Response,
    },

    /// The context was cancelled while the request was in flight
    #[error("Request cancelled")]
    Cancelled,

    /// The context deadline elapsed while the request was in flight
    #[error("Request deadline exceeded")]
    DeadlineExceeded,
}

impl Error {
    /// The response descriptor, when the service answered.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Api { response, .. } | Error::Decode { response, .. } => Some(response),
            Error::Transport { response, .. } => response.as_ref(),
            _ => None,
        }
    }
}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidName(_) => Error::Validation(err.to_string()),
            QueryError::Encode(_) => Error::Request(err.to_string()),
        }
    }
}
