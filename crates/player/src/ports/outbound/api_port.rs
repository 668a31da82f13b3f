//! API error type shared by the outbound HTTP boundary
//!
//! `Display` is the message shown to the user after the "Error: " prefix, so
//! the variants carry text that already reads well on the status line.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, timeout, ...)
    #[error("{0}")]
    RequestFailed(String),

    /// The server answered with a non-success status.
    /// `message` is the server detail or the generic status message.
    #[error("{message}")]
    HttpError { status: u16, message: String },

    /// A success response body was not valid JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    /// The configured base URL and path do not form a valid URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build an HTTP error from a failed response's status and body
    pub fn from_failed_response(status: u16, body: &[u8]) -> Self {
        ApiError::HttpError {
            status,
            message: questsmith_shared::failure_message(status, body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
