//! Service layer error types
//!
//! This module defines errors that can occur in the application service layer,
//! abstracting over transport errors and malformed quest documents.

use thiserror::Error;

use crate::ports::outbound::ApiError;
use questsmith_domain::QuestError;

/// Errors that can occur in service operations.
///
/// `Display` is the user-facing text that follows "Error: " on the status line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Transport or HTTP failure
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server answered 2xx but the body is not a usable quest
    #[error(transparent)]
    InvalidQuest(#[from] QuestError),
}

impl ServiceError {
    /// HTTP status of the failed response, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Api(e) => e.status(),
            ServiceError::InvalidQuest(_) => None,
        }
    }
}
