//! Error types for the domain layer

use thiserror::Error;

/// Errors raised while decoding a quest document returned by the generation API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestError {
    /// The response body was valid JSON but not an object
    #[error("Quest document must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A known field had the wrong shape (e.g. `steps` was not a list)
    #[error("Quest document has an invalid shape: {0}")]
    InvalidShape(String),
}
