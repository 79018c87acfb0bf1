use thiserror::Error;

use crate::database::error::StoreError;
use crate::validation::FieldError;

/// Failure kinds surfaced by the post controller
#[derive(Debug, Error)]
pub enum PostError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    Authorization(String),

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<StoreError> for PostError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => PostError::NotFound(msg),
            StoreError::InvalidIdentifier(id) => PostError::InvalidIdentifier(id),
            StoreError::Conflict(_) => {
                PostError::Conflict("Post was modified concurrently, retry the request".to_string())
            }
            other => PostError::Unexpected(other.to_string()),
        }
    }
}
