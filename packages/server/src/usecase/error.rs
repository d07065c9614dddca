//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, ValidationErrors};

/// Failure of a use case, shared by every operation.
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// Malformed or missing fields (every violation is listed)
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Duplicate unique key
    #[error("participant '{0}' is already registered")]
    Conflict(String),

    /// Referenced entity is absent
    #[error("{0}")]
    NotFound(String),

    /// Actor does not own the resource, or the resource is immutable
    #[error("{0}")]
    Unauthorized(String),

    /// Actor is not currently online
    #[error("participant '{0}' is not online")]
    PreconditionFailed(String),

    /// Malformed query parameter
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Unexpected store failure
    #[error("store failure: {0}")]
    Internal(#[from] RepositoryError),
}
