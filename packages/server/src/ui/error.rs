//! Translation of use case failures into HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::usecase::UseCaseError;

/// Error returned by every handler
#[derive(Debug)]
pub enum ApiError {
    /// A use case failed
    UseCase(UseCaseError),
    /// The JSON body could not be read
    MalformedBody(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UseCase(err) => match err {
                UseCaseError::Validation(_)
                | UseCaseError::PreconditionFailed(_)
                | UseCaseError::InvalidArgument(_) => StatusCode::UNPROCESSABLE_ENTITY,
                UseCaseError::Conflict(_) => StatusCode::CONFLICT,
                UseCaseError::NotFound(_) => StatusCode::NOT_FOUND,
                UseCaseError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                UseCaseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        Self::UseCase(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::UseCase(UseCaseError::InvalidArgument(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::UseCase(UseCaseError::Validation(errors)) => {
                (status, Json(errors.messages())).into_response()
            }
            Self::UseCase(UseCaseError::Internal(err)) => {
                tracing::error!(error = %err, "internal error while handling request");
                (
                    status,
                    Json(serde_json::json!({"error": "internal server error"})),
                )
                    .into_response()
            }
            Self::UseCase(err) => {
                tracing::debug!(status = %status, error = %err, "request rejected");
                (status, Json(serde_json::json!({"error": err.to_string()}))).into_response()
            }
            Self::MalformedBody(message) => (status, Json(vec![message])).into_response(),
        }
    }
}
