//! `/status` endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use crate::{
    ui::{error::ApiError, extractor::CallerName, state::AppState},
    usecase::RefreshStatusUseCase,
};

/// Refresh the caller's liveness
pub async fn refresh_status(
    State(state): State<Arc<AppState>>,
    caller: CallerName,
) -> Result<StatusCode, ApiError> {
    RefreshStatusUseCase::new(state.participants.clone())
        .execute(caller.as_deref())
        .await?;

    Ok(StatusCode::OK)
}
