//! `/messages` endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{MessageDto, MessageRequest, MessagesQuery},
    ui::{error::ApiError, extractor::CallerName, state::AppState},
    usecase::{DeleteMessageUseCase, EditMessageUseCase, FetchMessagesUseCase, PostMessageUseCase},
};

/// Post a message as the caller
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    caller: CallerName,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let Json(request) = payload?;

    let message = PostMessageUseCase::new(state.participants.clone(), state.messages.clone())
        .execute(caller.as_deref(), request.into())
        .await?;
    Ok((StatusCode::CREATED, Json(message.into())))
}

/// Messages visible to the caller, newest first
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    caller: CallerName,
    query: Result<Query<MessagesQuery>, QueryRejection>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let Query(query) = query?;

    let messages = FetchMessagesUseCase::new(state.participants.clone(), state.messages.clone())
        .execute(caller.as_deref(), query.limit.as_deref())
        .await?;

    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

/// Edit one of the caller's messages
///
/// An unknown id or a foreign message is reported before a malformed body.
pub async fn edit_message(
    State(state): State<Arc<AppState>>,
    caller: CallerName,
    Path(id): Path<String>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let usecase = EditMessageUseCase::new(state.messages.clone());
    let message = usecase.authorize(&id, caller.as_deref()).await?;

    let Json(request) = payload?;
    usecase.apply(message, request.into()).await?;

    Ok(StatusCode::OK)
}

/// Delete one of the caller's messages
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    caller: CallerName,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    DeleteMessageUseCase::new(state.messages.clone())
        .execute(&id, caller.as_deref())
        .await?;

    Ok(StatusCode::OK)
}
