//! `/participants` endpoints.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::{
    infrastructure::dto::http::{ParticipantDto, RegisterParticipantRequest},
    ui::{error::ApiError, state::AppState},
    usecase::{ListParticipantsUseCase, RegisterParticipantUseCase},
};

/// Register a participant
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterParticipantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ParticipantDto>), ApiError> {
    let Json(request) = payload?;

    let usecase =
        RegisterParticipantUseCase::new(state.participants.clone(), state.messages.clone());
    let participant = usecase.execute(request.into()).await?;

    Ok((StatusCode::CREATED, Json(participant.into())))
}

/// List every registered participant
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, ApiError> {
    let participants = ListParticipantsUseCase::new(state.participants.clone())
        .execute()
        .await?;

    Ok(Json(participants.into_iter().map(Into::into).collect()))
}
