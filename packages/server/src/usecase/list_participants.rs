//! UseCase: 参加者一覧の取得

use std::sync::Arc;

use crate::domain::{Participant, ParticipantRepository};

use super::error::UseCaseError;

/// 参加者一覧取得のユースケース
pub struct ListParticipantsUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl ListParticipantsUseCase {
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// All participants in registration order
    pub async fn execute(&self) -> Result<Vec<Participant>, UseCaseError> {
        Ok(self.participants.list_all().await?)
    }
}
