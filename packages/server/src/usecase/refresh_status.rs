//! UseCase: 在室状態の更新

use std::sync::Arc;

use yoriai_shared::time::get_jst_timestamp;

use crate::domain::{ParticipantName, ParticipantRepository, RepositoryError, Timestamp};

use super::error::UseCaseError;

/// 在室状態更新のユースケース
pub struct RefreshStatusUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl RefreshStatusUseCase {
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// Mark the participant named by the `user` header as seen now.
    ///
    /// # Errors
    ///
    /// `NotFound` when the header is missing or names nobody
    pub async fn execute(&self, user: Option<&str>) -> Result<(), UseCaseError> {
        let raw = user.unwrap_or_default();
        let name = ParticipantName::new(raw.to_string())
            .map_err(|_| UseCaseError::NotFound(format!("participant '{raw}' not found")))?;

        self.participants
            .touch(&name, Timestamp::new(get_jst_timestamp()))
            .await
            .map_err(|e| match e {
                RepositoryError::ParticipantNotFound(name) => {
                    UseCaseError::NotFound(format!("participant '{name}' not found"))
                }
                other => UseCaseError::Internal(other),
            })?;

        tracing::debug!(participant = %name, "status refreshed");
        Ok(())
    }
}
