//! UseCase: メッセージ削除処理

use std::sync::Arc;

use crate::domain::{MessageId, MessageRepository, RepositoryError};

use super::error::UseCaseError;

/// メッセージ削除のユースケース
pub struct DeleteMessageUseCase {
    messages: Arc<dyn MessageRepository>,
}

impl DeleteMessageUseCase {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// Delete the requester's own message.
    ///
    /// # Errors
    ///
    /// * `NotFound` - no message has this id
    /// * `Unauthorized` - the requester is not the author, or it is a status message
    pub async fn execute(&self, id: &str, requester: Option<&str>) -> Result<(), UseCaseError> {
        let not_found = || UseCaseError::NotFound(format!("message '{id}' not found"));

        let message_id = MessageId::new(id.to_string()).map_err(|_| not_found())?;
        let message = self
            .messages
            .find_by_id(&message_id)
            .await?
            .ok_or_else(not_found)?;

        if requester != Some(message.from.as_str()) || message.is_status() {
            return Err(UseCaseError::Unauthorized(format!(
                "message '{id}' cannot be deleted by this participant"
            )));
        }

        self.messages
            .remove(&message_id)
            .await
            .map_err(|e| match e {
                RepositoryError::MessageNotFound(_) => not_found(),
                other => UseCaseError::Internal(other),
            })?;

        tracing::info!(id = %message_id, author = %message.from, "message deleted");
        Ok(())
    }
}
