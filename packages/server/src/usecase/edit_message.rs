//! UseCase: メッセージ編集処理
//!
//! Checks run in order: existence, authorship, then the message schema.
//! `authorize` covers the first two so the caller can defer reading the body.

use std::sync::Arc;

use crate::domain::{
    Message, MessageDraft, MessageFields, MessageId, MessageRepository, RepositoryError,
};

use super::error::UseCaseError;

/// メッセージ編集のユースケース
pub struct EditMessageUseCase {
    messages: Arc<dyn MessageRepository>,
}

impl EditMessageUseCase {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// Find the message `requester` is allowed to edit.
    ///
    /// # Errors
    ///
    /// * `NotFound` - no message has this id
    /// * `Unauthorized` - the requester is not the author, or it is a status message
    pub async fn authorize(
        &self,
        id: &str,
        requester: Option<&str>,
    ) -> Result<Message, UseCaseError> {
        let message_id = MessageId::new(id.to_string()).map_err(|_| not_found(id))?;
        let message = self
            .messages
            .find_by_id(&message_id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if requester != Some(message.from.as_str()) {
            return Err(UseCaseError::Unauthorized(format!(
                "message '{id}' belongs to another participant"
            )));
        }
        if message.is_status() {
            return Err(UseCaseError::Unauthorized(format!(
                "status message '{id}' cannot be edited"
            )));
        }

        Ok(message)
    }

    /// Overwrite `to`, `text` and `kind` of a message returned by `authorize`.
    ///
    /// # Errors
    ///
    /// * `Validation` - the new content is invalid
    /// * `NotFound` - the message was deleted in the meantime
    pub async fn apply(&self, message: Message, fields: MessageFields) -> Result<(), UseCaseError> {
        let draft = MessageDraft::parse(fields)?;
        self.messages
            .update(&message.id, draft)
            .await
            .map_err(|e| match e {
                RepositoryError::MessageNotFound(_) => not_found(message.id.as_str()),
                other => UseCaseError::Internal(other),
            })?;

        tracing::info!(id = %message.id, author = %message.from, "message edited");
        Ok(())
    }
}

fn not_found(id: &str) -> UseCaseError {
    UseCaseError::NotFound(format!("message '{id}' not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            MessageIdFactory, MessageKind, MessageText, ParticipantName, Recipient, StatusNotice,
        },
        infrastructure::repository::InMemoryMessageRepository,
    };

    fn name(raw: &str) -> ParticipantName {
        ParticipantName::new(raw.to_string()).unwrap()
    }

    async fn repository_with(message: Message) -> Arc<InMemoryMessageRepository> {
        let repository = Arc::new(InMemoryMessageRepository::new());
        repository.insert(message).await.unwrap();
        repository
    }

    fn posted_by(author: &str) -> Message {
        Message::new(
            MessageIdFactory::generate(),
            name(author),
            MessageDraft {
                to: Recipient::broadcast(),
                text: MessageText::new("original".to_string()).unwrap(),
                kind: MessageKind::Message,
            },
            "08:00:00".to_string(),
        )
    }

    async fn edit(
        usecase: &EditMessageUseCase,
        id: &str,
        requester: Option<&str>,
        fields: MessageFields,
    ) -> Result<(), UseCaseError> {
        let message = usecase.authorize(id, requester).await?;
        usecase.apply(message, fields).await
    }

    fn fields(to: &str, text: &str, kind: &str) -> MessageFields {
        MessageFields {
            to: Some(to.to_string()),
            text: Some(text.to_string()),
            kind: Some(kind.to_string()),
        }
    }

    #[tokio::test]
    async fn test_edit_message_by_author() {
        // テスト項目: 投稿者は to/text/kind のみを編集できる
        // given (前提条件):
        let original = posted_by("alice");
        let repository = repository_with(original.clone()).await;
        let usecase = EditMessageUseCase::new(repository.clone());

        // when (操作):
        let result = edit(
            &usecase,
            original.id.as_str(),
            Some("alice"),
            fields("bob", "edited", "private_message"),
        )
        .await;

        // then (期待する結果):
        assert!(result.is_ok());
        let edited = repository.find_by_id(&original.id).await.unwrap().unwrap();
        assert_eq!(edited.text.as_str(), "edited");
        assert_eq!(edited.to.as_str(), "bob");
        assert_eq!(edited.kind, MessageKind::PrivateMessage);
        assert_eq!(edited.from, original.from);
        assert_eq!(edited.time, original.time);
    }

    #[tokio::test]
    async fn test_edit_message_by_non_author_is_unauthorized() {
        // テスト項目: 投稿者以外の編集は Unauthorized で、内容は変わらない
        // given (前提条件):
        let original = posted_by("alice");
        let repository = repository_with(original.clone()).await;
        let usecase = EditMessageUseCase::new(repository.clone());

        // when (操作):
        let result = edit(
            &usecase,
            original.id.as_str(),
            Some("bob"),
            fields("Todos", "x", "message"),
        )
        .await;

        // then (期待する結果):
        assert!(matches!(result, Err(UseCaseError::Unauthorized(_))));
        let unchanged = repository.find_by_id(&original.id).await.unwrap().unwrap();
        assert_eq!(unchanged, original);
    }

    #[tokio::test]
    async fn test_edit_status_message_is_unauthorized() {
        // テスト項目: ステータスメッセージは編集できない
        // given (前提条件):
        let status = Message::status(
            MessageIdFactory::generate(),
            name("alice"),
            StatusNotice::Joined,
            "08:00:00".to_string(),
        );
        let usecase = EditMessageUseCase::new(repository_with(status.clone()).await);

        // when (操作):
        let result = edit(
            &usecase,
            status.id.as_str(),
            Some("alice"),
            fields("Todos", "x", "message"),
        )
        .await;

        // then (期待する結果):
        assert!(matches!(result, Err(UseCaseError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_edit_missing_message_is_not_found() {
        // テスト項目: 存在しない・不正な ID の編集は NotFound
        // given (前提条件):
        let usecase = EditMessageUseCase::new(Arc::new(InMemoryMessageRepository::new()));
        let missing = MessageIdFactory::generate();

        // then (期待する結果):
        assert!(matches!(
            edit(
                &usecase,
                missing.as_str(),
                Some("alice"),
                fields("Todos", "x", "message")
            )
            .await,
            Err(UseCaseError::NotFound(_))
        ));
        assert!(matches!(
            edit(&usecase, "42", Some("alice"), fields("Todos", "x", "message")).await,
            Err(UseCaseError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_edit_message_invalid_content() {
        // テスト項目: 投稿者でも不正な内容なら Validation
        // given (前提条件):
        let original = posted_by("alice");
        let usecase = EditMessageUseCase::new(repository_with(original.clone()).await);

        // when (操作):
        let result = edit(
            &usecase,
            original.id.as_str(),
            Some("alice"),
            fields("Todos", "", "shout"),
        )
        .await;

        // then (期待する結果):
        let Err(UseCaseError::Validation(errors)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(errors.violations().len(), 2);
    }

    #[tokio::test]
    async fn test_authorize_checks_existence_before_content() {
        // テスト項目: 内容を見る前に存在確認と投稿者確認が行われる
        // given (前提条件):
        let original = posted_by("alice");
        let usecase = EditMessageUseCase::new(repository_with(original.clone()).await);

        // when (操作):
        let authorized = usecase.authorize(original.id.as_str(), Some("alice")).await;
        let missing = usecase
            .authorize(MessageIdFactory::generate().as_str(), Some("alice"))
            .await;

        // then (期待する結果):
        assert_eq!(authorized.unwrap(), original);
        assert!(matches!(missing, Err(UseCaseError::NotFound(_))));
    }
}
