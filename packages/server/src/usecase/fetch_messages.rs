//! UseCase: メッセージ履歴の取得

use std::sync::Arc;

use crate::domain::{
    Message, MessageRepository, ParticipantRepository, apply_limit, visible_to,
};

use super::{check_presence::CheckPresenceUseCase, error::UseCaseError};

/// メッセージ履歴取得のユースケース
pub struct FetchMessagesUseCase {
    presence: CheckPresenceUseCase,
    messages: Arc<dyn MessageRepository>,
}

impl FetchMessagesUseCase {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            presence: CheckPresenceUseCase::new(participants),
            messages,
        }
    }

    /// Messages visible to the caller, newest first, capped by `limit`.
    ///
    /// # Errors
    ///
    /// * `PreconditionFailed` - the caller is not online
    /// * `InvalidArgument` - `limit` is zero, negative or not an integer
    pub async fn execute(
        &self,
        user: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Vec<Message>, UseCaseError> {
        let user = self.presence.require_online(user).await?;
        let history = self.messages.list_all().await?;

        apply_limit(visible_to(&user, history), limit)
            .map_err(|e| UseCaseError::InvalidArgument(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MessageFields, Participant, ParticipantName, Timestamp},
        infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
        usecase::PostMessageUseCase,
    };

    async fn create_fixture() -> (FetchMessagesUseCase, PostMessageUseCase) {
        let participants = Arc::new(InMemoryParticipantRepository::new());
        for name in ["alice", "bob", "carol"] {
            participants
                .insert(Participant::new(
                    ParticipantName::new(name.to_string()).unwrap(),
                    Timestamp::new(0),
                ))
                .await
                .unwrap();
        }
        let messages = Arc::new(InMemoryMessageRepository::new());
        (
            FetchMessagesUseCase::new(participants.clone(), messages.clone()),
            PostMessageUseCase::new(participants, messages),
        )
    }

    async fn post(usecase: &PostMessageUseCase, from: &str, to: &str, text: &str) {
        let kind = if to == "Todos" { "message" } else { "private_message" };
        usecase
            .execute(
                Some(from),
                MessageFields {
                    to: Some(to.to_string()),
                    text: Some(text.to_string()),
                    kind: Some(kind.to_string()),
                },
            )
            .await
            .unwrap();
    }

    fn texts(messages: &[Message]) -> Vec<&str> {
        messages.iter().map(|m| m.text.as_str()).collect()
    }

    #[tokio::test]
    async fn test_fetch_messages_visible_newest_first() {
        // テスト項目: 見えるメッセージのみが新しい順に返される
        // given (前提条件):
        let (fetch, post_usecase) = create_fixture().await;
        post(&post_usecase, "bob", "Todos", "hello all").await;
        post(&post_usecase, "bob", "carol", "secret").await;
        post(&post_usecase, "carol", "alice", "for alice").await;

        // when (操作):
        let messages = fetch.execute(Some("alice"), None).await.unwrap();

        // then (期待する結果):
        assert_eq!(texts(&messages), vec!["for alice", "hello all"]);
    }

    #[tokio::test]
    async fn test_fetch_messages_with_limit() {
        // テスト項目: limit 件の最新メッセージが返される
        // given (前提条件):
        let (fetch, post_usecase) = create_fixture().await;
        post(&post_usecase, "alice", "Todos", "1").await;
        post(&post_usecase, "alice", "Todos", "2").await;

        // when (操作):
        let messages = fetch.execute(Some("bob"), Some("1")).await.unwrap();

        // then (期待する結果):
        assert_eq!(texts(&messages), vec!["2"]);
    }

    #[tokio::test]
    async fn test_fetch_messages_invalid_limit() {
        // テスト項目: 不正な limit は InvalidArgument
        // given (前提条件):
        let (fetch, _post) = create_fixture().await;

        // then (期待する結果):
        for limit in ["-1", "0", "abc"] {
            assert!(matches!(
                fetch.execute(Some("alice"), Some(limit)).await,
                Err(UseCaseError::InvalidArgument(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_fetch_messages_offline_user() {
        // テスト項目: オンラインでないユーザーは PreconditionFailed
        // given (前提条件):
        let (fetch, _post) = create_fixture().await;

        // then (期待する結果):
        assert!(matches!(
            fetch.execute(Some("mallory"), None).await,
            Err(UseCaseError::PreconditionFailed(_))
        ));
    }
}
