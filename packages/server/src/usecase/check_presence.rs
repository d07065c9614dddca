//! UseCase: オンライン状態の確認

use std::sync::Arc;

use crate::domain::{ParticipantName, ParticipantRepository};

use super::error::UseCaseError;

/// オンライン状態確認のユースケース
pub struct CheckPresenceUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl CheckPresenceUseCase {
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// True iff a participant with exactly this name is registered
    pub async fn is_online(&self, name: &ParticipantName) -> Result<bool, UseCaseError> {
        Ok(self.participants.find_by_name(name).await?.is_some())
    }

    /// Resolve the caller named by the `user` header, who must be online.
    ///
    /// # Errors
    ///
    /// `PreconditionFailed` when the header is missing, blank or names nobody
    pub async fn require_online(
        &self,
        user: Option<&str>,
    ) -> Result<ParticipantName, UseCaseError> {
        let raw = user.unwrap_or_default();
        let name = ParticipantName::new(raw.to_string())
            .map_err(|_| UseCaseError::PreconditionFailed(raw.to_string()))?;
        if !self.is_online(&name).await? {
            return Err(UseCaseError::PreconditionFailed(raw.to_string()));
        }
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MockParticipantRepository, Participant, RepositoryError, Timestamp},
        infrastructure::repository::InMemoryParticipantRepository,
    };

    fn name(raw: &str) -> ParticipantName {
        ParticipantName::new(raw.to_string()).unwrap()
    }

    async fn repository_with(names: &[&str]) -> Arc<InMemoryParticipantRepository> {
        let repository = Arc::new(InMemoryParticipantRepository::new());
        for n in names {
            repository
                .insert(Participant::new(name(n), Timestamp::new(0)))
                .await
                .unwrap();
        }
        repository
    }

    #[tokio::test]
    async fn test_is_online() {
        // テスト項目: 登録済みの名前のみオンライン
        // given (前提条件):
        let usecase = CheckPresenceUseCase::new(repository_with(&["Alice"]).await);

        // then (期待する結果):
        assert!(usecase.is_online(&name("Alice")).await.unwrap());
        assert!(!usecase.is_online(&name("alice")).await.unwrap());
    }

    #[tokio::test]
    async fn test_require_online_rejects_missing_or_unknown_user() {
        // テスト項目: ヘッダーなし・未登録ユーザーは PreconditionFailed
        // given (前提条件):
        let usecase = CheckPresenceUseCase::new(repository_with(&["Alice"]).await);

        // then (期待する結果):
        assert!(matches!(
            usecase.require_online(None).await,
            Err(UseCaseError::PreconditionFailed(_))
        ));
        assert!(matches!(
            usecase.require_online(Some("Bob")).await,
            Err(UseCaseError::PreconditionFailed(_))
        ));
        assert_eq!(
            usecase.require_online(Some("Alice")).await.unwrap(),
            name("Alice")
        );
    }

    #[tokio::test]
    async fn test_is_online_store_failure_is_internal() {
        // テスト項目: ストア障害は Internal として伝播する
        // given (前提条件):
        let mut repository = MockParticipantRepository::new();
        repository
            .expect_find_by_name()
            .returning(|_| Err(RepositoryError::Unavailable("down".to_string())));
        let usecase = CheckPresenceUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase.is_online(&name("Alice")).await;

        // then (期待する結果):
        assert!(matches!(result, Err(UseCaseError::Internal(_))));
    }
}
