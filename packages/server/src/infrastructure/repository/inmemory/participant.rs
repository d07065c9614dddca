//! InMemory Participant Repository 実装

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Participant, ParticipantName, ParticipantRepository, RepositoryError, Timestamp,
};

/// インメモリ Participant Repository 実装
#[derive(Default)]
pub struct InMemoryParticipantRepository {
    participants: Mutex<Vec<Participant>>,
}

impl InMemoryParticipantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.iter().find(|p| &p.name == name).cloned())
    }

    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        if participants.iter().any(|p| p.name == participant.name) {
            return Err(RepositoryError::ParticipantAlreadyExists(
                participant.name.into_string(),
            ));
        }
        participants.push(participant);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.clone())
    }

    async fn touch(&self, name: &ParticipantName, at: Timestamp) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        let participant = participants
            .iter_mut()
            .find(|p| &p.name == name)
            .ok_or_else(|| RepositoryError::ParticipantNotFound(name.as_str().to_string()))?;
        participant.last_seen = at;
        Ok(())
    }

    async fn find_stale(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants
            .iter()
            .filter(|p| p.is_stale(cutoff))
            .cloned()
            .collect())
    }

    async fn remove_if_stale(
        &self,
        name: &ParticipantName,
        cutoff: Timestamp,
    ) -> Result<bool, RepositoryError> {
        let mut participants = self.participants.lock().await;
        let Some(index) = participants
            .iter()
            .position(|p| &p.name == name && p.is_stale(cutoff))
        else {
            return Ok(false);
        };
        participants.remove(index);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(name: &str, last_seen: i64) -> Participant {
        Participant::new(
            ParticipantName::new(name.to_string()).unwrap(),
            Timestamp::new(last_seen),
        )
    }

    #[tokio::test]
    async fn test_insert_and_find_participant() {
        // テスト項目: 参加者を追加すると名前で取得できる
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();

        // when (操作):
        let result = repo.insert(participant("alice", 1000)).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let found = repo.find_by_name(&participant("alice", 0).name).await.unwrap();
        assert_eq!(found, Some(participant("alice", 1000)));
    }

    #[tokio::test]
    async fn test_insert_duplicate_participant_fails() {
        // テスト項目: 同名の参加者は追加できない
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();
        repo.insert(participant("alice", 1000)).await.unwrap();

        // when (操作):
        let result = repo.insert(participant("alice", 2000)).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            RepositoryError::ParticipantAlreadyExists("alice".to_string())
        );
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_all_keeps_registration_order() {
        // テスト項目: 一覧は登録順で返される
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();
        repo.insert(participant("bob", 1000)).await.unwrap();
        repo.insert(participant("alice", 2000)).await.unwrap();

        // when (操作):
        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name.into_string())
            .collect();

        // then (期待する結果):
        assert_eq!(names, vec!["bob".to_string(), "alice".to_string()]);
    }

    #[tokio::test]
    async fn test_touch_updates_last_seen() {
        // テスト項目: touch で最終確認時刻が更新される
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();
        repo.insert(participant("alice", 1000)).await.unwrap();
        let alice = participant("alice", 0).name;

        // when (操作):
        repo.touch(&alice, Timestamp::new(5000)).await.unwrap();

        // then (期待する結果):
        let found = repo.find_by_name(&alice).await.unwrap().unwrap();
        assert_eq!(found.last_seen, Timestamp::new(5000));
    }

    #[tokio::test]
    async fn test_touch_unknown_participant_fails() {
        // テスト項目: 存在しない参加者の touch はエラー
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();

        // when (操作):
        let result = repo
            .touch(&participant("ghost", 0).name, Timestamp::new(1))
            .await;

        // then (期待する結果):
        assert!(matches!(
            result.unwrap_err(),
            RepositoryError::ParticipantNotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_find_stale_uses_strict_cutoff() {
        // テスト項目: cutoff より前の参加者のみが stale として返される
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();
        repo.insert(participant("old", 1000)).await.unwrap();
        repo.insert(participant("edge", 2000)).await.unwrap();
        repo.insert(participant("fresh", 3000)).await.unwrap();

        // when (操作):
        let stale = repo.find_stale(Timestamp::new(2000)).await.unwrap();

        // then (期待する結果):
        assert_eq!(stale, vec![participant("old", 1000)]);
    }

    #[tokio::test]
    async fn test_remove_if_stale_removes_once() {
        // テスト項目: stale な参加者は一度だけ削除される
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();
        repo.insert(participant("alice", 1000)).await.unwrap();
        let alice = participant("alice", 0).name;

        // when (操作):
        let first = repo.remove_if_stale(&alice, Timestamp::new(2000)).await;
        let second = repo.remove_if_stale(&alice, Timestamp::new(2000)).await;

        // then (期待する結果):
        assert_eq!(first, Ok(true));
        assert_eq!(second, Ok(false));
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_if_stale_keeps_refreshed_participant() {
        // テスト項目: stale 判定後に更新された参加者は削除されない
        // given (前提条件):
        let repo = InMemoryParticipantRepository::new();
        repo.insert(participant("alice", 1000)).await.unwrap();
        let alice = participant("alice", 0).name;
        repo.touch(&alice, Timestamp::new(3000)).await.unwrap();

        // when (操作):
        let removed = repo.remove_if_stale(&alice, Timestamp::new(2000)).await;

        // then (期待する結果):
        assert_eq!(removed, Ok(false));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}
