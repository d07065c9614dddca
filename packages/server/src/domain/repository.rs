//! Repository traits (ドメイン層が定義するデータアクセスの抽象)
//!
//! The document store is an external collaborator. Each call is atomic on its
//! own; no operation spans several calls.

use async_trait::async_trait;
use thiserror::Error;

use super::{
    entity::{Message, Participant},
    validation::MessageDraft,
    value_object::{MessageId, ParticipantName, Timestamp},
};

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("participant '{0}' not found")]
    ParticipantNotFound(String),

    #[error("participant '{0}' already exists")]
    ParticipantAlreadyExists(String),

    #[error("message '{0}' not found")]
    MessageNotFound(String),

    /// The backing store failed
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Access to the `participants` collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Find a participant by exact name
    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError>;

    /// Insert a participant, rejecting a name that is already taken
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// All participants in registration order
    async fn list_all(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// Set `last_seen` of an existing participant
    async fn touch(&self, name: &ParticipantName, at: Timestamp) -> Result<(), RepositoryError>;

    /// Participants whose `last_seen` is strictly before `cutoff`
    async fn find_stale(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError>;

    /// Delete a participant only if it is still stale at `cutoff`
    ///
    /// Returns `false` when the participant is gone or was refreshed since it
    /// was found stale.
    async fn remove_if_stale(
        &self,
        name: &ParticipantName,
        cutoff: Timestamp,
    ) -> Result<bool, RepositoryError>;
}

/// Access to the `messages` collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message
    async fn insert(&self, message: Message) -> Result<(), RepositoryError>;

    /// All messages in insertion order
    async fn list_all(&self) -> Result<Vec<Message>, RepositoryError>;

    async fn find_by_id(&self, id: &MessageId) -> Result<Option<Message>, RepositoryError>;

    /// Overwrite `to`, `text` and `kind` of an existing message
    async fn update(&self, id: &MessageId, draft: MessageDraft) -> Result<(), RepositoryError>;

    /// Delete a message by id
    async fn remove(&self, id: &MessageId) -> Result<(), RepositoryError>;
}
