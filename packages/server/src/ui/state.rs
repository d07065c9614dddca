//! Server state.

use std::sync::Arc;

use crate::{
    domain::{MessageRepository, ParticipantRepository},
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
};

/// Shared application state
///
/// Store handles are created once at startup and injected into every use case.
#[derive(Clone)]
pub struct AppState {
    /// `participants` collection
    pub participants: Arc<dyn ParticipantRepository>,
    /// `messages` collection
    pub messages: Arc<dyn MessageRepository>,
}

impl AppState {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// State backed by the in-memory store
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryParticipantRepository::new()),
            Arc::new(InMemoryMessageRepository::new()),
        )
    }
}
