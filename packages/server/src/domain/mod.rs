//! Domain layer for the chat room.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod sanitize;
pub mod validation;
pub mod value_object;
pub mod visibility;

pub use entity::{EvictedParticipant, Message, MessageKind, Participant, StatusNotice};
pub use error::{FieldViolation, ValidationErrors, ValueObjectError};
pub use factory::MessageIdFactory;
pub use repository::{MessageRepository, ParticipantRepository, RepositoryError};
#[cfg(test)]
pub use repository::{MockMessageRepository, MockParticipantRepository};
pub use validation::{MessageDraft, MessageFields, ParticipantFields};
pub use value_object::{MessageId, MessageLimit, MessageText, ParticipantName, Recipient, Timestamp};
pub use visibility::{apply_limit, visible_to};
