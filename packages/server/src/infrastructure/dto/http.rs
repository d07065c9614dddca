//! HTTP API request/response DTOs for the chat room.

use serde::{Deserialize, Serialize};

use crate::domain::{Message, MessageFields, MessageKind, Participant, ParticipantFields};

/// Body of `POST /participants`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterParticipantRequest {
    pub name: Option<String>,
}

impl From<RegisterParticipantRequest> for ParticipantFields {
    fn from(request: RegisterParticipantRequest) -> Self {
        Self { name: request.name }
    }
}

/// Body of `POST /messages` and `PUT /messages/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageRequest {
    pub to: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl From<MessageRequest> for MessageFields {
    fn from(request: MessageRequest) -> Self {
        Self {
            to: request.to,
            text: request.text,
            kind: request.kind,
        }
    }
}

/// Query of `GET /messages`
///
/// `limit` stays a string so that non-numeric values reach validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesQuery {
    pub limit: Option<String>,
}

/// Participant as listed by `GET /participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub name: String,
    /// Unix timestamp (milliseconds) of the last registration or status refresh
    pub last_status: i64,
}

impl From<Participant> for ParticipantDto {
    fn from(participant: Participant) -> Self {
        Self {
            name: participant.name.into_string(),
            last_status: participant.last_seen.value(),
        }
    }
}

/// Message as returned by the messages endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub time: String, // HH:MM:SS
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.as_str().to_string(),
            from: message.from.into_string(),
            to: message.to.as_str().to_string(),
            text: message.text.as_str().to_string(),
            kind: message.kind,
            time: message.time,
        }
    }
}
