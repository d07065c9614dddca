//! Core domain models for the chat room.

use serde::{Deserialize, Serialize};

use super::{
    validation::MessageDraft,
    value_object::{MessageId, MessageText, ParticipantName, Recipient, Timestamp},
};

/// Represents a participant registered in the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant name (unique in the room)
    pub name: ParticipantName,
    /// Timestamp of the last registration or status refresh
    pub last_seen: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: ParticipantName, last_seen: Timestamp) -> Self {
        Self { name, last_seen }
    }

    /// Whether the participant has been silent since before `cutoff`
    pub fn is_stale(&self, cutoff: Timestamp) -> bool {
        self.last_seen < cutoff
    }
}

/// Kind of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Public message
    Message,
    /// Message addressed to one participant
    PrivateMessage,
    /// System notice (join/leave), never authored by participants
    Status,
}

impl MessageKind {
    /// Kinds a participant may post or edit into.
    pub const AUTHORABLE: &'static [&'static str] = &["message", "private_message"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }

    /// Parse a kind a participant is allowed to author.
    pub fn parse_authorable(raw: &str) -> Option<Self> {
        match raw {
            "message" => Some(Self::Message),
            "private_message" => Some(Self::PrivateMessage),
            _ => None,
        }
    }
}

/// System notice emitted when presence changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusNotice {
    Joined,
    Left,
}

impl StatusNotice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Joined => "joined",
            Self::Left => "left",
        }
    }
}

/// Represents a chat message in the domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Author name
    pub from: ParticipantName,
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
    /// Wall clock time of posting (`HH:MM:SS`)
    pub time: String,
}

impl Message {
    /// Create a message authored by a participant
    pub fn new(id: MessageId, from: ParticipantName, draft: MessageDraft, time: String) -> Self {
        Self {
            id,
            from,
            to: draft.to,
            text: draft.text,
            kind: draft.kind,
            time,
        }
    }

    /// Create a broadcast status notice about `about`
    pub fn status(id: MessageId, about: ParticipantName, notice: StatusNotice, time: String) -> Self {
        Self {
            id,
            from: about,
            to: Recipient::broadcast(),
            text: MessageText::notice(notice.as_str()),
            kind: MessageKind::Status,
            time,
        }
    }

    pub fn is_status(&self) -> bool {
        self.kind == MessageKind::Status
    }

    pub fn is_authored_by(&self, name: &ParticipantName) -> bool {
        &self.from == name
    }

    /// Overwrite the mutable fields. `from`, `id` and `time` are kept.
    pub fn apply(&mut self, draft: MessageDraft) {
        self.to = draft.to;
        self.text = draft.text;
        self.kind = draft.kind;
    }
}

/// A participant removed by an inactivity sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvictedParticipant {
    pub name: ParticipantName,
    pub last_seen: Timestamp,
    pub evicted_at: Timestamp,
}
