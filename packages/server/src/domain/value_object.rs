//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::{fmt, num::IntErrorKind};

use serde::{Deserialize, Serialize};

use super::error::ValueObjectError;

/// Participant name value object.
///
/// Names are matched exactly: `Alice` and `alice` are different participants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Create a new ParticipantName.
    ///
    /// # Arguments
    ///
    /// * `name` - The participant name, stored as given
    ///
    /// # Returns
    ///
    /// A Result containing the ParticipantName or an error if the name is blank
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.trim().is_empty() {
            return Err(ValueObjectError::ParticipantNameEmpty);
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParticipantName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message recipient value object.
///
/// Either the broadcast recipient (`Todos`) or a participant name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipient(String);

impl Recipient {
    /// Recipient that addresses every participant in the room.
    pub const BROADCAST: &'static str = "Todos";

    pub fn new(to: String) -> Result<Self, ValueObjectError> {
        if to.is_empty() {
            return Err(ValueObjectError::RecipientEmpty);
        }
        Ok(Self(to))
    }

    pub fn broadcast() -> Self {
        Self(Self::BROADCAST.to_string())
    }

    pub fn is_broadcast(&self) -> bool {
        self.0 == Self::BROADCAST
    }

    /// True when this recipient is exactly `name`.
    pub fn is(&self, name: &ParticipantName) -> bool {
        self.0 == name.as_str()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message text value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageText(String);

impl MessageText {
    /// Create a new MessageText.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::MessageTextEmpty` for empty text
    pub fn new(text: String) -> Result<Self, ValueObjectError> {
        if text.is_empty() {
            return Err(ValueObjectError::MessageTextEmpty);
        }
        Ok(Self(text))
    }

    /// Text of a system generated notice.
    pub(crate) fn notice(text: &'static str) -> Self {
        Self(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message identifier value object (UUID string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    /// Parse a MessageId from its string form.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::MessageIdInvalidFormat` unless `id` is a UUID
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        match uuid::Uuid::parse_str(&id) {
            Ok(uuid) => Ok(Self::from_uuid(uuid)),
            Err(_) => Err(ValueObjectError::MessageIdInvalidFormat(id)),
        }
    }

    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// The timestamp `millis` milliseconds earlier.
    pub fn minus_millis(&self, millis: i64) -> Self {
        Self(self.0.saturating_sub(millis))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum number of messages a history request returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLimit(usize);

impl MessageLimit {
    /// Parse a `limit` query value.
    ///
    /// Zero, negative and non-integer values are rejected. Values beyond the
    /// integer range saturate.
    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        match raw.trim().parse::<i64>() {
            Ok(value) if value <= 0 => Err(ValueObjectError::LimitNotPositive(value)),
            Ok(value) => Ok(Self(usize::try_from(value).unwrap_or(usize::MAX))),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Self(usize::MAX)),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
                Err(ValueObjectError::LimitNotPositive(i64::MIN))
            }
            Err(_) => Err(ValueObjectError::LimitNotNumeric(raw.to_string())),
        }
    }

    pub fn value(&self) -> usize {
        self.0
    }
}
