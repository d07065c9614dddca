//! Input schemas.
//!
//! Each entity has one schema that checks every field and reports all
//! violations together.

use super::{
    entity::MessageKind,
    error::{FieldViolation, ValidationErrors},
    sanitize::strip_markup,
    value_object::{MessageText, ParticipantName, Recipient},
};

/// Raw registration input.
#[derive(Debug, Clone, Default)]
pub struct ParticipantFields {
    pub name: Option<String>,
}

impl ParticipantFields {
    /// Validate a registration request.
    pub fn parse(self) -> Result<ParticipantName, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let Some(name) = self.name else {
            errors.push("name", FieldViolation::Required);
            return Err(errors);
        };
        ParticipantName::new(name).map_err(|_| {
            errors.push("name", FieldViolation::Empty);
            errors
        })
    }
}

/// Raw message input, as posted or as sent for an edit.
#[derive(Debug, Clone, Default)]
pub struct MessageFields {
    pub to: Option<String>,
    pub text: Option<String>,
    pub kind: Option<String>,
}

/// Validated, sanitized message content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
}

impl MessageDraft {
    /// Sanitize and validate message fields.
    ///
    /// Markup is stripped from every field first; all violations are collected.
    pub fn parse(fields: MessageFields) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let to = match fields.to.as_deref().map(strip_markup) {
            None => {
                errors.push("to", FieldViolation::Required);
                None
            }
            Some(to) => Recipient::new(to)
                .map_err(|_| errors.push("to", FieldViolation::Empty))
                .ok(),
        };

        let text = match fields.text.as_deref().map(strip_markup) {
            None => {
                errors.push("text", FieldViolation::Required);
                None
            }
            Some(text) => MessageText::new(text)
                .map_err(|_| errors.push("text", FieldViolation::Empty))
                .ok(),
        };

        let kind = match fields.kind.as_deref().map(strip_markup) {
            None => {
                errors.push("type", FieldViolation::Required);
                None
            }
            Some(kind) => {
                let parsed = MessageKind::parse_authorable(&kind);
                if parsed.is_none() {
                    errors.push(
                        "type",
                        FieldViolation::NotOneOf {
                            allowed: MessageKind::AUTHORABLE,
                        },
                    );
                }
                parsed
            }
        };

        match (to, text, kind) {
            (Some(to), Some(text), Some(kind)) if errors.is_empty() => {
                Ok(Self { to, text, kind })
            }
            _ => Err(errors),
        }
    }
}
