//! Message visibility and history limits.

use super::{
    entity::Message,
    error::ValueObjectError,
    value_object::{MessageLimit, ParticipantName},
};

/// Whether `message` may be shown to `user`.
///
/// Broadcasts are visible to everyone; other messages only to their author
/// and their recipient.
pub fn is_visible_to(message: &Message, user: &ParticipantName) -> bool {
    message.to.is_broadcast() || message.to.is(user) || message.is_authored_by(user)
}

/// Messages visible to `user`, newest first.
///
/// `messages` must be in insertion order; the result is that order reversed.
pub fn visible_to(user: &ParticipantName, messages: Vec<Message>) -> Vec<Message> {
    messages
        .into_iter()
        .rev()
        .filter(|message| is_visible_to(message, user))
        .collect()
}

/// Keep the first `limit` messages of an already newest-first sequence.
///
/// An absent limit keeps everything.
///
/// # Errors
///
/// Zero, negative and non-numeric limits are rejected.
pub fn apply_limit(
    mut messages: Vec<Message>,
    limit: Option<&str>,
) -> Result<Vec<Message>, ValueObjectError> {
    let Some(raw) = limit else {
        return Ok(messages);
    };
    let limit = MessageLimit::parse(raw)?;
    messages.truncate(limit.value());
    Ok(messages)
}
