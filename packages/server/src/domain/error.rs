//! Domain layer error definitions.

use std::fmt;

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ParticipantName validation error
    #[error("ParticipantName cannot be empty")]
    ParticipantNameEmpty,

    /// Recipient validation error
    #[error("Recipient cannot be empty")]
    RecipientEmpty,

    /// MessageText validation error
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,

    /// MessageId invalid format error (not a valid UUID format)
    #[error("MessageId must be a valid UUID format (got: {0})")]
    MessageIdInvalidFormat(String),

    /// Limit is not an integer
    #[error("limit must be an integer (got: {0})")]
    LimitNotNumeric(String),

    /// Limit is zero or negative
    #[error("limit must be a positive integer (got: {0})")]
    LimitNotPositive(i64),
}

/// A single schema violation on one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldViolation {
    Required,
    Empty,
    NotOneOf { allowed: &'static [&'static str] },
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "is required"),
            Self::Empty => write!(f, "is not allowed to be empty"),
            Self::NotOneOf { allowed } => write!(f, "must be one of [{}]", allowed.join(", ")),
        }
    }
}

/// Every schema violation found in one input, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<(&'static str, FieldViolation)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation on `field`.
    pub fn push(&mut self, field: &'static str, violation: FieldViolation) {
        self.violations.push((field, violation));
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[(&'static str, FieldViolation)] {
        &self.violations
    }

    /// Human readable messages, e.g. `"to" is not allowed to be empty`.
    pub fn messages(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|(field, violation)| format!("\"{field}\" {violation}"))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: {}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
