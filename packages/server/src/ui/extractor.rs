//! Extractor for the caller identity header.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying the caller's participant name
pub const USER_HEADER: &str = "user";

/// Value of the `user` header, if present and readable.
///
/// Never rejects; each use case decides what a missing caller means.
#[derive(Debug, Clone, Default)]
pub struct CallerName(pub Option<String>);

impl CallerName {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for CallerName
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(USER_HEADER)
            // any UTF-8, not only visible ASCII
            .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
            .map(str::to_string);
        Ok(Self(user))
    }
}
