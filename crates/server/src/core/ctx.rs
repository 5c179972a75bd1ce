//! Proof that a request passed `mw_require_auth`.

use crate::core::error::{Error, Result};
use axum::{extract::FromRequestParts, http::request::Parts};

/// Authenticated request context.
///
/// Only the auth middleware builds one. It carries a short tag derived from
/// the session token so log lines of one browser session can be correlated
/// without writing the token itself to the log.
#[derive(Clone, Debug)]
pub struct Ctx {
    session_tag: String,
}

impl Ctx {
    pub(crate) fn for_session(token: &str) -> Self {
        Self {
            session_tag: token.chars().take(8).collect(),
        }
    }

    pub fn session_tag(&self) -> &str {
        &self.session_tag
    }
}

impl<S> FromRequestParts<S> for Ctx
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<Ctx>()
            .cloned()
            .ok_or(Error::Unauthorized)
    }
}
