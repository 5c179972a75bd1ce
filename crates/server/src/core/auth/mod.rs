//! Session Gate
//!
//! One configured credential pair, sessions keyed by a random cookie token.
//! Every protected route re-checks the session through `mw_require_auth`.

pub mod handlers;
pub mod middleware;
pub mod store;

pub use store::{MemorySessionStore, Session, SessionStore};

use crate::core::config::Credentials;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "filedesk_session";

pub struct SessionGate {
    store: Arc<dyn SessionStore>,
    credentials: Credentials,
}

impl SessionGate {
    pub fn new(store: Arc<dyn SessionStore>, credentials: Credentials) -> Self {
        Self { store, credentials }
    }

    /// True iff the token names a session with `logged_in` set
    pub async fn is_authenticated(&self, token: Option<&str>) -> bool {
        let Some(token) = token else {
            return false;
        };
        self.store
            .load(token)
            .await
            .map(|s| s.logged_in)
            .unwrap_or(false)
    }

    /// Check the credentials and, on a match, open a new session.
    ///
    /// Returns the new session token. A mismatch changes nothing.
    pub async fn login(&self, username: &str, password: &str) -> Option<String> {
        if !self.credentials.matches(username, password) {
            warn!("[Auth] Rejected login for {:?}", username);
            return None;
        }

        let token = Uuid::new_v4().to_string();
        self.store.save(&token, Session::logged_in()).await;
        info!("[Auth] {} logged in", username);
        Some(token)
    }

    /// Drop whatever session the token names. Safe to call repeatedly.
    pub async fn logout(&self, token: Option<&str>) {
        if let Some(token) = token {
            self.store.remove(token).await;
            info!("[Auth] Session closed");
        }
    }
}
