//! Session records and where they live.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Per-browser authentication state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
}

impl Session {
    pub fn logged_in() -> Self {
        Self { logged_in: true }
    }
}

/// Backing store for sessions, keyed by the opaque cookie token
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, token: &str) -> Option<Session>;
    async fn save(&self, token: &str, session: Session);
    async fn remove(&self, token: &str);
}

/// Process-local session store. Sessions do not survive a restart.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    async fn save(&self, token: &str, session: Session) {
        self.sessions.write().await.insert(token.to_string(), session);
    }

    async fn remove(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}
