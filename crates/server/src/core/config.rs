//! Server configuration

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::auth::{MemorySessionStore, SessionGate, SessionStore};
use crate::extract::{LopdfExtractor, TextExtractor};
use crate::files::FileStore;

/// The single username/password pair that unlocks the file manager
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("admin", "12345")
    }
}

/// Configuration for the file manager server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Directory holding every uploaded file
    pub storage_dir: PathBuf,
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// Login credentials
    pub credentials: Credentials,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("uploads"),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            credentials: Credentials::default(),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `FILEDESK_*` environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("FILEDESK_STORAGE_DIR") {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Ok(addr) = std::env::var("FILEDESK_ADDR") {
            config.bind_addr = addr
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid FILEDESK_ADDR {:?}: {}", addr, e))?;
        }
        if let Ok(username) = std::env::var("FILEDESK_USERNAME") {
            config.credentials.username = username;
        }
        if let Ok(password) = std::env::var("FILEDESK_PASSWORD") {
            config.credentials.password = password;
        }

        Ok(config)
    }

    /// Create config rooted at a custom storage directory
    pub fn with_storage_dir(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            ..Self::default()
        }
    }

    /// Ensure the storage directory exists
    pub async fn ensure_dirs(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.storage_dir).await?;
        Ok(())
    }
}

/// App state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub files: Arc<FileStore>,
    pub sessions: Arc<SessionGate>,
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    /// Wire the default in-memory session store and lopdf extractor
    pub fn new(config: ServerConfig) -> Self {
        Self::with_parts(
            config,
            Arc::new(MemorySessionStore::new()),
            Arc::new(LopdfExtractor),
        )
    }

    pub fn with_parts(
        config: ServerConfig,
        session_store: Arc<dyn SessionStore>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        let files = Arc::new(FileStore::new(config.storage_dir.clone()));
        let sessions = Arc::new(SessionGate::new(session_store, config.credentials.clone()));
        Self {
            config: Arc::new(config),
            files,
            sessions,
            extractor,
        }
    }
}
