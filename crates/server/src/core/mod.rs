//! Core Service Layer
//!
//! Shared infrastructure for the file manager: configuration, the session
//! gate, request context, errors and routing.

pub mod auth;
pub mod config;
pub mod ctx;
pub mod error;
pub mod router;

// Re-exports for convenience
pub use config::{AppState, Credentials, ServerConfig};
pub use ctx::Ctx;
pub use error::{Error, Result};
pub use router::router;
