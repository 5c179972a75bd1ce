//! Auth Handlers

pub mod auth;

pub use auth::{home, login, logout};
