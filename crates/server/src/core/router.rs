//! Core Router
//!
//! Public routes (landing page, login, logout) plus the file routes, which
//! sit behind the session middleware.

use crate::core::auth::{handlers as auth_handlers, middleware::mw_require_auth};
use crate::core::AppState;
use crate::{extract, files};
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/upload", post(files::upload_file))
        .route("/list", get(files::list_files))
        .route("/download/{filename}", get(files::download_file))
        .route("/open/{filename}", get(files::open_file))
        .route("/extract/{filename}", get(extract::extract_file))
        .route("/delete/{filename}", delete(files::delete_file))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            mw_require_auth,
        ))
        // Uploads have no size limit
        .layer(DefaultBodyLimit::disable());

    Router::new()
        .route("/", get(auth_handlers::home))
        .route("/login", post(auth_handlers::login))
        .route("/logout", get(auth_handlers::logout))
        .route("/health", get(health_check))
        .merge(protected)
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK - Filedesk"
}
