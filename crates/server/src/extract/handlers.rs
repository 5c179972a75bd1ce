use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::core::ctx::Ctx;
use crate::core::error::Result;
use crate::core::AppState;

/// GET /extract/{filename}
pub async fn extract_file(
    Path(filename): Path<String>,
    State(state): State<AppState>,
    ctx: Ctx,
) -> Result<Json<Value>> {
    info!("[{}] GET /extract/{}", ctx.session_tag(), filename);

    let text = super::extract_text(&state.files, state.extractor.clone(), &filename).await?;
    Ok(Json(json!({ "text": text })))
}
