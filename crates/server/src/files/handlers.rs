//! File operation handlers
//!
//! Every handler here sits behind `mw_require_auth` and also takes `Ctx`, so
//! a route mounted without the middleware still refuses to serve.

use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::header,
    response::Response,
    Json,
};
use serde_json::{json, Value};
use tokio_util::io::ReaderStream;
use tracing::info;

use crate::core::ctx::Ctx;
use crate::core::error::{Error, Result};
use crate::core::AppState;

/// POST /upload
pub async fn upload_file(
    State(state): State<AppState>,
    ctx: Ctx,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    info!("[{}] POST /upload", ctx.session_tag());

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| Error::BadRequest("No file provided".to_string()))?;

        state.files.upload(&filename, field).await?;
        return Ok(Json(json!({ "message": "File uploaded successfully" })));
    }

    Err(Error::BadRequest("No file provided".to_string()))
}

/// GET /list
pub async fn list_files(State(state): State<AppState>, ctx: Ctx) -> Result<Json<Vec<String>>> {
    info!("[{}] GET /list", ctx.session_tag());
    Ok(Json(state.files.list().await?))
}

/// GET /download/{filename}
pub async fn download_file(
    Path(filename): Path<String>,
    State(state): State<AppState>,
    ctx: Ctx,
) -> Result<Response> {
    info!("[{}] GET /download/{}", ctx.session_tag(), filename);

    let mime = mime_guess::from_path(&filename).first_or_octet_stream();
    stream_file(&state, &filename, mime.essence_str(), "attachment").await
}

/// GET /open/{filename}
pub async fn open_file(
    Path(filename): Path<String>,
    State(state): State<AppState>,
    ctx: Ctx,
) -> Result<Response> {
    info!("[{}] GET /open/{}", ctx.session_tag(), filename);
    stream_file(&state, &filename, "application/pdf", "inline").await
}

/// DELETE /delete/{filename}
pub async fn delete_file(
    Path(filename): Path<String>,
    State(state): State<AppState>,
    ctx: Ctx,
) -> Result<Json<Value>> {
    info!("[{}] DELETE /delete/{}", ctx.session_tag(), filename);

    state.files.delete(&filename).await?;
    Ok(Json(json!({ "message": "File deleted" })))
}

async fn stream_file(
    state: &AppState,
    filename: &str,
    content_type: &str,
    disposition: &str,
) -> Result<Response> {
    let (file, len) = state.files.open(filename).await?;

    Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, len)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition(disposition, filename),
        )
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| Error::Internal(e.to_string()))
}

/// `<disposition>; filename="<ascii>"; filename*=UTF-8''<encoded>`
pub fn content_disposition(disposition: &str, filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "{}; filename=\"{}\"; filename*=UTF-8''{}",
        disposition,
        ascii,
        urlencoding::encode(filename)
    )
}
