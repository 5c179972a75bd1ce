use crate::core::auth::SESSION_COOKIE;
use crate::core::config::AppState;
use crate::core::ctx::Ctx;
use crate::core::error::{Error, Result};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tracing::debug;

pub async fn mw_require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    debug!("MIDDLEWARE: require_auth {}", req.uri().path());

    let token = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(Error::Unauthorized)?;

    if !state.sessions.is_authenticated(Some(&token)).await {
        return Err(Error::Unauthorized);
    }

    req.extensions_mut().insert(Ctx::for_session(&token));

    Ok(next.run(req).await)
}
