//! Login, logout and the landing page

use crate::core::auth::SESSION_COOKIE;
use crate::core::config::AppState;
use crate::pages;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::info;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials, try again!";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// GET /
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let token = session_token(&jar);
    if state.sessions.is_authenticated(token.as_deref()).await {
        Html(pages::file_manager_html().to_string())
    } else {
        Html(pages::login_html(""))
    }
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    info!("POST /login - {}", form.username);

    match state.sessions.login(&form.username, &form.password).await {
        Some(token) => {
            // A fresh token per login; any previous one is dropped.
            state.sessions.logout(session_token(&jar).as_deref()).await;

            let cookie = Cookie::build((SESSION_COOKIE, token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();
            (jar.add(cookie), Redirect::to("/")).into_response()
        }
        None => Html(pages::login_html(INVALID_CREDENTIALS)).into_response(),
    }
}

/// GET /logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    info!("GET /logout");
    state.sessions.logout(session_token(&jar).as_deref()).await;

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::temporary("/"))
}
