//! Authentication handlers for login, registration, password reset, and logout.
//!
//! All of it is mock: credentials are accepted as long as they are
//! well-formed, after a simulated network round trip. The session cookie is
//! the only durable artifact.

use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use super::middleware::{OptionalAuth, SESSION_COOKIE_NAME};
use crate::config;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub version: &'static str,
}

#[derive(Template)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "auth/reset.html")]
pub struct ResetTemplate {
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
pub struct ResetForm {
    pub email: String,
}

/// GET /login - Show login page (or skip it for a live session)
pub async fn login_page(auth: OptionalAuth) -> impl IntoResponse {
    if auth.0.is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    let template = LoginTemplate {
        error: None,
        version: env!("CARGO_PKG_VERSION"),
    };
    Html(template.render().unwrap_or_default()).into_response()
}

/// POST /login - Process login
pub async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    if !is_valid_email(&form.email) || form.password.is_empty() {
        let template = LoginTemplate {
            error: Some("Enter your email address and password".to_string()),
            version: env!("CARGO_PKG_VERSION"),
        };
        return (jar, Html(template.render().unwrap_or_default())).into_response();
    }

    // Pretend to round-trip to an auth service
    tokio::time::sleep(state.auth_latency).await;

    let Some((_, session_id)) = state.auth.sign_in(&form.email, None) else {
        let template = LoginTemplate {
            error: Some("Could not start a session. Please try again.".to_string()),
            version: env!("CARGO_PKG_VERSION"),
        };
        return (jar, Html(template.render().unwrap_or_default())).into_response();
    };

    (jar.add(session_cookie(session_id)), Redirect::to("/dashboard")).into_response()
}

/// GET /register - Show registration page
pub async fn register_page(auth: OptionalAuth) -> impl IntoResponse {
    if auth.0.is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    let template = RegisterTemplate { error: None };
    Html(template.render().unwrap_or_default()).into_response()
}

/// POST /register - Process registration
pub async fn register_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> impl IntoResponse {
    if !is_valid_email(&form.email) {
        let template = RegisterTemplate {
            error: Some("Enter a valid email address".to_string()),
        };
        return (jar, Html(template.render().unwrap_or_default())).into_response();
    }
    if form.password.len() < 8 {
        let template = RegisterTemplate {
            error: Some("Password must be at least 8 characters".to_string()),
        };
        return (jar, Html(template.render().unwrap_or_default())).into_response();
    }

    tokio::time::sleep(state.auth_latency).await;

    let name = form.name.trim();
    let name = (!name.is_empty()).then_some(name);
    let Some((_, session_id)) = state.auth.sign_in(&form.email, name) else {
        let template = RegisterTemplate {
            error: Some("Could not create the account. Please try again.".to_string()),
        };
        return (jar, Html(template.render().unwrap_or_default())).into_response();
    };

    (jar.add(session_cookie(session_id)), Redirect::to("/dashboard")).into_response()
}

/// GET /reset-password - Show reset page
pub async fn reset_page(auth: OptionalAuth) -> impl IntoResponse {
    if auth.0.is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    let template = ResetTemplate {
        error: None,
        notice: None,
    };
    Html(template.render().unwrap_or_default()).into_response()
}

/// POST /reset-password - Pretend to send a reset link
pub async fn reset_submit(
    State(state): State<AppState>,
    Form(form): Form<ResetForm>,
) -> Html<String> {
    if !is_valid_email(&form.email) {
        let template = ResetTemplate {
            error: Some("Enter a valid email address".to_string()),
            notice: None,
        };
        return Html(template.render().unwrap_or_default());
    }

    tokio::time::sleep(state.auth_latency).await;

    let template = ResetTemplate {
        error: None,
        notice: Some(format!(
            "If an account exists for {}, a reset link is on its way.",
            form.email
        )),
    };
    Html(template.render().unwrap_or_default())
}

/// POST /logout - Log out and clear session
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        state.auth.sign_out(cookie.value());
    }

    let removal = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .max_age(time::Duration::seconds(0))
        .build();

    (jar.remove(removal), Redirect::to("/login"))
}

fn session_cookie(session_id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, session_id))
        .path("/")
        .http_only(true)
        .secure(false) // Set to true in production with HTTPS
        .max_age(time::Duration::hours(config::SESSION_DURATION_HOURS))
        .build()
}

/// Loose shape check only; the mock backend accepts anything that looks
/// like an address.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
