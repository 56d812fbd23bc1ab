pub mod auth;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod quiz;
pub mod services;
pub mod session;
pub mod state;

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the full application router. Extracted from main so tests can
/// mount the app on an in-process server.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(handlers::root))
    .route("/login", get(auth::handlers::login_page).post(auth::handlers::login_submit))
    .route(
      "/register",
      get(auth::handlers::register_page).post(auth::handlers::register_submit),
    )
    .route(
      "/reset-password",
      get(auth::handlers::reset_page).post(auth::handlers::reset_submit),
    )
    .route("/logout", post(auth::handlers::logout))
    .route("/dashboard", get(handlers::dashboard::dashboard))
    .route("/practice", get(handlers::practice::practice_page))
    .route("/practice/start", post(handlers::practice::start_quiz))
    .route("/practice/answer", post(handlers::practice::submit_answer))
    .route("/practice/next", post(handlers::practice::next_question))
    .route("/practice/end", post(handlers::practice::end_quiz))
    .route("/content", get(handlers::content::content_page))
    .route("/content/upload", post(handlers::content::upload_document))
    .route("/content/delete", post(handlers::content::delete_document))
    .route("/analytics", get(handlers::analytics::analytics))
    .route("/diagnostic", post(handlers::diagnostic::log_diagnostic))
    .nest_service("/static", ServeDir::new("static"))
    .fallback(handlers::not_found)
    .with_state(state)
}
