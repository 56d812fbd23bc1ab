pub mod analytics;
pub mod content;
pub mod dashboard;
pub mod diagnostic;
pub mod practice;

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};

use crate::auth::{AuthContext, OptionalAuth};

/// Navigation state shared by every signed-in page template.
pub struct NavContext {
  pub active: &'static str,
  pub user_email: String,
}

impl NavContext {
  pub fn new(auth: &AuthContext, active: &'static str) -> Self {
    Self {
      active,
      user_email: auth.user.email.clone(),
    }
  }
}

/// GET / - Route to the landing page matching the session state
pub async fn root(auth: OptionalAuth) -> Redirect {
  if auth.0.is_some() {
    Redirect::to("/dashboard")
  } else {
    Redirect::to("/login")
  }
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {}

/// Fallback for unknown paths
pub async fn not_found() -> impl IntoResponse {
  let template = NotFoundTemplate {};
  (
    StatusCode::NOT_FOUND,
    Html(template.render().unwrap_or_default()),
  )
}

/// Human-readable file size for the upload list
pub(crate) fn format_size(bytes: u64) -> String {
  if bytes < 1024 {
    format!("{} B", bytes)
  } else if bytes < 1024 * 1024 {
    format!("{:.1} KB", bytes as f64 / 1024.0)
  } else {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_size_units() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(2048), "2.0 KB");
    assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
  }
}
