//! Client-side diagnostic reporting.
//!
//! The front end posts a small JSON blob when something looks wrong on its
//! side (a render glitch, an unexpected state). Nothing is persisted; the
//! report lands in the server log for later inspection.

use axum::Json;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::auth::AuthContext;

#[derive(Deserialize)]
pub struct DiagnosticReport {
  pub page: String,
  pub message: String,
  /// Free-form context the client chooses to attach
  #[serde(default)]
  pub detail: Value,
}

/// POST /diagnostic - Log a client-reported problem
pub async fn log_diagnostic(
  auth: AuthContext,
  Json(report): Json<DiagnosticReport>,
) -> StatusCode {
  tracing::warn!(
    "client diagnostic from {} on {}: {} ({})",
    auth.user.email,
    report.page,
    report.message,
    report.detail
  );
  StatusCode::NO_CONTENT
}
