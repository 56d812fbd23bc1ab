//! Content manager: the uploaded-document list.
//!
//! Uploads are recorded, never stored — the manager only walks each entry
//! through its simulated processing lifecycle.

use askama::Template;
use axum::Form;
use axum::extract::Multipart;
use axum::response::{Html, Redirect};
use serde::Deserialize;

use super::{NavContext, format_size};
use crate::auth::AuthContext;
use crate::errors::LogOnError;

pub struct FileRow {
  pub id: String,
  pub name: String,
  pub status: &'static str,
  pub status_label: &'static str,
  pub size: String,
  pub uploaded: String,
}

#[derive(Template)]
#[template(path = "content.html")]
pub struct ContentTemplate {
  pub nav: NavContext,
  pub files: Vec<FileRow>,
}

#[derive(Deserialize)]
pub struct DeleteForm {
  pub file_id: String,
}

/// GET /content - Uploaded document list
pub async fn content_page(auth: AuthContext) -> Html<String> {
  let files = auth
    .study
    .uploads
    .list()
    .iter()
    .map(|file| FileRow {
      id: file.id.clone(),
      name: file.name.clone(),
      status: file.status.as_str(),
      status_label: file.status.label(),
      size: format_size(file.size),
      uploaded: file.uploaded_at.format("%b %e, %Y").to_string(),
    })
    .collect();

  let template = ContentTemplate {
    nav: NavContext::new(&auth, "content"),
    files,
  };
  Html(template.render().unwrap_or_default())
}

/// POST /content/upload - Accept a document (multipart) into the mock pipeline
pub async fn upload_document(auth: AuthContext, mut multipart: Multipart) -> Redirect {
  loop {
    match multipart.next_field().await {
      Ok(Some(field)) => {
        if field.name() != Some("file") {
          continue;
        }
        let name = field
          .file_name()
          .filter(|n| !n.is_empty())
          .unwrap_or("document.pdf")
          .to_string();
        // Drain the body to learn the size, then drop it — nothing is stored
        let size = field
          .bytes()
          .await
          .log_warn("failed to read uploaded field")
          .map(|data| data.len() as u64)
          .unwrap_or(0);
        let file = auth.study.uploads.add(&name, size);
        tracing::info!("upload received: {} ({} bytes) as {}", name, size, file.id);
      }
      Ok(None) => break,
      Err(e) => {
        tracing::warn!("multipart stream ended early: {}", e);
        break;
      }
    }
  }
  Redirect::to("/content")
}

/// POST /content/delete - Remove a document from the list
pub async fn delete_document(auth: AuthContext, Form(form): Form<DeleteForm>) -> Redirect {
  if !auth.study.uploads.delete(&form.file_id) {
    tracing::debug!("delete ignored for unknown file {}", form.file_id);
  }
  Redirect::to("/content")
}
