//! In-memory document upload manager.
//!
//! Uploads are never stored or parsed; the manager records name and size and
//! walks each entry through a simulated lifecycle
//! (uploading → processing → ready) on a background task.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config;
use crate::errors::LogOnError;
use crate::session::generate_file_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
  Uploading,
  Processing,
  Ready,
  Error,
}

impl FileStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Uploading => "uploading",
      Self::Processing => "processing",
      Self::Ready => "ready",
      Self::Error => "error",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Self::Uploading => "Uploading",
      Self::Processing => "Processing",
      Self::Ready => "Ready",
      Self::Error => "Failed",
    }
  }
}

#[derive(Debug, Clone)]
pub struct StudyFile {
  pub id: String,
  pub name: String,
  pub status: FileStatus,
  pub uploaded_at: DateTime<Utc>,
  pub size: u64,
}

/// Cloneable handle to one user's upload list.
#[derive(Clone)]
pub struct UploadManager {
  files: Arc<Mutex<Vec<StudyFile>>>,
  processing_delay: Duration,
}

impl Default for UploadManager {
  fn default() -> Self {
    Self::new()
  }
}

impl UploadManager {
  pub fn new() -> Self {
    Self::with_delay(Duration::from_millis(config::UPLOAD_PROCESSING_MS))
  }

  pub fn with_delay(processing_delay: Duration) -> Self {
    Self {
      files: Arc::new(Mutex::new(Vec::new())),
      processing_delay,
    }
  }

  pub fn list(&self) -> Vec<StudyFile> {
    self
      .files
      .lock()
      .log_warn("upload store lock poisoned")
      .map(|guard| guard.clone())
      .unwrap_or_default()
  }

  /// Register an upload and kick off its simulated processing. An empty
  /// upload fails immediately instead of entering the pipeline.
  pub fn add(&self, name: &str, size: u64) -> StudyFile {
    let file = StudyFile {
      id: generate_file_id(),
      name: name.to_string(),
      status: if size == 0 {
        FileStatus::Error
      } else {
        FileStatus::Uploading
      },
      uploaded_at: Utc::now(),
      size,
    };
    if let Some(mut guard) = self.files.lock().log_warn("upload store lock poisoned") {
      guard.push(file.clone());
    }

    if file.status != FileStatus::Error {
      let manager = self.clone();
      let id = file.id.clone();
      let delay = self.processing_delay;
      tokio::spawn(async move {
        tokio::time::sleep(delay / 2).await;
        manager.set_status(&id, FileStatus::Processing);
        tokio::time::sleep(delay / 2).await;
        manager.set_status(&id, FileStatus::Ready);
        tracing::debug!("upload {} finished processing", id);
      });
    }
    file
  }

  pub fn delete(&self, id: &str) -> bool {
    let Some(mut guard) = self.files.lock().log_warn("upload store lock poisoned") else {
      return false;
    };
    let before = guard.len();
    guard.retain(|f| f.id != id);
    guard.len() < before
  }

  fn set_status(&self, id: &str, status: FileStatus) {
    if let Some(mut guard) = self.files.lock().log_warn("upload store lock poisoned") {
      if let Some(file) = guard.iter_mut().find(|f| f.id == id) {
        file.status = status;
      }
    }
  }
}
