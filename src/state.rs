//! Application state passed to all handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::auth::AuthStore;
use crate::content::{QuestionSource, SampleQuestionBank};
use crate::dashboard::MetricsService;
use crate::errors::LogOnError;
use crate::quiz::SharedQuizSession;
use crate::services::UploadManager;

/// One signed-in user's study context: their quiz session and upload list.
/// Cloneable handles — every clone points at the same underlying state.
#[derive(Clone, Default)]
pub struct UserStudy {
    pub quiz: SharedQuizSession,
    pub uploads: UploadManager,
}

/// Lazily creates and hands out per-user study contexts.
#[derive(Clone, Default)]
pub struct StudyRegistry {
    inner: Arc<Mutex<HashMap<i64, UserStudy>>>,
}

impl StudyRegistry {
    pub fn for_user(&self, user_id: i64) -> UserStudy {
        self.inner
            .lock()
            .log_warn("study registry lock poisoned")
            .map(|mut map| map.entry(user_id).or_default().clone())
            .unwrap_or_default()
    }
}

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthStore,
    pub study: StudyRegistry,
    pub questions: Arc<dyn QuestionSource>,
    pub metrics: MetricsService,
    /// Simulated login/registration round-trip time
    pub auth_latency: Duration,
}

impl AppState {
    /// Production wiring: sample bank and mock metrics with their
    /// configured latencies.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(SampleQuestionBank::new()),
            MetricsService::new(),
            Duration::from_millis(crate::config::AUTH_LATENCY_MS),
        )
    }

    /// Explicit wiring, used by tests to mount stub sources and drop the
    /// simulated delays.
    pub fn with_parts(
        questions: Arc<dyn QuestionSource>,
        metrics: MetricsService,
        auth_latency: Duration,
    ) -> Self {
        Self {
            auth: AuthStore::new(),
            study: StudyRegistry::default(),
            questions,
            metrics,
            auth_latency,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registry_hands_out_one_context_per_user() {
        let registry = StudyRegistry::default();
        let a1 = registry.for_user(1);
        let _a2 = registry.for_user(1);
        let b = registry.for_user(2);

        a1.uploads.add("shared.pdf", 10);
        assert_eq!(registry.for_user(1).uploads.list().len(), 1);
        assert!(b.uploads.list().is_empty());
    }
}
