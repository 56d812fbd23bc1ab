//! In-memory user and session registry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::config;
use crate::errors::LogOnError;
use crate::session::generate_session_id;

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
}

struct SessionEntry {
    user_id: i64,
    expires_at: DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<i64, User>,
    ids_by_email: HashMap<String, i64>,
    sessions: HashMap<String, SessionEntry>,
    next_user_id: i64,
}

#[derive(Clone, Default)]
pub struct AuthStore {
    inner: Arc<Mutex<Inner>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign a user in, creating the account on first sight — mock auth never
    /// rejects credentials. Returns the user and a fresh session id, or None
    /// if the registry is unusable.
    pub fn sign_in(&self, email: &str, name: Option<&str>) -> Option<(User, String)> {
        let mut inner = self.inner.lock().log_warn("auth store lock poisoned")?;

        let user_id = match inner.ids_by_email.get(email) {
            Some(id) => *id,
            None => {
                inner.next_user_id += 1;
                let id = inner.next_user_id;
                inner.ids_by_email.insert(email.to_string(), id);
                inner.users.insert(
                    id,
                    User {
                        id,
                        email: email.to_string(),
                        name: None,
                    },
                );
                id
            }
        };
        if let Some(name) = name {
            if let Some(user) = inner.users.get_mut(&user_id) {
                user.name = Some(name.to_string());
            }
        }

        let session_id = generate_session_id();
        let expires_at = Utc::now() + Duration::hours(config::SESSION_DURATION_HOURS);
        inner.sessions.insert(
            session_id.clone(),
            SessionEntry {
                user_id,
                expires_at,
            },
        );

        let user = inner.users.get(&user_id).cloned()?;
        tracing::info!("signed in {} (user {})", user.email, user.id);
        Some((user, session_id))
    }

    /// Resolve a session cookie to its user. Expired sessions resolve to
    /// None; the whole expired set is pruned on a small fraction of lookups.
    pub fn session_user(&self, session_id: &str) -> Option<User> {
        let mut inner = self.inner.lock().log_warn("auth store lock poisoned")?;

        if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
            let now = Utc::now();
            inner.sessions.retain(|_, s| s.expires_at > now);
        }

        let (user_id, expires_at) = {
            let entry = inner.sessions.get(session_id)?;
            (entry.user_id, entry.expires_at)
        };
        if expires_at <= Utc::now() {
            inner.sessions.remove(session_id);
            return None;
        }
        inner.users.get(&user_id).cloned()
    }

    pub fn sign_out(&self, session_id: &str) {
        if let Some(mut inner) = self.inner.lock().log_warn("auth store lock poisoned") {
            inner.sessions.remove(session_id);
        }
    }

    #[cfg(test)]
    fn force_expire(&self, session_id: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(entry) = inner.sessions.get_mut(session_id) {
            entry.expires_at = Utc::now() - Duration::hours(1);
        }
    }
}
