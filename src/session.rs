use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::{header, header::InvalidHeaderValue, HeaderMap, HeaderValue};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::history::HistoryLog;

pub const SESSION_COOKIE: &str = "landmark_session";

/// Identifies one browser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reads the session cookie. `None` when absent or not a valid id.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
            .map(Self)
    }

    /// Existing session from the request, or a new one. The flag says whether
    /// the cookie still has to be set on the response.
    pub fn resolve(headers: &HeaderMap) -> (Self, bool) {
        match Self::from_headers(headers) {
            Some(id) => (id, false),
            None => (Self::new(), true),
        }
    }

    pub fn set_cookie(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::try_from(format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE,
            self.0.simple()
        ))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

struct Session {
    history: HistoryLog,
    last_seen: Instant,
}

/// In-memory history per session. A session idle for longer than the TTL is
/// dropped along with its history; nothing survives a restart.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<SessionId, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn with_history<F, T>(&self, id: SessionId, f: F) -> T
    where
        F: FnOnce(&mut HistoryLog) -> T,
    {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let session = sessions.entry(id).or_insert_with(|| Session {
            history: HistoryLog::new(),
            last_seen: now,
        });
        if now.duration_since(session.last_seen) > self.ttl {
            session.history = HistoryLog::new();
        }
        session.last_seen = now;
        f(&mut session.history)
    }

    /// Copy of the session's history. Counts as activity.
    pub async fn snapshot(&self, id: SessionId) -> HistoryLog {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        if let Some(session) = sessions.get_mut(&id) {
            if now.duration_since(session.last_seen) <= self.ttl {
                session.last_seen = now;
                return session.history.clone();
            }
            sessions.remove(&id);
        }
        HistoryLog::new()
    }

    /// Drops every session not seen within the TTL as of `now`. Returns how
    /// many were dropped.
    pub async fn evict_idle(&self, now: Instant) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| now.saturating_duration_since(session.last_seen) <= self.ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {} idle session(s), {} left", evicted, sessions.len());
        }
        evicted
    }

    /// Runs `evict_idle` every `period` until the runtime shuts down.
    pub fn spawn_reaper(&self, period: Duration) -> tokio::task::JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                store.evict_idle(Instant::now()).await;
            }
        })
    }
}
