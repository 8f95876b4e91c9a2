use crate::error::SessionError;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use super::Session;

/// Oldest sessions are evicted beyond this many.
pub const MAX_SESSIONS: usize = 10_000;

pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Debug, Default)]
struct Inner {
    sessions: HashMap<Uuid, SharedSession>,
    order: VecDeque<Uuid>,
}

/// In-memory session registry. Each session sits behind its own async
/// mutex so mutations are serialised per session, never across sessions.
#[derive(Debug)]
pub struct SessionStore {
    inner: RwLock<Inner>,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_capacity(MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            capacity: capacity.max(1),
        }
    }

    pub async fn create(&self) -> (Uuid, SharedSession) {
        let session = Session::new();
        let id = session.id();
        let shared = Arc::new(Mutex::new(session));

        let mut inner = self.inner.write().await;
        inner.sessions.insert(id, Arc::clone(&shared));
        inner.order.push_back(id);
        while inner.order.len() > self.capacity {
            if let Some(evicted) = inner.order.pop_front() {
                inner.sessions.remove(&evicted);
                tracing::debug!(session = %evicted, "evicted oldest session");
            }
        }
        (id, shared)
    }

    /// Look a session up by its textual id. Malformed ids are reported as
    /// not found.
    pub async fn get(&self, id: &str) -> Result<SharedSession, SessionError> {
        let not_found = || SessionError::NotFound(id.to_string());
        let key = Uuid::parse_str(id).map_err(|_| not_found())?;
        self.inner
            .read()
            .await
            .sessions
            .get(&key)
            .cloned()
            .ok_or_else(not_found)
    }

    pub async fn remove(&self, id: &str) -> bool {
        let Ok(key) = Uuid::parse_str(id) else {
            return false;
        };
        let mut inner = self.inner.write().await;
        inner.order.retain(|existing| *existing != key);
        inner.sessions.remove(&key).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_get_returns_same_session() {
        let store = SessionStore::new();
        let (id, created) = store.create().await;
        let fetched = store.get(&id.to_string()).await.unwrap();
        assert!(Arc::ptr_eq(&created, &fetched));
        assert_eq!(fetched.lock().await.id(), id);
    }

    #[tokio::test]
    async fn unknown_and_malformed_ids_are_not_found() {
        let store = SessionStore::new();
        let err = store.get("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, SessionError::NotFound(ref id) if id == "not-a-uuid"));
        assert!(store.get(&Uuid::new_v4().to_string()).await.is_err());
    }

    #[tokio::test]
    async fn oldest_session_is_evicted_at_capacity() {
        let store = SessionStore::with_capacity(2);
        let (first, _) = store.create().await;
        let (second, _) = store.create().await;
        let (third, _) = store.create().await;

        assert_eq!(store.len().await, 2);
        assert!(store.get(&first.to_string()).await.is_err());
        assert!(store.get(&second.to_string()).await.is_ok());
        assert!(store.get(&third.to_string()).await.is_ok());
    }

    #[tokio::test]
    async fn remove_drops_session() {
        let store = SessionStore::new();
        let (id, _) = store.create().await;
        assert!(store.remove(&id.to_string()).await);
        assert!(!store.remove(&id.to_string()).await);
        assert!(store.is_empty().await);
    }
}
