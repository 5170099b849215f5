//! In-memory session store. Each session sits behind its own mutex so one
//! candidate's turns are processed strictly in order while other sessions
//! proceed independently. Nothing outlives the process; sessions idle past
//! the configured timeout are dropped by [`SessionStore::prune_idle`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::intake::session::Session;

pub type SessionHandle = Arc<Mutex<Session>>;

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session and registers it under a fresh id.
    pub async fn create(&self) -> SessionHandle {
        let session = Session::start();
        let id = session.id();
        let handle = Arc::new(Mutex::new(session));
        self.sessions.write().await.insert(id, handle.clone());
        info!("Session {id} started");
        handle
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Ends a session's lifetime. Returns `false` if the id was unknown.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Session {id} removed");
        }
        removed
    }

    /// Drops every session whose last message is at least `max_idle` old.
    /// Sessions locked by an in-flight turn are busy, not idle, and are kept.
    pub async fn prune_idle(&self, max_idle: Duration) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => {
                let idle = (now - session.last_active()).to_std().unwrap_or_default();
                idle < max_idle
            }
            Err(_) => true,
        });
        let pruned = before - sessions.len();
        if pruned > 0 {
            info!("Pruned {pruned} idle sessions");
        }
        pruned
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
