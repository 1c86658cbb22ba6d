//! Session manager — owns every live session and tears idle ones down.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::context::Session;
use crate::error::SessionError;

/// Live sessions keyed by id.
///
/// Each mutation holds the write lock for its whole (synchronous) duration,
/// so a session sees one event at a time.
pub struct SessionManager {
    sessions: RwLock<HashMap<Uuid, Session>>,
    idle_timeout: Duration,
}

impl SessionManager {
    pub fn new(idle_timeout: Duration) -> Arc<Self> {
        Arc::new(Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        })
    }

    /// Start a new session and return its id.
    pub async fn create(&self) -> Uuid {
        let session = Session::new();
        let id = session.id;
        self.sessions.write().await.insert(id, session);
        info!(session_id = %id, "Session created");
        id
    }

    /// Run `f` against the session named by `id`, starting a new session
    /// when `id` is missing or unknown. Returns the session id actually used
    /// and whether it was created.
    pub async fn open<R>(
        &self,
        id: Option<Uuid>,
        f: impl FnOnce(&mut Session) -> R,
    ) -> (Uuid, bool, R) {
        let mut sessions = self.sessions.write().await;
        let (id, created) = match id {
            Some(id) if sessions.contains_key(&id) => (id, false),
            Some(stale) => {
                debug!(session_id = %stale, "Unknown session id, starting fresh");
                (Uuid::new_v4(), true)
            }
            None => (Uuid::new_v4(), true),
        };
        if created {
            info!(session_id = %id, "Session created");
        }
        let session = sessions.entry(id).or_insert_with(|| Session::with_id(id));
        session.touch(Utc::now());
        (id, created, f(session))
    }

    /// Run `f` against a session, marking it active.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound { id })?;
        session.touch(Utc::now());
        Ok(f(session))
    }

    /// Tear down a session. Returns false if it did not exist.
    pub async fn end(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(session_id = %id, "Session ended");
        }
        removed
    }

    /// Drop sessions idle longer than the timeout as of `now`. A session
    /// with an open skills feed is never idle. Returns the number removed.
    pub async fn prune_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, session| {
            let keep =
                session.skills.watchers() > 0 || session.idle_for(now) <= self.idle_timeout;
            if !keep {
                debug!(session_id = %id, "Session expired");
            }
            keep
        });
        let pruned = before - sessions.len();
        if pruned > 0 {
            info!(count = pruned, "Pruned idle sessions");
        }
        pruned
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// Spawn a background task that periodically prunes idle sessions.
pub fn spawn_sweep_task(
    manager: Arc<SessionManager>,
    every: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            manager.prune_idle(Utc::now()).await;
        }
    })
}
