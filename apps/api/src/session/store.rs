//! In-memory session store. Each session owns a private copy of the buzzword
//! dictionary, so additions in one session never leak into another.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::decoder::dictionary::BuzzwordDictionary;
use crate::session::bundle::ExportBundle;

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub dictionary: BuzzwordDictionary,
    pub last_bundle: Option<ExportBundle>,
}

impl Session {
    pub fn new(dictionary: BuzzwordDictionary) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            dictionary,
            last_bundle: None,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            created_at: self.created_at,
            buzzword_count: self.dictionary.len(),
            has_result: self.last_bundle.is_some(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub buzzword_count: usize,
    pub has_result: bool,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session seeded with a clone of `base`.
    pub async fn create(&self, base: &BuzzwordDictionary) -> SessionSummary {
        let session = Session::new(base.clone());
        let summary = session.summary();
        self.inner.write().await.insert(session.id, session);
        tracing::info!(session_id = %summary.session_id, "session created");
        summary
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Runs `f` against the session under the write lock. `None` if unknown.
    pub async fn update<F, T>(&self, id: Uuid, f: F) -> Option<T>
    where
        F: FnOnce(&mut Session) -> T,
    {
        self.inner.write().await.get_mut(&id).map(f)
    }
}
