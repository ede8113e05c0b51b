use std::sync::Arc;

use crate::builder::keywords::Stopwords;
use crate::config::Config;
use crate::decoder::dictionary::BuzzwordDictionary;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Base dictionary loaded at startup. Sessions work on their own clones.
    pub dictionary: Arc<BuzzwordDictionary>,
    pub stopwords: Arc<Stopwords>,
    pub sessions: SessionStore,
}
