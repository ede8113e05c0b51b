mod analysis;
mod builder;
mod config;
mod decoder;
mod errors;
mod ingest;
mod routes;
mod session;
mod state;
mod text;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::builder::keywords::Stopwords;
use crate::config::Config;
use crate::decoder::dictionary::BuzzwordDictionary;
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume decoder v{}", env!("CARGO_PKG_VERSION"));

    // A missing or broken dictionary is fatal: nothing can be decoded without it.
    let dictionary = BuzzwordDictionary::load(&config.buzzwords_path).map_err(|e| {
        tracing::error!("{e}");
        e
    })?;

    if dictionary.is_empty() {
        tracing::warn!("Buzzword dictionary is empty; every score will be 0");
    }

    let stopwords = match &config.stopwords_path {
        Some(path) => Stopwords::load(path)
            .with_context(|| format!("Failed to read stopwords from {}", path.display()))?,
        None => Stopwords::default(),
    };
    info!("Keyword matcher using {} stopwords", stopwords.len());

    let state = AppState {
        config: config.clone(),
        dictionary: Arc::new(dictionary),
        stopwords: Arc::new(stopwords),
        sessions: SessionStore::new(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
