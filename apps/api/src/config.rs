use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::builder::keywords::DEFAULT_TOP_N;

const DEFAULT_BUZZWORDS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/buzzwords.json");

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub buzzwords_path: PathBuf,
    /// Newline-separated stopword list replacing the built-in English one.
    pub stopwords_path: Option<PathBuf>,
    pub session_dir: PathBuf,
    pub keyword_top_n: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            buzzwords_path: env_or("BUZZWORDS_PATH", DEFAULT_BUZZWORDS_PATH).into(),
            stopwords_path: std::env::var("STOPWORDS_PATH").ok().map(PathBuf::from),
            session_dir: env_or("SESSION_DIR", "sessions").into(),
            keyword_top_n: env_or("KEYWORD_TOP_N", &DEFAULT_TOP_N.to_string())
                .parse::<usize>()
                .context("KEYWORD_TOP_N must be a non-negative integer")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
