//! Lowercase phrase to plain-English explanation.
//!
//! Loaded once at startup from JSON. Each session gets its own clone so that
//! user-added entries never leak across sessions.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read buzzword dictionary at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("buzzword dictionary at {path} is not a JSON object of strings: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("buzzword phrase cannot be empty")]
    EmptyPhrase,

    #[error("explanation for '{0}' cannot be empty")]
    EmptyExplanation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuzzwordDictionary {
    entries: HashMap<String, String>,
}

impl BuzzwordDictionary {
    /// Builds a dictionary from arbitrary-case keys, normalizing them.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (normalize(k.as_ref()), v.into()))
                .collect(),
        }
    }

    /// Reads a JSON object of `phrase -> explanation` from disk.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let path_str = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path_str.clone(),
            source,
        })?;
        let map: HashMap<String, String> =
            serde_json::from_str(&raw).map_err(|source| DictionaryError::Json {
                path: path_str.clone(),
                source,
            })?;

        let dictionary = Self::from_entries(map);
        info!("Loaded {} buzzwords from {}", dictionary.len(), path_str);
        Ok(dictionary)
    }

    /// Adds or overwrites a user entry. Returns the normalized key.
    pub fn add(&mut self, phrase: &str, explanation: &str) -> Result<String, DictionaryError> {
        let key = normalize(phrase);
        if key.is_empty() {
            return Err(DictionaryError::EmptyPhrase);
        }
        let explanation = explanation.trim();
        if explanation.is_empty() {
            return Err(DictionaryError::EmptyExplanation(key));
        }
        self.entries.insert(key.clone(), explanation.to_string());
        Ok(key)
    }

    /// Looks up an already-lowercased token.
    pub fn explain(&self, lowercase_word: &str) -> Option<&str> {
        self.entries.get(lowercase_word).map(String::as_str)
    }

    pub fn contains(&self, lowercase_word: &str) -> bool {
        self.entries.contains_key(lowercase_word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by phrase, for stable listings.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut all: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        all.sort_unstable_by(|a, b| a.0.cmp(b.0));
        all
    }
}

fn normalize(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}
