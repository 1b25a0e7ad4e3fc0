//! Best-score persistence.
//!
//! Scores live in a small key/value store where each entry carries its own
//! expiry timestamp. Expired entries read as absent. Writing an entry
//! refreshes its expiry.

use crate::constants::{HIGH_SCORE_KEY, HIGH_SCORE_TTL_DAYS};
use crate::utils::persistence::{load_json_or_default, save_json};
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the store inside the data directory.
pub const STORE_FILE: &str = "scores.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredValue {
    pub value: serde_json::Value,
    pub expires_at: DateTime<Utc>,
}

/// JSON-backed map of values with per-entry expiry.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExpiringStore {
    entries: BTreeMap<String, StoredValue>,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl ExpiringStore {
    /// Open the store at `path`. A missing or unreadable file yields an
    /// empty store that will be written on the next save.
    pub fn open(path: &Path) -> Self {
        let mut store: Self = load_json_or_default(path);
        store.path = Some(path.to_path_buf());
        store
    }

    /// A store that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Value stored under `key`, unless it has expired or no longer
    /// deserialises as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, now: DateTime<Utc>) -> Option<T> {
        let entry = self.entries.get(key)?;
        if entry.expires_at <= now {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn set<T: Serialize>(
        &mut self,
        key: &str,
        value: &T,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> io::Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.entries.insert(
            key.to_string(),
            StoredValue {
                value,
                expires_at: now + ttl,
            },
        );
        Ok(())
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Drop every entry that has expired by `now`.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) {
        self.entries.retain(|_, e| e.expires_at > now);
    }

    /// Write the store back to the file it was opened from.
    pub fn save(&self) -> io::Result<()> {
        match &self.path {
            Some(path) => save_json(path, self),
            None => Ok(()),
        }
    }
}

/// The best score across sessions.
#[derive(Debug)]
pub struct HighScore {
    store: ExpiringStore,
}

impl HighScore {
    pub fn new(store: ExpiringStore) -> Self {
        Self { store }
    }

    pub fn open(path: &Path) -> Self {
        Self::new(ExpiringStore::open(path))
    }

    /// Best score so far, 0 if none has been recorded or it has expired.
    pub fn best(&self, now: DateTime<Utc>) -> u64 {
        self.store.get(HIGH_SCORE_KEY, now).unwrap_or(0)
    }

    /// Record a finished run. Stores and saves `score` if it beats the
    /// current best; returns whether it did.
    pub fn record(&mut self, score: u64, now: DateTime<Utc>) -> io::Result<bool> {
        let best = self.best(now);
        if score <= best {
            debug!(score, best, "Score did not beat best");
            return Ok(false);
        }
        self.store.purge_expired(now);
        self.store.set(
            HIGH_SCORE_KEY,
            &score,
            Duration::days(HIGH_SCORE_TTL_DAYS),
            now,
        )?;
        self.store.save()?;
        info!(score, previous = best, "New high score");
        Ok(true)
    }
}
