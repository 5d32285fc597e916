//! TTL-bounded document cache keyed by playbook identifier.

use super::clock::{Clock, SystemClock};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Default time-to-live for cached playbook bodies (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::minutes(5);

/// A fetched playbook body and when it was fetched.
///
/// Records are never mutated; a refetch replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub identifier: String,
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}

impl DocumentRecord {
    fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.fetched_at < ttl
    }
}

/// In-memory cache for playbook bodies.
///
/// Uses a HashMap behind a tokio RwLock. Holds at most one record per
/// identifier; expired records read as absent until they are replaced or
/// purged.
#[derive(Debug, Clone)]
pub struct DocumentCache {
    entries: Arc<RwLock<HashMap<String, DocumentRecord>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl DocumentCache {
    /// Create a cache with the given TTL, reading time from the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a cache with an explicit time source.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { entries: Arc::new(RwLock::new(HashMap::new())), ttl, clock }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get a fresh record for `identifier`.
    ///
    /// Returns None if there is no record or it has expired.
    pub async fn get(&self, identifier: &str) -> Option<DocumentRecord> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        entries
            .get(identifier)
            .filter(|record| record.is_fresh(now, self.ttl))
            .cloned()
    }

    /// Store a body for `identifier`, stamped with the current time.
    ///
    /// Replaces any previous record for the same identifier.
    pub async fn insert(&self, identifier: &str, body: String) -> DocumentRecord {
        let record = DocumentRecord { identifier: identifier.to_string(), body, fetched_at: self.clock.now() };
        let mut entries = self.entries.write().await;
        entries.insert(identifier.to_string(), record.clone());
        record
    }

    /// Delete expired records.
    ///
    /// Returns the number of deleted entries.
    pub async fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, record| record.is_fresh(now, self.ttl));
        before - entries.len()
    }

    /// Number of records held, fresh or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
