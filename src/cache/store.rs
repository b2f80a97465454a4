use std::collections::HashMap;
use std::future::Future;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::api::Collection;

/// Consider a collection fresh for 5 minutes.
/// Site content changes rarely; this keeps page loads from hammering the
/// endpoint without showing stale listings for long.
pub const DEFAULT_FRESHNESS_MINUTES: i64 = 5;

/// A cached value together with when it was fetched.
#[derive(Debug, Clone)]
pub struct CachedEntry<T> {
    pub data: T,
    pub fetched_at: DateTime<Utc>,
}

impl<T> CachedEntry<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            fetched_at: Utc::now(),
        }
    }

    /// Whether the entry is still inside the freshness window.
    /// Negative ages (clock skew) count as fresh.
    pub fn is_fresh(&self, window: Duration) -> bool {
        Utc::now() - self.fetched_at <= window
    }
}

/// Explicit per-key cache map with a freshness window.
///
/// One instance holds one value type; the provider keeps one per collection,
/// keyed by `Collection`. Concurrent readers share cached values through the
/// RwLock; two concurrent misses on the same key may both fetch, last write
/// wins.
pub struct CollectionCache<T> {
    entries: RwLock<HashMap<Collection, CachedEntry<T>>>,
    window: Duration,
}

impl<T: Clone> CollectionCache<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            window,
        }
    }

    /// Return the cached value for `key` if fresh, otherwise run `fetch` and
    /// cache its result. Fetch errors are propagated and leave any stale
    /// entry in place for the next attempt.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: Collection, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&key) {
                if entry.is_fresh(self.window) {
                    debug!(collection = %key, "cache hit");
                    return Ok(entry.data.clone());
                }
                debug!(collection = %key, "cache stale");
            }
        }

        let data = fetch().await?;
        self.entries
            .write()
            .await
            .insert(key, CachedEntry::new(data.clone()));
        Ok(data)
    }

}
