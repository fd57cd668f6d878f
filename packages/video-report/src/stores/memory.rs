//! In-memory session storage.

use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{PoisonError, RwLock};

use crate::error::{ReportError, Result};
use crate::traits::store::{SessionEntry, SessionStore};
use crate::types::ReportTable;

/// Default number of URL entries a session remembers.
pub const DEFAULT_SESSION_CAPACITY: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(n) => n,
    None => panic!("session capacity must be non-zero"),
};

/// In-memory session store holding the last `capacity` URL entries.
///
/// Entries are evicted least-recently-written first. Lives as long as the
/// process. Not suitable for sharing state across sessions.
pub struct MemorySessionStore {
    entries: RwLock<LruCache<String, SessionEntry>>,
    recent_urls: RwLock<Vec<String>>,
    last_table: RwLock<Option<ReportTable>>,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySessionStore {
    /// Create a store with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }

    /// Create a store remembering at most `capacity` URL entries.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
            recent_urls: RwLock::new(Vec::new()),
            last_table: RwLock::new(None),
        }
    }

    /// Get the number of remembered URL entries.
    pub fn entry_count(&self) -> Result<usize> {
        Ok(self.entries.read().map_err(poisoned)?.len())
    }

    pub fn capacity(&self) -> Result<NonZeroUsize> {
        Ok(self.entries.read().map_err(poisoned)?.cap())
    }
}

fn poisoned<T>(err: PoisonError<T>) -> ReportError {
    ReportError::Storage(err.to_string().into())
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<SessionEntry>> {
        // peek: reads don't refresh an entry's position
        Ok(self.entries.read().map_err(poisoned)?.peek(key).cloned())
    }

    async fn put(&self, key: &str, entry: SessionEntry) -> Result<()> {
        self.entries
            .write()
            .map_err(poisoned)?
            .put(key.to_string(), entry);
        Ok(())
    }

    async fn remember_urls(&self, urls: &[String]) -> Result<()> {
        let capacity = self.capacity()?.get();
        let keep = urls.len().min(capacity);
        *self.recent_urls.write().map_err(poisoned)? = urls[urls.len() - keep..].to_vec();
        Ok(())
    }

    async fn recent_urls(&self) -> Result<Vec<String>> {
        Ok(self.recent_urls.read().map_err(poisoned)?.clone())
    }

    async fn store_last_table(&self, table: &ReportTable) -> Result<()> {
        *self.last_table.write().map_err(poisoned)? = Some(table.clone());
        Ok(())
    }

    async fn last_table(&self) -> Result<Option<ReportTable>> {
        Ok(self.last_table.read().map_err(poisoned)?.clone())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.write().map_err(poisoned)?.clear();
        self.recent_urls.write().map_err(poisoned)?.clear();
        *self.last_table.write().map_err(poisoned)? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VideoRecord;

    fn entry(url: &str) -> SessionEntry {
        SessionEntry::new(VideoRecord {
            title: "t".to_string(),
            display_name: "d".to_string(),
            username: "u".to_string(),
            views: 1,
            likes: 0,
            shares: 0,
            followers: None,
            source_url: url.to_string(),
        })
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let store = MemorySessionStore::new();
        store.put("https://a", entry("https://a")).await.unwrap();

        let found = store.get("https://a").await.unwrap().unwrap();
        assert_eq!(found.record.source_url, "https://a");
        assert!(store.get("https://b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let store = MemorySessionStore::with_capacity(NonZeroUsize::new(2).unwrap());
        store.put("a", entry("a")).await.unwrap();
        store.put("b", entry("b")).await.unwrap();
        store.put("c", entry("c")).await.unwrap();

        assert_eq!(store.entry_count().unwrap(), 2);
        assert!(store.get("a").await.unwrap().is_none());
        assert!(store.get("c").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_rewrite_refreshes_position() {
        let store = MemorySessionStore::with_capacity(NonZeroUsize::new(2).unwrap());
        store.put("a", entry("a")).await.unwrap();
        store.put("b", entry("b")).await.unwrap();
        store.put("a", entry("a")).await.unwrap();
        store.put("c", entry("c")).await.unwrap();

        assert!(store.get("a").await.unwrap().is_some());
        assert!(store.get("b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_recent_urls_keeps_last_n() {
        let store = MemorySessionStore::with_capacity(NonZeroUsize::new(2).unwrap());
        let urls = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        store.remember_urls(&urls).await.unwrap();

        assert_eq!(store.recent_urls().await.unwrap(), vec!["2", "3"]);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = MemorySessionStore::new();
        store.put("a", entry("a")).await.unwrap();
        store.store_last_table(&ReportTable::new()).await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.entry_count().unwrap(), 0);
        assert!(store.last_table().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_poisoned_lock_is_storage_error() {
        let store = MemorySessionStore::new();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.last_table.write().unwrap();
            panic!("writer crashed");
        }));

        assert!(matches!(
            store.last_table().await,
            Err(ReportError::Storage(_))
        ));
        assert!(store.get("a").await.unwrap().is_none());
    }
}
