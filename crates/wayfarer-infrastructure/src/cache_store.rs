//! Local cache store implementations.
//!
//! The planner treats the local cache as a best-effort key-value store:
//! reads that fail look like a cache miss and writes that fail are dropped
//! with a warning. Nothing in here ever surfaces an error to callers.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use wayfarer_core::cache::CacheStore;

use crate::storage::AtomicFile;

/// File-backed cache store.
///
/// All keys live in one JSON file (a flat string-to-string map) so the
/// cache survives restarts and can be shared by several processes; the
/// atomic-file lock serializes concurrent writers. File IO runs on the
/// blocking thread pool.
#[derive(Clone)]
pub struct FileCacheStore {
    file: Arc<AtomicFile<HashMap<String, String>>>,
}

impl FileCacheStore {
    /// Creates a store backed by the given JSON file.
    ///
    /// The file and its parent directory are created lazily on the first
    /// write.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicFile::json(path)),
        }
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    async fn get(&self, key: &str) -> Option<String> {
        let file = self.file.clone();
        let key = key.to_string();
        match tokio::task::spawn_blocking(move || file.load().map(|map| map?.remove(&key))).await {
            Ok(Ok(value)) => value,
            Ok(Err(e)) => {
                tracing::warn!("[FileCacheStore] Failed to read cache file: {}", e);
                None
            }
            Err(e) => {
                tracing::warn!("[FileCacheStore] Cache read task failed: {}", e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) {
        let file = self.file.clone();
        let key = key.to_string();
        let value = value.to_string();
        let result = tokio::task::spawn_blocking(move || {
            file.update(HashMap::new(), |map| {
                map.insert(key, value);
                Ok(())
            })
        })
        .await;

        match result {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                // Dropped write: the cache is an optimization, not a store of record
                tracing::warn!("[FileCacheStore] Cache write dropped: {}", e);
            }
            Err(e) => {
                tracing::warn!("[FileCacheStore] Cache write task failed: {}", e);
            }
        }
    }
}

/// In-memory cache store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: tokio::sync::Mutex<HashMap<String, String>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryCacheStore::new();
        assert_eq!(store.get("k").await, None);

        store.set("k", "v").await;
        assert_eq!(store.get("k").await, Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCacheStore::new(temp_dir.path().join("cache.json"));

        assert_eq!(store.get("settings").await, None);

        store.set("settings", "{\"totalDays\":3}").await;
        assert_eq!(
            store.get("settings").await,
            Some("{\"totalDays\":3}".to_string())
        );
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");

        FileCacheStore::new(path.clone()).set("k", "v").await;

        let reopened = FileCacheStore::new(path);
        assert_eq!(reopened.get("k").await, Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_file_store_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCacheStore::new(temp_dir.path().join("cache.json"));

        store.set("a", "1").await;
        store.set("b", "2").await;
        store.set("a", "3").await;

        assert_eq!(store.get("a").await, Some("3".to_string()));
        assert_eq!(store.get("b").await, Some("2".to_string()));
    }
}
