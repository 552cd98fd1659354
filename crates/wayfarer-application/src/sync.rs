//! Cache-synced remote resources.
//!
//! This module provides `CacheSyncedResource`, the optimistic cache wrapper
//! behind every remote-backed value in the planner: settings, the trip
//! list, the checklist, and the wishlist. Reads are served from memory or
//! the local cache and only block on the network once, when both are cold;
//! writes apply locally first and reach the remote store best-effort.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, watch};
use tokio::task::JoinHandle;
use wayfarer_core::cache::{CacheEntry, CacheStore};
use wayfarer_core::error::Result;

/// A remote store endpoint serving one cacheable value.
///
/// Implementations translate one remote contract (trip listing, settings
/// row, checklist table) into a single value the resource can hold.
#[async_trait]
pub trait RemoteSource: Send + Sync + 'static {
    /// The value this source produces and caches.
    type Value: Clone + Send + Sync + Serialize + DeserializeOwned;

    /// Cache key under which the value is persisted locally.
    fn cache_key(&self) -> &'static str;

    /// Fetches the current value from the remote store.
    async fn fetch(&self) -> Result<Self::Value>;

    /// Value served when neither memory, cache, nor remote produced one.
    fn fallback(&self) -> Self::Value;
}

/// A source whose value can also be written back whole.
///
/// Row-level stores (trips, checklist rows) do not implement this; their
/// writes go through the store directly and the resource is only refreshed
/// or patched locally.
#[async_trait]
pub trait RemoteSink: RemoteSource {
    /// Writes the whole value back to the remote store.
    async fn push(&self, value: &Self::Value) -> Result<()>;
}

/// Outcome of a whole-value mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// The remote store accepted the write.
    Synced,
    /// The local value is updated but the remote write failed. The change
    /// is kept, not reverted; a later mutation or refresh reconciles it.
    LocalOnly { reason: String },
}

impl SyncStatus {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncStatus::Synced)
    }
}

/// Optimistic cache wrapper around one remote-backed value.
///
/// One instance exists per resource, constructed where the owning use case
/// is built and shared by `Arc`; nothing is process-global. Lifecycle:
/// construct, optionally `start_periodic_refresh`, abort the returned
/// handle on shutdown.
///
/// Read policy is availability-first: `read` never fails, degrading from
/// memory to the local cache to one remote fetch to the source's fallback
/// value. Write policy is optimistic: the local value changes immediately
/// and the remote write may trail or fail without reverting it.
pub struct CacheSyncedResource<S: RemoteSource> {
    /// Remote collaborator this resource mirrors
    source: S,
    /// Local cache, authoritative for the next cold load
    cache: Arc<dyn CacheStore>,
    /// Last applied value, `None` until the first load
    state: RwLock<Option<CacheEntry<S::Value>>>,
    /// Bumped every time a value is installed; subscribers watch this
    revision: watch::Sender<u64>,
    /// At most one refresh loop per instance
    refresher_started: AtomicBool,
}

impl<S: RemoteSource> CacheSyncedResource<S> {
    pub fn new(source: S, cache: Arc<dyn CacheStore>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            source,
            cache,
            state: RwLock::new(None),
            revision,
            refresher_started: AtomicBool::new(false),
        }
    }

    /// Returns the current value.
    ///
    /// Serves from memory when warm, then from the local cache (even a
    /// stale entry primes memory), then blocks on one remote fetch. If
    /// that fetch fails the source's fallback is returned and the resource
    /// stays cold, so the next read retries the remote.
    pub async fn read(&self) -> S::Value {
        {
            let state = self.state.read().await;
            if let Some(entry) = state.as_ref() {
                return entry.value.clone();
            }
        }
        self.load_cold().await
    }

    /// Fetches from the remote and, on success, installs the new value.
    ///
    /// Returns whether a new value was applied. Failures are logged and
    /// leave the last known value in place.
    pub async fn refresh(&self) -> bool {
        match self.source.fetch().await {
            Ok(value) => {
                self.install(value).await;
                true
            }
            Err(e) => {
                tracing::warn!(
                    target: "itinerary_sync",
                    "[{}] Refresh failed, keeping last known value: {}",
                    self.source.cache_key(),
                    e
                );
                false
            }
        }
    }

    /// Like [`Self::refresh`], but skips the fetch entirely when the
    /// current entry is younger than `max_age`.
    pub async fn refresh_if_stale(&self, max_age: Duration) -> bool {
        {
            let state = self.state.read().await;
            if let Some(entry) = state.as_ref()
                && entry.is_fresh(max_age)
            {
                return false;
            }
        }
        self.refresh().await
    }

    /// Applies a local mutation without any remote write.
    ///
    /// This is the optimistic half used by resources whose remote writes
    /// are row-level. The writer runs on the current value; an error from
    /// it aborts with nothing changed. Returns the new value.
    pub async fn apply_local<F>(&self, writer: F) -> Result<S::Value>
    where
        F: FnOnce(&mut S::Value) -> Result<()>,
    {
        let mut value = self.read().await;
        writer(&mut value)?;
        self.install(value.clone()).await;
        Ok(value)
    }

    /// Subscribes to value changes. The receiver resolves whenever a new
    /// value is installed by a refresh, a mutation, or a cold fetch.
    /// Priming memory from the local cache does not count; that value is
    /// the one subscribers already saw.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Current revision counter; increases with every installed value.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Starts the background refresh loop for this resource.
    ///
    /// Returns the task handle so the owner can abort it on shutdown, or
    /// `None` when a loop is already running for this instance.
    pub fn start_periodic_refresh(self: &Arc<Self>, every: Duration) -> Option<JoinHandle<()>> {
        use tokio::time::interval;

        if self.refresher_started.swap(true, Ordering::SeqCst) {
            tracing::warn!(
                target: "itinerary_sync",
                "[{}] Refresh loop already running, skipping",
                self.source.cache_key()
            );
            return None;
        }

        let resource = Arc::clone(self);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(every);
            // The first tick completes immediately; consume it so the
            // first refresh lands one full period after start
            ticker.tick().await;
            tracing::info!(
                target: "itinerary_sync",
                "[{}] Refresh loop started ({:?} interval)",
                resource.source.cache_key(),
                every
            );

            loop {
                ticker.tick().await;
                tracing::debug!(
                    target: "itinerary_sync",
                    "[{}] Tick",
                    resource.source.cache_key()
                );
                resource.refresh().await;
            }
        });

        Some(handle)
    }

    /// Loads the value when memory is empty: local cache first, then one
    /// blocking remote fetch, then the fallback.
    async fn load_cold(&self) -> S::Value {
        let key = self.source.cache_key();

        if let Some(raw) = self.cache.get(key).await {
            match serde_json::from_str::<CacheEntry<S::Value>>(&raw) {
                Ok(entry) => {
                    let mut state = self.state.write().await;
                    // A concurrent load may have won; keep whichever
                    // value arrived first
                    let entry = state.get_or_insert(entry);
                    return entry.value.clone();
                }
                Err(e) => {
                    tracing::warn!(
                        target: "itinerary_sync",
                        "[{}] Dropping unreadable cache entry: {}",
                        key,
                        e
                    );
                }
            }
        }

        match self.source.fetch().await {
            Ok(value) => {
                self.install(value.clone()).await;
                value
            }
            Err(e) => {
                tracing::warn!(
                    target: "itinerary_sync",
                    "[{}] Cold fetch failed, serving fallback: {}",
                    key,
                    e
                );
                self.source.fallback()
            }
        }
    }

    /// Installs a value into memory and the local cache, then notifies
    /// subscribers.
    async fn install(&self, value: S::Value) {
        let entry = CacheEntry::fresh(value);
        let raw = serde_json::to_string(&entry);
        {
            let mut state = self.state.write().await;
            *state = Some(entry);
        }
        match raw {
            Ok(raw) => self.cache.set(self.source.cache_key(), &raw).await,
            Err(e) => {
                tracing::warn!(
                    target: "itinerary_sync",
                    "[{}] Failed to encode cache entry: {}",
                    self.source.cache_key(),
                    e
                );
            }
        }
        self.revision.send_modify(|rev| *rev += 1);
    }
}

impl<S: RemoteSink> CacheSyncedResource<S> {
    /// Applies a mutation locally, then pushes the whole value to the
    /// remote store.
    ///
    /// A writer error aborts before anything changes, locally or remotely.
    /// On success the new value is visible to readers immediately; the
    /// remote write then either confirms (`Synced`, after a refresh to
    /// reconcile any server-side transformation) or fails
    /// (`LocalOnly`, keeping the local value).
    pub async fn mutate<F>(&self, writer: F) -> Result<SyncStatus>
    where
        F: FnOnce(&mut S::Value) -> Result<()>,
    {
        let value = self.apply_local(writer).await?;

        match self.source.push(&value).await {
            Ok(()) => {
                self.refresh().await;
                Ok(SyncStatus::Synced)
            }
            Err(e) => {
                tracing::warn!(
                    target: "itinerary_sync",
                    "[{}] Remote write failed, keeping local value: {}",
                    self.source.cache_key(),
                    e
                );
                Ok(SyncStatus::LocalOnly {
                    reason: e.to_string(),
                })
            }
        }
    }
}
