//! Checklist use case implementation.
//!
//! One packing/notice checklist shared between travelers. Items are keyed
//! by the notice's icon and text; each key holds the set of travelers who
//! currently have it checked.

use crate::sources::ChecklistSource;
use crate::sync::CacheSyncedResource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use wayfarer_core::cache::CacheStore;
use wayfarer_core::checklist::{Traveler, notice_key};
use wayfarer_core::error::Result;
use wayfarer_core::settings::SettingsStore;

pub struct ChecklistUseCase {
    /// Store holding one row per item key
    settings_store: Arc<dyn SettingsStore>,
    /// Merged checklist resource, fetch-only
    resource: Arc<CacheSyncedResource<ChecklistSource>>,
}

impl ChecklistUseCase {
    pub fn new(settings_store: Arc<dyn SettingsStore>, cache: Arc<dyn CacheStore>) -> Self {
        let resource = Arc::new(CacheSyncedResource::new(
            ChecklistSource::new(settings_store.clone()),
            cache,
        ));
        Self {
            settings_store,
            resource,
        }
    }

    /// Toggles the item for the given traveler and returns the new checked
    /// state.
    ///
    /// The local merger changes immediately. The whole row for this key is
    /// then persisted fire-and-forget; a failure is logged and the local
    /// state stands until the next refresh. An empty row is still written,
    /// so the last uncheck survives.
    pub async fn toggle(&self, icon: &str, text: &str, traveler: Traveler) -> Result<bool> {
        let key = notice_key(icon, text);
        let mut now_checked = false;
        let merger = self
            .resource
            .apply_local(|merger| {
                now_checked = merger.toggle(&key, traveler);
                Ok(())
            })
            .await?;

        let state = merger.state_for(&key);
        let store = Arc::clone(&self.settings_store);
        tokio::spawn(async move {
            if let Err(e) = store.save_checklist_state(&state).await {
                tracing::warn!(
                    target: "itinerary_sync",
                    "[Checklist] Failed to persist row '{}': {}",
                    state.item_key,
                    e
                );
            }
        });

        Ok(now_checked)
    }

    pub async fn is_checked_by_user(&self, icon: &str, text: &str, username: &str) -> bool {
        self.resource
            .read()
            .await
            .is_checked_by_user(&notice_key(icon, text), username)
    }

    pub async fn is_checked_by_anyone(&self, icon: &str, text: &str) -> bool {
        self.resource
            .read()
            .await
            .is_checked_by_anyone(&notice_key(icon, text))
    }

    /// True when every known traveler has the item checked. False for an
    /// empty row.
    pub async fn is_checked_by_all(&self, icon: &str, text: &str, known_users: &[&str]) -> bool {
        self.resource
            .read()
            .await
            .is_checked_by_all(&notice_key(icon, text), known_users)
    }

    /// Who has the item checked right now.
    pub async fn checked_travelers(&self, icon: &str, text: &str) -> Vec<Traveler> {
        let merger = self.resource.read().await;
        merger
            .checked_travelers(&notice_key(icon, text))
            .into_iter()
            .cloned()
            .collect()
    }

    /// Re-fetches all rows and rebuilds the merger.
    pub async fn refresh(&self) -> bool {
        self.resource.refresh().await
    }

    /// Notifies whenever the merged checklist changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.resource.subscribe()
    }

    /// Starts the periodic refresh loop for the checklist.
    pub fn start_background_refresh(&self, every: Duration) -> Option<JoinHandle<()>> {
        self.resource.start_periodic_refresh(every)
    }
}
