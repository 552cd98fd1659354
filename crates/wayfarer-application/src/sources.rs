//! Remote source adapters for the planner's cache-synced resources.
//!
//! Each adapter binds one store contract to one resource value type.
//! Sources that rewrite their remote state whole (settings, wishlist) also
//! implement `RemoteSink`; row-level stores (trips, checklist rows) are
//! fetch-only and their writes go through the store directly.

use crate::sync::{RemoteSink, RemoteSource};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use wayfarer_core::checklist::ChecklistMerger;
use wayfarer_core::error::Result;
use wayfarer_core::schedule::DayPlan;
use wayfarer_core::settings::{SettingsStore, WishlistItem};
use wayfarer_core::trip::{Trip, TripStore};

pub const SETTINGS_CACHE_KEY: &str = "wayfarer_settings";
pub const TRIPS_CACHE_KEY: &str = "wayfarer_trips";
pub const CHECKLIST_CACHE_KEY: &str = "wayfarer_checklist";
pub const WISHLIST_CACHE_KEY: &str = "wayfarer_wishlist";

/// The day plan, backed by the settings store.
pub struct SettingsSource {
    store: Arc<dyn SettingsStore>,
}

impl SettingsSource {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RemoteSource for SettingsSource {
    type Value = DayPlan;

    fn cache_key(&self) -> &'static str {
        SETTINGS_CACHE_KEY
    }

    async fn fetch(&self) -> Result<DayPlan> {
        // A missing row means the plan was never saved. The starter plan is
        // returned as a successful fetch so first-run state settles instead
        // of re-fetching on every read
        match self.store.get_settings().await? {
            Some(plan) => Ok(plan),
            None => Ok(self.fallback()),
        }
    }

    /// A one-day plan anchored on today.
    fn fallback(&self) -> DayPlan {
        DayPlan::starting(Utc::now().date_naive())
    }
}

#[async_trait]
impl RemoteSink for SettingsSource {
    async fn push(&self, value: &DayPlan) -> Result<()> {
        self.store.save_settings(value).await
    }
}

/// The full trip list, backed by the trip store.
///
/// Fetch-only: trip creation, updates, and deletion are row-level calls on
/// the store, with the resource patched locally or refreshed afterwards.
pub struct TripListSource {
    store: Arc<dyn TripStore>,
}

impl TripListSource {
    pub fn new(store: Arc<dyn TripStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RemoteSource for TripListSource {
    type Value = Vec<Trip>;

    fn cache_key(&self) -> &'static str {
        TRIPS_CACHE_KEY
    }

    async fn fetch(&self) -> Result<Vec<Trip>> {
        self.store.list_trips().await
    }

    fn fallback(&self) -> Vec<Trip> {
        Vec::new()
    }
}

/// The merged checklist, backed by per-key rows in the settings store.
///
/// Fetch-only: toggles patch the merger locally and persist one row at a
/// time through the store.
pub struct ChecklistSource {
    store: Arc<dyn SettingsStore>,
}

impl ChecklistSource {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RemoteSource for ChecklistSource {
    type Value = ChecklistMerger;

    fn cache_key(&self) -> &'static str {
        CHECKLIST_CACHE_KEY
    }

    async fn fetch(&self) -> Result<ChecklistMerger> {
        let states = self.store.get_checklist_states().await?;
        Ok(ChecklistMerger::from_states(states))
    }

    fn fallback(&self) -> ChecklistMerger {
        ChecklistMerger::default()
    }
}

/// The wishlist, backed by the settings store.
pub struct WishlistSource {
    store: Arc<dyn SettingsStore>,
}

impl WishlistSource {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RemoteSource for WishlistSource {
    type Value = Vec<WishlistItem>;

    fn cache_key(&self) -> &'static str {
        WISHLIST_CACHE_KEY
    }

    async fn fetch(&self) -> Result<Vec<WishlistItem>> {
        self.store.get_wishlist().await
    }

    fn fallback(&self) -> Vec<WishlistItem> {
        Vec::new()
    }
}

#[async_trait]
impl RemoteSink for WishlistSource {
    async fn push(&self, value: &Vec<WishlistItem>) -> Result<()> {
        self.store.save_wishlist(value).await
    }
}
