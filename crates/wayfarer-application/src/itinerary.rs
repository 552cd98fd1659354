//! Itinerary use case implementation.
//!
//! This module provides the `ItineraryUseCase` which coordinates the day
//! plan, the trip store, and the local cache so that every view of the
//! itinerary reads instantly and every mutation lands locally before it
//! reaches the remote.

use crate::sources::{SettingsSource, TripListSource, WishlistSource};
use crate::sync::{CacheSyncedResource, SyncStatus};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use wayfarer_core::WayfarerError;
use wayfarer_core::cache::CacheStore;
use wayfarer_core::config::WayfarerConfig;
use wayfarer_core::error::Result;
use wayfarer_core::schedule::{DayPlan, PendingDayGuard};
use wayfarer_core::settings::{SettingsStore, WishlistItem};
use wayfarer_core::trip::{Trip, TripDraft, TripPatch, TripStore};

/// Use case for the shared itinerary.
///
/// # Responsibilities
///
/// - Day plan operations (add, remove, rename, re-anchor) with optimistic
///   persistence through the settings resource
/// - Trip CRUD against the remote store, with the trip-list resource
///   patched locally so readers never wait on a refresh
/// - Day reordering as a swap of the two days' trip dates
/// - The pending-day window around the add-trip form (begin, commit on
///   trip save, rollback on dismissal)
/// - Wishlist edits
///
/// # Thread Safety
///
/// Methods take `&self` and may interleave arbitrarily; shared state lives
/// in the cache-synced resources and a `Mutex` around the pending guard.
/// No lock is held across a remote call except the pending guard during
/// its own begin/rollback, which keeps the at-most-one invariant.
pub struct ItineraryUseCase {
    /// Store for trip rows
    trip_store: Arc<dyn TripStore>,
    /// Day plan resource, whole-value writes
    settings: Arc<CacheSyncedResource<SettingsSource>>,
    /// Trip list resource, fetch-only
    trips: Arc<CacheSyncedResource<TripListSource>>,
    /// Wishlist resource, whole-value writes
    wishlist: Arc<CacheSyncedResource<WishlistSource>>,
    /// At most one uncommitted day at a time
    pending: Mutex<PendingDayGuard>,
    /// Day limits and refresh cadence
    config: WayfarerConfig,
    /// Whether this session runs the admin flow (higher day limit)
    admin: bool,
}

impl ItineraryUseCase {
    /// Creates a new `ItineraryUseCase` with one resource per remote-backed
    /// value, all sharing the given cache.
    pub fn new(
        trip_store: Arc<dyn TripStore>,
        settings_store: Arc<dyn SettingsStore>,
        cache: Arc<dyn CacheStore>,
        config: WayfarerConfig,
        admin: bool,
    ) -> Self {
        let settings = Arc::new(CacheSyncedResource::new(
            SettingsSource::new(settings_store.clone()),
            cache.clone(),
        ));
        let trips = Arc::new(CacheSyncedResource::new(
            TripListSource::new(trip_store.clone()),
            cache.clone(),
        ));
        let wishlist = Arc::new(CacheSyncedResource::new(
            WishlistSource::new(settings_store),
            cache,
        ));

        Self {
            trip_store,
            settings,
            trips,
            wishlist,
            pending: Mutex::new(PendingDayGuard::new()),
            config,
            admin,
        }
    }

    /// The current day plan.
    pub async fn plan(&self) -> DayPlan {
        self.settings.read().await
    }

    /// All trips, including ones whose date no longer maps to a visible
    /// day.
    pub async fn trips(&self) -> Vec<Trip> {
        self.trips.read().await
    }

    /// Trips whose date maps to the given day number.
    ///
    /// Matching is by date, so trips left behind by a removed day reappear
    /// as soon as some day maps to their date again.
    pub async fn trips_for_day(&self, day_number: u32) -> Vec<Trip> {
        let date = self.settings.read().await.day_to_date(day_number);
        self.trips
            .read()
            .await
            .into_iter()
            .filter(|trip| trip.date == date)
            .collect()
    }

    // ===== Day plan operations =====

    /// Appends a new day and returns its number together with how far the
    /// write got.
    pub async fn add_day(&self) -> Result<(u32, SyncStatus)> {
        let limit = self.config.day_limit(self.admin);
        let mut new_day = 0;
        let status = self
            .settings
            .mutate(|plan| {
                new_day = plan.add_day(limit)?;
                Ok(())
            })
            .await?;
        Ok((new_day, status))
    }

    /// Removes the last day. Trips dated on it are left untouched in the
    /// store; they are merely no longer reachable through a day number.
    pub async fn remove_last_day(&self) -> Result<SyncStatus> {
        self.settings.mutate(|plan| plan.remove_last_day()).await
    }

    pub async fn rename_day_theme(
        &self,
        day_number: u32,
        theme: impl Into<String>,
    ) -> Result<SyncStatus> {
        let theme = theme.into();
        self.settings
            .mutate(|plan| plan.rename_day_theme(day_number, theme))
            .await
    }

    pub async fn set_day_image(
        &self,
        day_number: u32,
        url: impl Into<String>,
    ) -> Result<SyncStatus> {
        let url = url.into();
        self.settings
            .mutate(|plan| plan.set_day_image(day_number, url))
            .await
    }

    /// Re-anchors day 1 on a new calendar date. Day themes keep their
    /// numbers; which trips belong to which day is reinterpreted.
    pub async fn set_trip_start_date(&self, new_start: NaiveDate) -> Result<SyncStatus> {
        self.settings
            .mutate(|plan| {
                plan.set_trip_start_date(new_start);
                Ok(())
            })
            .await
    }

    // ===== Pending-day window =====

    /// Adds a day for a not-yet-saved trip and marks it pending.
    ///
    /// The new day is persisted optimistically right away; if the add-trip
    /// form is abandoned, [`Self::rollback_pending_day`] removes it again.
    pub async fn begin_new_day(&self) -> Result<u32> {
        let limit = self.config.day_limit(self.admin);
        let mut pending = self.pending.lock().await;
        if let Some(day) = pending.pending_day() {
            return Err(WayfarerError::invalid_operation(format!(
                "day {} is already pending",
                day
            )));
        }

        let mut new_day = 0;
        self.settings
            .mutate(|plan| {
                new_day = plan.add_day(limit)?;
                Ok(())
            })
            .await?;
        pending.begin(new_day)?;
        Ok(new_day)
    }

    /// Clears the pending marker without touching the plan. Returns the
    /// day that was pending, if any.
    pub async fn commit_pending_day(&self) -> Option<u32> {
        let day = self.pending.lock().await.commit();
        if let Some(day) = day {
            tracing::debug!(
                target: "itinerary_sync",
                "[Itinerary] Committed pending day {}",
                day
            );
        }
        day
    }

    /// Rolls the plan back to before the pending day existed.
    ///
    /// The day count is recomputed from the pending number, not restored
    /// from a snapshot, so days added after the pending one are discarded
    /// with it.
    pub async fn rollback_pending_day(&self) -> Result<Option<u32>> {
        let mut pending = self.pending.lock().await;
        if pending.pending_day().is_none() {
            return Ok(None);
        }

        let mut rolled = None;
        self.settings
            .mutate(|plan| {
                rolled = pending.rollback(plan)?;
                Ok(())
            })
            .await?;

        if let Some(day) = rolled {
            tracing::info!(
                target: "itinerary_sync",
                "[Itinerary] Rolled back pending day {}",
                day
            );
        }
        Ok(rolled)
    }

    // ===== Trip operations =====

    /// Creates a trip. A successful save commits any pending day, since
    /// the day now has content worth keeping.
    pub async fn create_trip(&self, draft: TripDraft) -> Result<Trip> {
        let trip = self.trip_store.create_trip(draft).await?;

        if let Some(day) = self.pending.lock().await.commit() {
            tracing::debug!(
                target: "itinerary_sync",
                "[Itinerary] Trip save committed pending day {}",
                day
            );
        }

        let created = trip.clone();
        self.trips
            .apply_local(|trips| {
                // A cold load may have fetched the list with this trip
                // already in it
                if !trips.iter().any(|t| t.id == created.id) {
                    trips.push(created);
                }
                Ok(())
            })
            .await?;

        Ok(trip)
    }

    pub async fn update_trip(&self, id: &str, patch: TripPatch) -> Result<Trip> {
        let updated = self.trip_store.update_trip(id, patch).await?;

        let patched = updated.clone();
        self.trips
            .apply_local(|trips| {
                if let Some(slot) = trips.iter_mut().find(|t| t.id == patched.id) {
                    *slot = patched;
                }
                Ok(())
            })
            .await?;

        Ok(updated)
    }

    pub async fn delete_trip(&self, id: &str) -> Result<()> {
        self.trip_store.delete_trip(id).await?;

        let gone = id.to_string();
        self.trips
            .apply_local(|trips| {
                trips.retain(|t| t.id != gone);
                Ok(())
            })
            .await?;

        Ok(())
    }

    /// Swaps the trips of two days by rewriting their dates.
    ///
    /// Each trip is moved with its own remote write; a failed write is
    /// logged and counted, never rolled back, and the whole operation then
    /// reports `PartialFailure`. Re-running a move targets the date the
    /// trip already has, so retries do not corrupt anything. Either way
    /// the trip resource is refreshed afterwards, so readers see actual
    /// server state rather than an assumed outcome.
    pub async fn reorder_days(&self, from_day: u32, to_day: u32) -> Result<()> {
        if from_day == to_day {
            return Ok(());
        }

        let plan = self.settings.read().await;
        let from_date = plan.day_to_date(from_day);
        let to_date = plan.day_to_date(to_day);

        // A listing failure aborts before any write
        let all = self.trip_store.list_trips().await?;

        // A swap, not a shift: the two days trade trips, no other day
        // moves
        let moves: Vec<(String, NaiveDate)> = all
            .iter()
            .filter_map(|trip| {
                if trip.date == from_date {
                    Some((trip.id.clone(), to_date))
                } else if trip.date == to_date {
                    Some((trip.id.clone(), from_date))
                } else {
                    None
                }
            })
            .collect();

        let attempted = moves.len();
        let mut failed = 0;
        for (id, date) in moves {
            if let Err(e) = self
                .trip_store
                .update_trip(&id, TripPatch::date_only(date))
                .await
            {
                failed += 1;
                tracing::warn!(
                    target: "itinerary_sync",
                    "[Itinerary] Failed to move trip {} while swapping days {} and {}: {}",
                    id,
                    from_day,
                    to_day,
                    e
                );
            }
        }

        self.trips.refresh().await;

        if failed > 0 {
            return Err(WayfarerError::partial_failure(attempted, failed));
        }
        Ok(())
    }

    // ===== Wishlist =====

    pub async fn wishlist(&self) -> Vec<WishlistItem> {
        self.wishlist.read().await
    }

    pub async fn add_wishlist_item(&self, item: WishlistItem) -> Result<SyncStatus> {
        self.wishlist
            .mutate(|items| {
                items.push(item);
                Ok(())
            })
            .await
    }

    pub async fn remove_wishlist_item(&self, id: &str) -> Result<SyncStatus> {
        let id = id.to_string();
        self.wishlist
            .mutate(|items| {
                let before = items.len();
                items.retain(|item| item.id != id);
                if items.len() == before {
                    return Err(WayfarerError::not_found("wishlist item", &id));
                }
                Ok(())
            })
            .await
    }

    // ===== Refresh & lifecycle =====

    /// Re-fetches the trip list now.
    pub async fn refresh_trips(&self) -> bool {
        self.trips.refresh().await
    }

    /// Re-fetches the trip list unless the current entry is younger than
    /// the configured max age.
    pub async fn refresh_trips_if_stale(&self) -> bool {
        self.trips
            .refresh_if_stale(self.config.cache_max_age())
            .await
    }

    /// Re-fetches everything this use case owns.
    pub async fn refresh_all(&self) {
        self.settings.refresh().await;
        self.trips.refresh().await;
        self.wishlist.refresh().await;
    }

    /// Notifies whenever the trip list changes.
    pub fn subscribe_trips(&self) -> watch::Receiver<u64> {
        self.trips.subscribe()
    }

    /// Notifies whenever the day plan changes.
    pub fn subscribe_plan(&self) -> watch::Receiver<u64> {
        self.settings.subscribe()
    }

    /// Starts the periodic refresh loops at the configured interval.
    ///
    /// Returns the task handles; abort them on shutdown.
    pub fn start_background_refresh(&self) -> Vec<JoinHandle<()>> {
        let every = self.config.refresh_interval();
        [
            self.trips.start_periodic_refresh(every),
            self.settings.start_periodic_refresh(every),
            self.wishlist.start_periodic_refresh(every),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use wayfarer_infrastructure::{InMemorySettingsStore, InMemoryTripStore, MemoryCacheStore};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(title: &str, on: NaiveDate) -> TripDraft {
        TripDraft {
            title: title.to_string(),
            date: on,
            lat: 41.39,
            lng: 2.17,
            location: "Barcelona".to_string(),
            description: String::new(),
            image_url: String::new(),
        }
    }

    async fn usecase_starting(
        start: NaiveDate,
    ) -> (
        Arc<InMemoryTripStore>,
        Arc<InMemorySettingsStore>,
        ItineraryUseCase,
    ) {
        let trip_store = Arc::new(InMemoryTripStore::new());
        let settings_store = Arc::new(InMemorySettingsStore::new());
        settings_store
            .save_settings(&DayPlan::starting(start))
            .await
            .unwrap();

        let usecase = ItineraryUseCase::new(
            trip_store.clone(),
            settings_store.clone(),
            Arc::new(MemoryCacheStore::new()),
            WayfarerConfig::default(),
            false,
        );
        (trip_store, settings_store, usecase)
    }

    async fn grow_to(usecase: &ItineraryUseCase, days: u32) {
        while usecase.plan().await.total_days < days {
            usecase.add_day().await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_add_day_until_limit() {
        let (_, _, usecase) = usecase_starting(date(2024, 4, 1)).await;

        for expected in 2..=7 {
            let (day, status) = usecase.add_day().await.unwrap();
            assert_eq!(day, expected);
            assert!(status.is_synced());
        }

        let err = usecase.add_day().await.unwrap_err();
        assert!(err.is_limit_exceeded());
        assert_eq!(usecase.plan().await.total_days, 7);
    }

    #[tokio::test]
    async fn test_admin_flow_allows_more_days() {
        let trip_store = Arc::new(InMemoryTripStore::new());
        let settings_store = Arc::new(InMemorySettingsStore::new());
        settings_store
            .save_settings(&DayPlan::starting(date(2024, 4, 1)))
            .await
            .unwrap();

        let usecase = ItineraryUseCase::new(
            trip_store,
            settings_store,
            Arc::new(MemoryCacheStore::new()),
            WayfarerConfig::default(),
            true,
        );

        grow_to(&usecase, 14).await;
        assert!(usecase.add_day().await.unwrap_err().is_limit_exceeded());
    }

    #[tokio::test]
    async fn test_removed_day_hides_trips_and_readding_reexposes() {
        let (_, _, usecase) = usecase_starting(date(2024, 4, 1)).await;
        grow_to(&usecase, 3).await;

        let trip = usecase
            .create_trip(draft("Montjuic", date(2024, 4, 3)))
            .await
            .unwrap();

        usecase.remove_last_day().await.unwrap();
        assert_eq!(usecase.plan().await.total_days, 2);
        // The trip row survives day removal
        assert!(usecase.trips().await.iter().any(|t| t.id == trip.id));

        // Re-adding a third day maps back onto the trip's date
        usecase.add_day().await.unwrap();
        let day3 = usecase.trips_for_day(3).await;
        assert_eq!(day3.len(), 1);
        assert_eq!(day3[0].id, trip.id);
    }

    #[tokio::test]
    async fn test_day_number_past_the_calendar_lists_no_trips() {
        let (_, _, usecase) = usecase_starting(date(2024, 4, 1)).await;
        grow_to(&usecase, 3).await;
        usecase
            .create_trip(draft("Harbour walk", date(2024, 4, 2)))
            .await
            .unwrap();

        assert!(usecase.trips_for_day(u32::MAX).await.is_empty());
    }

    #[tokio::test]
    async fn test_reorder_swaps_the_two_days() {
        let (_, _, usecase) = usecase_starting(date(2024, 4, 1)).await;
        grow_to(&usecase, 5).await;

        let a = usecase
            .create_trip(draft("A", date(2024, 4, 2)))
            .await
            .unwrap();
        let b = usecase
            .create_trip(draft("B", date(2024, 4, 2)))
            .await
            .unwrap();
        let c = usecase
            .create_trip(draft("C", date(2024, 4, 5)))
            .await
            .unwrap();
        let d = usecase
            .create_trip(draft("D", date(2024, 4, 3)))
            .await
            .unwrap();

        usecase.reorder_days(2, 5).await.unwrap();

        let trips = usecase.trips().await;
        let date_of = |id: &str| trips.iter().find(|t| t.id == id).unwrap().date;
        assert_eq!(date_of(&a.id), date(2024, 4, 5));
        assert_eq!(date_of(&b.id), date(2024, 4, 5));
        assert_eq!(date_of(&c.id), date(2024, 4, 2));
        // A trip on neither day is untouched
        assert_eq!(date_of(&d.id), date(2024, 4, 3));
    }

    #[tokio::test]
    async fn test_reorder_same_day_is_a_noop() {
        let (_, _, usecase) = usecase_starting(date(2024, 4, 1)).await;
        grow_to(&usecase, 3).await;
        let trip = usecase
            .create_trip(draft("Tapas", date(2024, 4, 2)))
            .await
            .unwrap();

        usecase.reorder_days(2, 2).await.unwrap();

        assert_eq!(usecase.trips().await[0].date, trip.date);
    }

    /// Trip store that fails updates for chosen ids.
    struct FlakyTripStore {
        inner: InMemoryTripStore,
        fail_ids: std::sync::Mutex<HashSet<String>>,
    }

    impl FlakyTripStore {
        fn new() -> Self {
            Self {
                inner: InMemoryTripStore::new(),
                fail_ids: std::sync::Mutex::new(HashSet::new()),
            }
        }

        fn fail_updates_for(&self, id: &str) {
            self.fail_ids.lock().unwrap().insert(id.to_string());
        }
    }

    #[async_trait::async_trait]
    impl TripStore for FlakyTripStore {
        async fn list_trips(&self) -> Result<Vec<Trip>> {
            self.inner.list_trips().await
        }

        async fn create_trip(&self, draft: TripDraft) -> Result<Trip> {
            self.inner.create_trip(draft).await
        }

        async fn update_trip(&self, id: &str, patch: TripPatch) -> Result<Trip> {
            if self.fail_ids.lock().unwrap().contains(id) {
                return Err(WayfarerError::remote_unavailable("injected update failure"));
            }
            self.inner.update_trip(id, patch).await
        }

        async fn delete_trip(&self, id: &str) -> Result<()> {
            self.inner.delete_trip(id).await
        }
    }

    #[tokio::test]
    async fn test_reorder_surfaces_partial_failure() {
        let trip_store = Arc::new(FlakyTripStore::new());
        let settings_store = Arc::new(InMemorySettingsStore::new());
        settings_store
            .save_settings(&DayPlan::starting(date(2024, 4, 1)))
            .await
            .unwrap();

        let usecase = ItineraryUseCase::new(
            trip_store.clone(),
            settings_store,
            Arc::new(MemoryCacheStore::new()),
            WayfarerConfig::default(),
            false,
        );
        grow_to(&usecase, 5).await;

        let a = usecase
            .create_trip(draft("A", date(2024, 4, 2)))
            .await
            .unwrap();
        let b = usecase
            .create_trip(draft("B", date(2024, 4, 5)))
            .await
            .unwrap();
        trip_store.fail_updates_for(&b.id);

        let err = usecase.reorder_days(2, 5).await.unwrap_err();
        match err {
            WayfarerError::PartialFailure { attempted, failed } => {
                assert_eq!(attempted, 2);
                assert_eq!(failed, 1);
            }
            other => panic!("expected PartialFailure, got {:?}", other),
        }

        // The resource was refreshed, so it shows the half-moved truth
        let trips = usecase.trips().await;
        let date_of = |id: &str| trips.iter().find(|t| t.id == id).unwrap().date;
        assert_eq!(date_of(&a.id), date(2024, 4, 5));
        assert_eq!(date_of(&b.id), date(2024, 4, 5));
    }

    #[tokio::test]
    async fn test_pending_day_rollback_recomputes() {
        let (_, _, usecase) = usecase_starting(date(2024, 4, 1)).await;

        let day = usecase.begin_new_day().await.unwrap();
        assert_eq!(day, 2);

        // Only one pending day at a time
        assert!(usecase.begin_new_day().await.unwrap_err().is_local_validation());

        // Days added after the pending one go down with it
        usecase.add_day().await.unwrap();
        assert_eq!(usecase.plan().await.total_days, 3);

        assert_eq!(usecase.rollback_pending_day().await.unwrap(), Some(2));
        assert_eq!(usecase.plan().await.total_days, 1);

        // Nothing pending anymore
        assert_eq!(usecase.rollback_pending_day().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_trip_save_commits_pending_day() {
        let (_, _, usecase) = usecase_starting(date(2024, 4, 1)).await;

        let day = usecase.begin_new_day().await.unwrap();
        let on = usecase.plan().await.day_to_date(day);
        usecase.create_trip(draft("Boat tour", on)).await.unwrap();

        // Commit already happened; a rollback now must not remove the day
        assert_eq!(usecase.rollback_pending_day().await.unwrap(), None);
        assert_eq!(usecase.plan().await.total_days, 2);
        assert_eq!(usecase.trips_for_day(2).await.len(), 1);
    }

    #[tokio::test]
    async fn test_concrete_first_weekend_scenario() {
        let (_, _, usecase) = usecase_starting(date(2024, 4, 1)).await;
        grow_to(&usecase, 3).await;

        let plan = usecase.plan().await;
        assert_eq!(plan.day_to_date(1), date(2024, 4, 1));
        assert_eq!(plan.day_to_date(3), date(2024, 4, 3));

        let trip = usecase
            .create_trip(draft("Picnic", date(2024, 4, 3)))
            .await
            .unwrap();
        assert_eq!(plan.day_containing(trip.date), Some(3));

        usecase.reorder_days(1, 3).await.unwrap();
        let moved = usecase.trips().await;
        assert_eq!(moved[0].date, date(2024, 4, 1));
    }

    #[tokio::test]
    async fn test_set_trip_start_date_reinterprets_membership() {
        let (_, _, usecase) = usecase_starting(date(2024, 4, 1)).await;
        grow_to(&usecase, 3).await;
        let trip = usecase
            .create_trip(draft("Fado night", date(2024, 4, 3)))
            .await
            .unwrap();
        assert_eq!(usecase.trips_for_day(3).await.len(), 1);

        usecase.set_trip_start_date(date(2024, 4, 3)).await.unwrap();

        let day1 = usecase.trips_for_day(1).await;
        assert_eq!(day1.len(), 1);
        assert_eq!(day1[0].id, trip.id);
        assert!(usecase.trips_for_day(3).await.is_empty());
    }

    #[tokio::test]
    async fn test_offline_plan_edit_keeps_local_value() {
        let (_, settings_store, usecase) = usecase_starting(date(2024, 4, 1)).await;
        // Prime the resource while the store is reachable
        usecase.plan().await;

        settings_store.set_offline(true);
        let (day, status) = usecase.add_day().await.unwrap();
        assert_eq!(day, 2);
        assert!(matches!(status, SyncStatus::LocalOnly { .. }));
        assert_eq!(usecase.plan().await.total_days, 2);
    }

    #[tokio::test]
    async fn test_wishlist_add_and_remove() {
        let (_, _, usecase) = usecase_starting(date(2024, 4, 1)).await;

        let item = WishlistItem::new("Sintra day trip");
        let id = item.id.clone();
        usecase.add_wishlist_item(item).await.unwrap();
        assert_eq!(usecase.wishlist().await.len(), 1);

        usecase.remove_wishlist_item(&id).await.unwrap();
        assert!(usecase.wishlist().await.is_empty());

        let err = usecase.remove_wishlist_item(&id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_rename_and_image_upsert_flow() {
        let (_, _, usecase) = usecase_starting(date(2024, 4, 1)).await;
        grow_to(&usecase, 2).await;

        usecase.rename_day_theme(2, "Old town").await.unwrap();
        usecase
            .set_day_image(2, "https://example.com/alfama.jpg")
            .await
            .unwrap();

        let plan = usecase.plan().await;
        let day2 = plan.schedule(2).unwrap();
        assert_eq!(day2.theme, "Old town");
        assert_eq!(
            day2.image_url.as_deref(),
            Some("https://example.com/alfama.jpg")
        );

        // Out-of-range day numbers fail local validation
        assert!(usecase.rename_day_theme(9, "X").await.unwrap_err().is_not_found());
    }
}
