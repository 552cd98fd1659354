//! In-memory store implementations.
//!
//! These back the core repository traits with plain maps behind async
//! locks. They exist for tests, demos, and single-process setups that do
//! not talk to a real remote; the offline switch makes every call fail
//! with `RemoteUnavailable` so degraded-network paths can be exercised.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use wayfarer_core::WayfarerError;
use wayfarer_core::checklist::ChecklistState;
use wayfarer_core::error::Result;
use wayfarer_core::schedule::DayPlan;
use wayfarer_core::settings::{SettingsStore, WishlistItem};
use wayfarer_core::trip::{Trip, TripDraft, TripPatch, TripStore};

/// Map-backed trip store.
///
/// Listings are returned in `(date, id)` order so callers see a stable
/// sequence regardless of insertion order.
#[derive(Debug, Default)]
pub struct InMemoryTripStore {
    trips: Mutex<HashMap<String, Trip>>,
    offline: AtomicBool,
}

impl InMemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches failure injection on or off. While offline, every trait
    /// method returns `RemoteUnavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(WayfarerError::remote_unavailable("trip store is offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl TripStore for InMemoryTripStore {
    async fn list_trips(&self) -> Result<Vec<Trip>> {
        self.ensure_online()?;
        let trips = self.trips.lock().await;
        let mut all: Vec<Trip> = trips.values().cloned().collect();
        all.sort_by(|a, b| (a.date, &a.id).cmp(&(b.date, &b.id)));
        Ok(all)
    }

    async fn create_trip(&self, draft: TripDraft) -> Result<Trip> {
        self.ensure_online()?;
        let trip = Trip {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            date: draft.date,
            lat: draft.lat,
            lng: draft.lng,
            location: draft.location,
            description: draft.description,
            image_url: draft.image_url,
        };
        let mut trips = self.trips.lock().await;
        trips.insert(trip.id.clone(), trip.clone());
        Ok(trip)
    }

    async fn update_trip(&self, id: &str, patch: TripPatch) -> Result<Trip> {
        self.ensure_online()?;
        let mut trips = self.trips.lock().await;
        let trip = trips
            .get_mut(id)
            .ok_or_else(|| WayfarerError::not_found("trip", id))?;
        patch.apply(trip);
        Ok(trip.clone())
    }

    async fn delete_trip(&self, id: &str) -> Result<()> {
        self.ensure_online()?;
        let mut trips = self.trips.lock().await;
        // Deleting an id that is already gone is not an error
        trips.remove(id);
        Ok(())
    }
}

/// Map-backed settings, checklist, and wishlist store.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    settings: Mutex<Option<DayPlan>>,
    checklist: Mutex<HashMap<String, ChecklistState>>,
    wishlist: Mutex<Vec<WishlistItem>>,
    offline: AtomicBool,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches failure injection on or off. While offline, every trait
    /// method returns `RemoteUnavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(WayfarerError::remote_unavailable(
                "settings store is offline",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get_settings(&self) -> Result<Option<DayPlan>> {
        self.ensure_online()?;
        let settings = self.settings.lock().await;
        Ok(settings.clone())
    }

    async fn save_settings(&self, plan: &DayPlan) -> Result<()> {
        self.ensure_online()?;
        let mut settings = self.settings.lock().await;
        *settings = Some(plan.clone());
        Ok(())
    }

    async fn get_checklist_states(&self) -> Result<Vec<ChecklistState>> {
        self.ensure_online()?;
        let checklist = self.checklist.lock().await;
        let mut states: Vec<ChecklistState> = checklist.values().cloned().collect();
        states.sort_by(|a, b| a.item_key.cmp(&b.item_key));
        Ok(states)
    }

    async fn save_checklist_state(&self, state: &ChecklistState) -> Result<()> {
        self.ensure_online()?;
        let mut checklist = self.checklist.lock().await;
        // An empty checked_by list is still stored: it records that the
        // last remaining check was removed
        checklist.insert(state.item_key.clone(), state.clone());
        Ok(())
    }

    async fn get_wishlist(&self) -> Result<Vec<WishlistItem>> {
        self.ensure_online()?;
        let wishlist = self.wishlist.lock().await;
        Ok(wishlist.clone())
    }

    async fn save_wishlist(&self, items: &[WishlistItem]) -> Result<()> {
        self.ensure_online()?;
        let mut wishlist = self.wishlist.lock().await;
        *wishlist = items.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wayfarer_core::checklist::Traveler;

    fn draft(title: &str, date: NaiveDate) -> TripDraft {
        TripDraft {
            title: title.to_string(),
            date,
            lat: 41.39,
            lng: 2.17,
            location: "Barcelona".to_string(),
            description: String::new(),
            image_url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_trip_crud_round_trip() {
        let store = InMemoryTripStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();

        let created = store.create_trip(draft("Park Guell", date)).await.unwrap();
        assert!(!created.id.is_empty());

        let moved = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();
        let updated = store
            .update_trip(&created.id, TripPatch::date_only(moved))
            .await
            .unwrap();
        assert_eq!(updated.date, moved);
        assert_eq!(updated.title, "Park Guell");

        store.delete_trip(&created.id).await.unwrap();
        assert!(store.list_trips().await.unwrap().is_empty());
        // Second delete of the same id is fine
        store.delete_trip(&created.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_trips_listed_in_date_order() {
        let store = InMemoryTripStore::new();
        let d1 = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let d3 = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();

        store.create_trip(draft("Later", d3)).await.unwrap();
        store.create_trip(draft("Earlier", d1)).await.unwrap();

        let titles: Vec<String> = store
            .list_trips()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Earlier", "Later"]);
    }

    #[tokio::test]
    async fn test_update_unknown_trip_is_not_found() {
        let store = InMemoryTripStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

        let err = store
            .update_trip("missing", TripPatch::date_only(date))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_offline_trip_store_fails_every_call() {
        let store = InMemoryTripStore::new();
        store.set_offline(true);

        let err = store.list_trips().await.unwrap_err();
        assert!(err.is_remote_unavailable());

        store.set_offline(false);
        assert!(store.list_trips().await.is_ok());
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let store = InMemorySettingsStore::new();
        assert!(store.get_settings().await.unwrap().is_none());

        let plan = DayPlan::starting(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        store.save_settings(&plan).await.unwrap();
        assert_eq!(store.get_settings().await.unwrap(), Some(plan));
    }

    #[tokio::test]
    async fn test_empty_checklist_row_is_kept() {
        let store = InMemorySettingsStore::new();
        let mut state = ChecklistState {
            item_key: "🎫:Museum tickets".to_string(),
            checked_by: vec![Traveler::new("ana", "Ana")],
        };
        store.save_checklist_state(&state).await.unwrap();

        state.checked_by.clear();
        store.save_checklist_state(&state).await.unwrap();

        let states = store.get_checklist_states().await.unwrap();
        assert_eq!(states.len(), 1);
        assert!(states[0].checked_by.is_empty());
    }

    #[tokio::test]
    async fn test_offline_settings_store_fails_every_call() {
        let store = InMemorySettingsStore::new();
        store.set_offline(true);

        assert!(store.get_settings().await.unwrap_err().is_remote_unavailable());
        assert!(
            store
                .get_checklist_states()
                .await
                .unwrap_err()
                .is_remote_unavailable()
        );
    }
}
