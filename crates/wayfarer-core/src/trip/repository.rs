//! Trip store trait.
//!
//! Defines the contract the planner requires from the remote trip store.

use async_trait::async_trait;

use super::model::{Trip, TripDraft, TripPatch};
use crate::error::Result;

/// An abstract remote store owning the trip rows.
///
/// The planner never persists trips itself; it reads them, creates and
/// deletes them on behalf of the user, and rewrites their `date` field when
/// days are reordered. Implementations wrap whatever transport the
/// deployment uses (HTTP API, database client, in-memory fake).
///
/// # Implementation Notes
///
/// Every failure should map to `WayfarerError::RemoteUnavailable`; the
/// planner treats network, auth, and server errors uniformly and expects
/// timeouts to be handled inside the implementation. Updates must be
/// idempotent per row so retries after a partial multi-row operation are
/// safe.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Lists all trip rows.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Trip>)`: All trips, in store order
    /// - `Err(_)`: Remote store unreachable
    async fn list_trips(&self) -> Result<Vec<Trip>>;

    /// Creates a trip and returns the stored row (with its generated id).
    async fn create_trip(&self, draft: TripDraft) -> Result<Trip>;

    /// Applies a partial update to a trip and returns the updated row.
    ///
    /// # Errors
    ///
    /// `NotFound` if no trip has the given id; `RemoteUnavailable` on any
    /// transport failure.
    async fn update_trip(&self, id: &str, patch: TripPatch) -> Result<Trip>;

    /// Deletes a trip. Deleting an unknown id is not an error.
    async fn delete_trip(&self, id: &str) -> Result<()>;
}
