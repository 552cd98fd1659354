//! Settings store trait.

use async_trait::async_trait;

use super::model::WishlistItem;
use crate::checklist::ChecklistState;
use crate::error::Result;
use crate::schedule::DayPlan;

/// The remote store holding everything that is not a trip row: the day plan
/// ("settings"), the shared checklist rows, and the wishlist.
///
/// Callers treat this store as best-effort. Reads that fail degrade to
/// cached or default values; writes are mostly fire-and-forget with the
/// failure logged and local state kept. Implementations map every failure
/// to `WayfarerError::RemoteUnavailable`.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Fetches the stored day plan.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(DayPlan))`: A plan has been saved before
    /// - `Ok(None)`: Nothing stored yet (first run)
    /// - `Err(_)`: Remote store unreachable; callers treat this like `None`
    ///   plus a log line
    async fn get_settings(&self) -> Result<Option<DayPlan>>;

    /// Stores the full day plan (whole-value write, last writer wins).
    async fn save_settings(&self, plan: &DayPlan) -> Result<()>;

    /// Fetches all checklist rows.
    async fn get_checklist_states(&self) -> Result<Vec<ChecklistState>>;

    /// Stores one checklist row, replacing that key's whole list.
    async fn save_checklist_state(&self, state: &ChecklistState) -> Result<()>;

    /// Fetches the wishlist.
    async fn get_wishlist(&self) -> Result<Vec<WishlistItem>>;

    /// Stores the full wishlist (whole-value write, last writer wins).
    async fn save_wishlist(&self, items: &[WishlistItem]) -> Result<()>;
}
