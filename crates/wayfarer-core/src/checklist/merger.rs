use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model::{ChecklistState, Traveler};

/// Merged multi-user check state for the travel-notice checklist.
///
/// Per item key this holds the set of users who have the item checked,
/// keyed by username (display name and avatar ride along as metadata).
/// Keying by username makes toggle and the membership predicates O(log n)
/// and structurally rules out duplicate entries for one user.
///
/// The merger is the session-authoritative state: a remote refresh replaces
/// it wholesale, everything else changes it one toggle at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistMerger {
    items: BTreeMap<String, BTreeMap<String, Traveler>>,
}

impl ChecklistMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the merged state from remote rows, deduplicating each row's
    /// list by username (older rows may contain duplicates).
    pub fn from_states(states: Vec<ChecklistState>) -> Self {
        let mut items = BTreeMap::new();
        for state in states {
            let entry: &mut BTreeMap<String, Traveler> =
                items.entry(state.item_key).or_default();
            for traveler in state.checked_by {
                entry.insert(traveler.username.clone(), traveler);
            }
        }
        Self { items }
    }

    /// Flattens the merged state back into wire rows, one per item key.
    pub fn to_states(&self) -> Vec<ChecklistState> {
        self.items
            .iter()
            .map(|(key, travelers)| ChecklistState {
                item_key: key.clone(),
                checked_by: travelers.values().cloned().collect(),
            })
            .collect()
    }

    /// The wire row for one key as it should be persisted right now.
    ///
    /// An unchecked-by-everyone key yields an empty list; persisting that
    /// is how the last uncheck reaches the remote store.
    pub fn state_for(&self, item_key: &str) -> ChecklistState {
        ChecklistState {
            item_key: item_key.to_string(),
            checked_by: self
                .items
                .get(item_key)
                .map(|t| t.values().cloned().collect())
                .unwrap_or_default(),
        }
    }

    /// Checks or unchecks an item for one user.
    ///
    /// Present means remove, absent means insert. Toggling twice restores
    /// the original membership, so a retried toggle is safe. Concurrent
    /// toggles by the same user from another device are not merged; the
    /// last local state wins until the next remote refresh.
    ///
    /// # Returns
    ///
    /// The new checked state for that user.
    pub fn toggle(&mut self, item_key: &str, traveler: Traveler) -> bool {
        let entry = self.items.entry(item_key.to_string()).or_default();
        let checked = if entry.remove(&traveler.username).is_none() {
            entry.insert(traveler.username.clone(), traveler);
            true
        } else {
            false
        };
        if self.items.get(item_key).is_some_and(|e| e.is_empty()) {
            self.items.remove(item_key);
        }
        checked
    }

    /// Membership test for one user.
    pub fn is_checked_by_user(&self, item_key: &str, username: &str) -> bool {
        self.items
            .get(item_key)
            .is_some_and(|t| t.contains_key(username))
    }

    /// True if at least one user has the item checked.
    pub fn is_checked_by_anyone(&self, item_key: &str) -> bool {
        self.items.get(item_key).is_some_and(|t| !t.is_empty())
    }

    /// True if every known user has the item checked (the completion
    /// celebration state). False when nobody has it checked.
    pub fn is_checked_by_all(&self, item_key: &str, known_users: &[&str]) -> bool {
        let Some(travelers) = self.items.get(item_key) else {
            return false;
        };
        !travelers.is_empty() && known_users.iter().all(|u| travelers.contains_key(*u))
    }

    /// The users who have the item checked, in username order.
    pub fn checked_travelers(&self, item_key: &str) -> Vec<&Traveler> {
        self.items
            .get(item_key)
            .map(|t| t.values().collect())
            .unwrap_or_default()
    }
}
