use serde::{Deserialize, Serialize};

/// A user as shown on the shared checklist (avatar row under each item).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Traveler {
    /// Stable identifier; checklist membership is deduplicated on this
    pub username: String,
    /// Name shown in the UI
    pub display_name: String,
    /// Optional avatar image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Traveler {
    pub fn new(username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            avatar_url: None,
        }
    }
}

/// One checklist row as exchanged with the remote store: the full list of
/// users who currently have the item checked.
///
/// Writes are whole-row: a toggle persists the entire updated list for its
/// key, never a delta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistState {
    /// Stable key of the notice item, see [`notice_key`]
    pub item_key: String,
    /// Users who have the item checked, deduplicated by username
    pub checked_by: Vec<Traveler>,
}

/// Derives the stable checklist key of a travel-notice item.
///
/// Notice items have no ids of their own; the icon and text together
/// identify one. Whitespace is trimmed so cosmetic edits of the notice
/// source do not orphan existing check states.
pub fn notice_key(icon: &str, text: &str) -> String {
    format!("{}:{}", icon.trim(), text.trim())
}
