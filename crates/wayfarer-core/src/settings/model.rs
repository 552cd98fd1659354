use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A place saved for "maybe later", not yet scheduled on any day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Unique identifier
    pub id: String,
    pub title: String,
    /// Human-readable place name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-form note ("only open on weekends")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Username of whoever added it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl WishlistItem {
    /// Creates a wishlist item with a fresh id and timestamp.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            location: None,
            note: None,
            image_url: None,
            added_by: None,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_added_by(mut self, username: impl Into<String>) -> Self {
        self.added_by = Some(username.into());
        self
    }
}
