use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One entry of a trip's day program, e.g. `{ "10:30", "Boat tour" }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleItem {
    /// Free-form time label ("10:30", "afternoon"); optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// What happens
    pub activity: String,
}

/// A trip record as stored in the remote trip store.
///
/// The `date` field is the trip's only link to a day number: membership in
/// a day is always recomputed as `date_to_day(trip_start_date, date)`.
/// Reordering days rewrites `date` and nothing else.
///
/// `description` and `image_url` are JSON-in-string columns carried exactly
/// as the store returns them; use [`Self::schedule_items`] and
/// [`Self::image_urls`] instead of touching them directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Store-generated identifier
    pub id: String,
    pub title: String,
    /// Calendar date (ISO `YYYY-MM-DD`) linking the trip to a day
    pub date: NaiveDate,
    pub lat: f64,
    pub lng: f64,
    /// Human-readable place name
    pub location: String,
    /// JSON-serialized list of [`ScheduleItem`]s
    #[serde(default)]
    pub description: String,
    /// JSON-serialized list of image URLs
    #[serde(default)]
    pub image_url: String,
}

impl Trip {
    /// Decodes the day program from the `description` column.
    ///
    /// Tolerant: a malformed or empty column yields an empty list rather
    /// than an error, because these columns are also written by older
    /// clients.
    pub fn schedule_items(&self) -> Vec<ScheduleItem> {
        serde_json::from_str(&self.description).unwrap_or_default()
    }

    /// Encodes the day program into the `description` column.
    pub fn set_schedule_items(&mut self, items: &[ScheduleItem]) -> Result<()> {
        self.description = serde_json::to_string(items)?;
        Ok(())
    }

    /// Decodes the image URL list from the `image_url` column. Tolerant
    /// like [`Self::schedule_items`].
    pub fn image_urls(&self) -> Vec<String> {
        serde_json::from_str(&self.image_url).unwrap_or_default()
    }

    /// Encodes the image URL list into the `image_url` column.
    pub fn set_image_urls(&mut self, urls: &[String]) -> Result<()> {
        self.image_url = serde_json::to_string(urls)?;
        Ok(())
    }
}

/// Fields for creating a new trip; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDraft {
    pub title: String,
    pub date: NaiveDate,
    pub lat: f64,
    pub lng: f64,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

/// A partial update of a trip; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl TripPatch {
    /// A patch that only moves the trip to another date.
    ///
    /// This is the reorder primitive. Applying the same date twice is a
    /// no-op on the row, which is what makes retries after a partial
    /// reorder failure safe.
    pub fn date_only(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Applies the patch to a trip in place.
    pub fn apply(&self, trip: &mut Trip) {
        if let Some(title) = &self.title {
            trip.title = title.clone();
        }
        if let Some(date) = self.date {
            trip.date = date;
        }
        if let Some(lat) = self.lat {
            trip.lat = lat;
        }
        if let Some(lng) = self.lng {
            trip.lng = lng;
        }
        if let Some(location) = &self.location {
            trip.location = location.clone();
        }
        if let Some(description) = &self.description {
            trip.description = description.clone();
        }
        if let Some(image_url) = &self.image_url {
            trip.image_url = image_url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> Trip {
        Trip {
            id: "t-1".to_string(),
            title: "Sagrada Familia".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            lat: 41.4036,
            lng: 2.1744,
            location: "Barcelona".to_string(),
            description: String::new(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_schedule_items_round_trip() {
        let mut trip = trip();
        let items = vec![
            ScheduleItem {
                time: Some("09:00".to_string()),
                activity: "Skip-the-line entry".to_string(),
            },
            ScheduleItem {
                time: None,
                activity: "Towers".to_string(),
            },
        ];

        trip.set_schedule_items(&items).unwrap();

        assert_eq!(trip.schedule_items(), items);
    }

    #[test]
    fn test_malformed_columns_decode_to_empty() {
        let mut trip = trip();
        trip.description = "not json".to_string();
        trip.image_url = "{broken".to_string();

        assert!(trip.schedule_items().is_empty());
        assert!(trip.image_urls().is_empty());
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let json = serde_json::to_value(trip()).unwrap();
        assert_eq!(json["date"], "2024-04-02");
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut trip = trip();
        let patch = TripPatch {
            title: Some("Sagrada Familia (morning)".to_string()),
            ..TripPatch::default()
        };

        patch.apply(&mut trip);

        assert_eq!(trip.title, "Sagrada Familia (morning)");
        assert_eq!(trip.location, "Barcelona");
        assert_eq!(trip.date, NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
    }

    #[test]
    fn test_date_only_patch_moves_the_trip() {
        let mut trip = trip();
        let target = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap();

        TripPatch::date_only(target).apply(&mut trip);
        assert_eq!(trip.date, target);

        // Idempotent: re-applying the same date changes nothing further
        TripPatch::date_only(target).apply(&mut trip);
        assert_eq!(trip.date, target);
    }
}
