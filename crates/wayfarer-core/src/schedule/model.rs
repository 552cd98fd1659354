use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date_mapper;
use crate::error::{Result, WayfarerError};

/// A single day tab in the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// 1-based position of the day within the plan
    pub day_number: u32,
    /// Display theme, e.g. "Day 3" or "Old town & markets"
    pub theme: String,
    /// Optional header image for the day tab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl DaySchedule {
    fn numbered(day_number: u32) -> Self {
        Self {
            day_number,
            theme: format!("Day {}", day_number),
            image_url: None,
        }
    }
}

/// The day-indexed plan: start date, day count, and one schedule per day.
///
/// Invariant: `day_schedules` contains exactly one entry for every day
/// number in `[1, total_days]`, sorted by day number, with no gaps or
/// duplicates and nothing past the tail. All mutation goes through methods
/// that preserve this.
///
/// Trips are never stored here. A trip belongs to a day purely because its
/// date matches that day's calendar date, so removing a day hides its trips
/// rather than deleting them, and re-adding the day re-exposes them.
///
/// This struct is also the exact settings payload persisted to the remote
/// store and the local cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Calendar date anchoring day 1
    pub trip_start_date: NaiveDate,
    /// Number of days currently in the plan
    pub total_days: u32,
    /// One schedule per day, sorted by day number
    pub day_schedules: Vec<DaySchedule>,
}

impl DayPlan {
    /// Creates a one-day plan anchored on the given start date.
    pub fn starting(trip_start_date: NaiveDate) -> Self {
        Self {
            trip_start_date,
            total_days: 1,
            day_schedules: vec![DaySchedule::numbered(1)],
        }
    }

    /// Calendar date of the given day number under this plan's anchor.
    pub fn day_to_date(&self, day_number: u32) -> NaiveDate {
        date_mapper::day_to_date(self.trip_start_date, day_number)
    }

    /// Day number the given date falls on, if it is within the plan.
    ///
    /// Returns `None` for dates before the start or past the last day;
    /// trips on such dates are currently hidden from the day tabs.
    pub fn day_containing(&self, date: NaiveDate) -> Option<u32> {
        let day = date_mapper::date_to_day(self.trip_start_date, date);
        if day >= 1 && day <= i64::from(self.total_days) {
            Some(day as u32)
        } else {
            None
        }
    }

    /// Returns the schedule for a day number, if the day exists.
    pub fn schedule(&self, day_number: u32) -> Option<&DaySchedule> {
        self.day_schedules
            .iter()
            .find(|s| s.day_number == day_number)
    }

    /// Appends one day to the plan.
    ///
    /// The new day gets the default theme `"Day {n}"`. `limit` comes from
    /// configuration (7 in the user-facing flow, 14 for admins).
    ///
    /// # Returns
    ///
    /// The new day number.
    ///
    /// # Errors
    ///
    /// `LimitExceeded` if the plan already has `limit` days; state is left
    /// unchanged.
    pub fn add_day(&mut self, limit: u32) -> Result<u32> {
        if self.total_days >= limit {
            return Err(WayfarerError::limit_exceeded(limit));
        }
        self.total_days += 1;
        self.day_schedules.push(DaySchedule::numbered(self.total_days));
        Ok(self.total_days)
    }

    /// Removes the last day of the plan.
    ///
    /// Only the tail day may ever be removed, so existing days are never
    /// renumbered. Trips dated on the removed day keep their dates and are
    /// simply hidden until a day at that date exists again.
    ///
    /// # Errors
    ///
    /// `InvalidOperation` if this is the only remaining day; state is left
    /// unchanged.
    pub fn remove_last_day(&mut self) -> Result<()> {
        if self.total_days <= 1 {
            return Err(WayfarerError::invalid_operation(
                "the plan must keep at least one day",
            ));
        }
        let removed = self.total_days;
        self.total_days -= 1;
        self.day_schedules.retain(|s| s.day_number != removed);
        Ok(())
    }

    /// Sets the display theme of a day.
    ///
    /// Upserts: if the schedule entry is missing despite the day number
    /// being in range (possible only with externally produced data), a new
    /// entry is inserted at its sorted position.
    ///
    /// # Errors
    ///
    /// `NotFound` if `day_number` is 0 or beyond the last day.
    pub fn rename_day_theme(&mut self, day_number: u32, theme: impl Into<String>) -> Result<()> {
        self.ensure_in_range(day_number)?;
        let theme = theme.into();
        match self.position_of(day_number) {
            Ok(idx) => self.day_schedules[idx].theme = theme,
            Err(idx) => self.day_schedules.insert(
                idx,
                DaySchedule {
                    day_number,
                    theme,
                    image_url: None,
                },
            ),
        }
        Ok(())
    }

    /// Sets the header image of a day. Upserts like
    /// [`Self::rename_day_theme`].
    ///
    /// # Errors
    ///
    /// `NotFound` if `day_number` is 0 or beyond the last day.
    pub fn set_day_image(&mut self, day_number: u32, url: impl Into<String>) -> Result<()> {
        self.ensure_in_range(day_number)?;
        let url = url.into();
        match self.position_of(day_number) {
            Ok(idx) => self.day_schedules[idx].image_url = Some(url),
            Err(idx) => self.day_schedules.insert(
                idx,
                DaySchedule {
                    day_number,
                    theme: format!("Day {}", day_number),
                    image_url: Some(url),
                },
            ),
        }
        Ok(())
    }

    /// Replaces the trip start date.
    ///
    /// Shifting the anchor reinterprets the whole calendar: every trip's
    /// day-number membership changes implicitly because dates are recomputed
    /// from the new anchor, while the trip rows themselves stay untouched.
    pub fn set_trip_start_date(&mut self, new_start: NaiveDate) {
        self.trip_start_date = new_start;
    }

    /// Discards every day from `day_number` onward.
    ///
    /// Rollback primitive for the pending-day flow: recomputes the day count
    /// from the given number instead of restoring a snapshot, so it stays
    /// correct even if further days were added since. Truncate-only: if the
    /// plan has already shrunk below `day_number` there is nothing left to
    /// discard and the plan is unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidOperation` if `day_number <= 1` (day 1 can never be
    /// discarded).
    pub fn discard_from(&mut self, day_number: u32) -> Result<()> {
        if day_number <= 1 {
            return Err(WayfarerError::invalid_operation(
                "cannot discard down to an empty plan",
            ));
        }
        self.total_days = self.total_days.min(day_number - 1);
        self.day_schedules.retain(|s| s.day_number < day_number);
        Ok(())
    }

    fn ensure_in_range(&self, day_number: u32) -> Result<()> {
        if day_number == 0 || day_number > self.total_days {
            return Err(WayfarerError::not_found("day", day_number.to_string()));
        }
        Ok(())
    }

    fn position_of(&self, day_number: u32) -> std::result::Result<usize, usize> {
        self.day_schedules
            .binary_search_by_key(&day_number, |s| s.day_number)
    }
}
