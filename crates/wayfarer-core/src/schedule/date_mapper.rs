//! Pure day-number / calendar-date conversion.
//!
//! Day numbers are 1-based: day 1 falls on the trip start date itself. For
//! every day that fits the calendar the two functions are exact inverses,
//! which the rest of the planner relies on because a trip's date is its
//! only link back to a day number.

use chrono::{Duration, NaiveDate};

/// Resolves the calendar date of a day number against a trip start date.
///
/// `day_to_date(start, n)` is `start + (n - 1)` days. Pure arithmetic; no
/// timezone is involved because the planner works in calendar dates only.
/// Total over `u32`: a day number past the end of the supported calendar
/// clamps to [`NaiveDate::MAX`] instead of panicking.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wayfarer_core::schedule::date_mapper::day_to_date;
///
/// let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// assert_eq!(day_to_date(start, 3), NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());
/// ```
pub fn day_to_date(trip_start_date: NaiveDate, day_number: u32) -> NaiveDate {
    trip_start_date
        .checked_add_signed(Duration::days(i64::from(day_number) - 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Resolves which day number a calendar date falls on.
///
/// Inverse of [`day_to_date`]: `(date - start) in days + 1`. The result can
/// be zero or negative (date before the trip) or greater than the plan's
/// day count (date after it); callers treat anything outside
/// `[1, total_days]` as "no matching day" and filter it out.
pub fn date_to_day(trip_start_date: NaiveDate, date: NaiveDate) -> i64 {
    (date - trip_start_date).num_days() + 1
}
