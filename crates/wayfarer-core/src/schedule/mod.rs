//! Day-indexed itinerary scheduling.
//!
//! This module contains the calendar/day-number mapping and the day plan
//! aggregate with its invariant-preserving operations.
//!
//! # Module Structure
//!
//! - `date_mapper`: pure day-number / calendar-date conversion
//! - `model`: `DayPlan` and `DaySchedule` (the settings payload)
//! - `pending`: `PendingDayGuard` for the add-trip form flow
//!
//! # Usage
//!
//! ```ignore
//! use wayfarer_core::schedule::{date_mapper, DayPlan, DaySchedule, PendingDayGuard};
//! ```

pub mod date_mapper;
mod model;
mod pending;

// Re-export public API
pub use model::{DayPlan, DaySchedule};
pub use pending::PendingDayGuard;
