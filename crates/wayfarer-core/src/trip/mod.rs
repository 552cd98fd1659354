//! Trip domain module.
//!
//! # Module Structure
//!
//! - `model`: `Trip`, `TripDraft`, `TripPatch`, `ScheduleItem`
//! - `repository`: the remote trip-store contract

mod model;
pub mod repository;

// Re-export public API
pub use model::{ScheduleItem, Trip, TripDraft, TripPatch};
pub use repository::TripStore;
