//! Shared travel-notice checklist.
//!
//! # Module Structure
//!
//! - `model`: `Traveler`, `ChecklistState` wire rows, `notice_key`
//! - `merger`: `ChecklistMerger`, the per-key multi-user check state
//!
//! # Usage
//!
//! ```ignore
//! use wayfarer_core::checklist::{notice_key, ChecklistMerger, ChecklistState, Traveler};
//! ```

mod merger;
mod model;

// Re-export public API
pub use merger::ChecklistMerger;
pub use model::{ChecklistState, Traveler, notice_key};
