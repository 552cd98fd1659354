pub mod cache;
pub mod checklist;
pub mod config;
pub mod error;
pub mod schedule;
pub mod settings;
pub mod trip;

// Re-export common error type
pub use error::WayfarerError;
