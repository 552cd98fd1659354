//! Application layer for Wayfarer.
//!
//! This crate provides use case implementations that coordinate between
//! the domain and infrastructure layers: the itinerary and checklist use
//! cases, and the cache-synced resources they are built on.

pub mod checklist_usecase;
pub mod itinerary;
pub mod sources;
pub mod sync;

pub use checklist_usecase::ChecklistUseCase;
pub use itinerary::ItineraryUseCase;
pub use sync::{CacheSyncedResource, RemoteSink, RemoteSource, SyncStatus};
