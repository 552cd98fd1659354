pub mod cache_store;
pub mod config_service;
pub mod in_memory;
pub mod paths;
pub mod storage;

pub use crate::cache_store::{FileCacheStore, MemoryCacheStore};
pub use crate::config_service::ConfigService;
pub use crate::in_memory::{InMemorySettingsStore, InMemoryTripStore};
pub use crate::paths::WayfarerPaths;
