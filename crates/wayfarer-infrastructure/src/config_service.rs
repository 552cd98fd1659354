//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the planner configuration
//! from the configuration file (~/.config/wayfarer/config.toml).

use crate::paths::WayfarerPaths;
use crate::storage::AtomicFile;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use wayfarer_core::config::WayfarerConfig;

/// Configuration service that loads and caches the planner configuration.
///
/// This implementation reads the configuration from config.toml
/// and caches it to avoid repeated file I/O operations.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<WayfarerConfig>>>,
    /// Overrides the default config file location when set.
    path_override: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a new ConfigService.
    ///
    /// The configuration is loaded lazily on first access to avoid blocking
    /// during initialization.
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path_override: None,
        }
    }

    /// Creates a ConfigService that reads from the given file instead of
    /// the platform config directory.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path_override: Some(path),
        }
    }

    /// Gets the planner configuration, loading from file if not cached.
    ///
    /// Falls back to defaults when the file cannot be read, so callers
    /// always receive a usable configuration.
    pub fn get_config(&self) -> WayfarerConfig {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        // Load from file
        let loaded = self.load_config().unwrap_or_else(|e| {
            tracing::warn!(
                "[ConfigService] Failed to load config, using defaults: {}",
                e
            );
            WayfarerConfig::default()
        });

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    /// Loads WayfarerConfig from the config file, writing defaults when
    /// the file does not exist yet.
    fn load_config(&self) -> Result<WayfarerConfig, String> {
        let config_path = match &self.path_override {
            Some(path) => path.clone(),
            None => WayfarerPaths::config_file().map_err(|e| e.to_string())?,
        };

        let file: AtomicFile<WayfarerConfig> = AtomicFile::toml(config_path);
        match file.load().map_err(|e| e.to_string())? {
            Some(config) => Ok(config),
            None => {
                let default_config = WayfarerConfig::default();
                file.save(&default_config)
                    .map_err(|e| format!("Failed to save default config: {}", e))?;
                Ok(default_config)
            }
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_config_writes_defaults_on_first_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let service = ConfigService::with_path(path.clone());

        let config = service.get_config();

        assert_eq!(config, WayfarerConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_get_config_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_days = 10\n").unwrap();

        let service = ConfigService::with_path(path);
        let config = service.get_config();

        assert_eq!(config.max_days, 10);
        // Unspecified fields fall back to defaults
        assert_eq!(config.admin_max_days, 14);
    }

    #[test]
    fn test_get_config_caches_until_invalidated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_days = 3\n").unwrap();

        let service = ConfigService::with_path(path.clone());
        assert_eq!(service.get_config().max_days, 3);

        std::fs::write(&path, "max_days = 5\n").unwrap();
        // Still served from cache
        assert_eq!(service.get_config().max_days, 3);

        service.invalidate_cache();
        assert_eq!(service.get_config().max_days, 5);
    }

    #[test]
    fn test_get_config_survives_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        let service = ConfigService::with_path(path);
        assert_eq!(service.get_config(), WayfarerConfig::default());
    }
}
