//! Unified path management for Wayfarer's local files.
//!
//! All local state goes through these helpers so the config file and the
//! cache file land in the platform-appropriate directories on Linux, macOS
//! and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Wayfarer.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/wayfarer/          # Config directory
/// └── config.toml              # Planner configuration (day limits, intervals)
///
/// ~/.cache/wayfarer/           # Cache directory
/// └── cache.json               # Local key-value cache (shared across processes)
/// ```
pub struct WayfarerPaths;

impl WayfarerPaths {
    /// Returns the Wayfarer configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/wayfarer/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("wayfarer"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the Wayfarer cache directory.
    ///
    /// The local cache lives here rather than in the config directory: it
    /// is disposable state that can be wiped without losing anything the
    /// remote store still has.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to cache directory (e.g., `~/.cache/wayfarer/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn cache_dir() -> Result<PathBuf, PathError> {
        dirs::cache_dir()
            .map(|dir| dir.join("wayfarer"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the local cache file.
    pub fn cache_file() -> Result<PathBuf, PathError> {
        Ok(Self::cache_dir()?.join("cache.json"))
    }
}
