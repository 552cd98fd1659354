//! Planner configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime configuration for the planner core.
///
/// Day limits are deliberately configuration rather than constants: the
/// user-facing flow caps a plan at 7 days while the admin flow allows 14.
/// Every field has a serde default so a partial `config.toml` works.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WayfarerConfig {
    /// Maximum day count in the user-facing flow (default: 7).
    #[serde(default = "default_max_days")]
    pub max_days: u32,
    /// Maximum day count in the admin flow (default: 14).
    #[serde(default = "default_admin_max_days")]
    pub admin_max_days: u32,
    /// Background refresh interval for remote resources, in seconds
    /// (default: 30).
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    /// Age under which a cached value is considered fresh enough to skip a
    /// redundant remote refresh, in seconds (default: 300).
    #[serde(default = "default_cache_max_age_secs")]
    pub cache_max_age_secs: u64,
}

fn default_max_days() -> u32 {
    7
}

fn default_admin_max_days() -> u32 {
    14
}

fn default_refresh_interval_secs() -> u64 {
    30
}

fn default_cache_max_age_secs() -> u64 {
    300
}

impl Default for WayfarerConfig {
    fn default() -> Self {
        Self {
            max_days: default_max_days(),
            admin_max_days: default_admin_max_days(),
            refresh_interval_secs: default_refresh_interval_secs(),
            cache_max_age_secs: default_cache_max_age_secs(),
        }
    }
}

impl WayfarerConfig {
    /// Returns the effective day limit for the given flow.
    pub fn day_limit(&self, admin: bool) -> u32 {
        if admin { self.admin_max_days } else { self.max_days }
    }

    /// Background refresh interval as a `Duration`.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Cache freshness window as a `Duration`.
    pub fn cache_max_age(&self) -> Duration {
        Duration::from_secs(self.cache_max_age_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WayfarerConfig::default();
        assert_eq!(config.max_days, 7);
        assert_eq!(config.admin_max_days, 14);
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.cache_max_age_secs, 300);
    }

    #[test]
    fn test_day_limit_per_flow() {
        let config = WayfarerConfig::default();
        assert_eq!(config.day_limit(false), 7);
        assert_eq!(config.day_limit(true), 14);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: WayfarerConfig = toml::from_str("max_days = 10").unwrap();
        assert_eq!(config.max_days, 10);
        assert_eq!(config.admin_max_days, 14);
        assert_eq!(config.refresh_interval_secs, 30);
    }
}
