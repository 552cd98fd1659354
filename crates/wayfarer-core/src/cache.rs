//! Local cache contract and the cached-value envelope.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A key-value string store used as the local cache.
///
/// The cache survives process restarts and may be shared between processes.
/// Callers do their own JSON encoding. The surface is infallible: a missing
/// or unreadable key reads as `None`, and a full or unavailable store
/// silently drops writes (implementations log this at warn). The cache is
/// an optimization, never a store of record.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Reads the raw string value for a key.
    async fn get(&self, key: &str) -> Option<String>;

    /// Writes the raw string value for a key. May silently no-op.
    async fn set(&self, key: &str, value: &str);
}

/// A cached value together with the time it was fetched.
///
/// Entries are created on the first successful fetch, overwritten on every
/// successful refresh, and never actively expired. Staleness only matters
/// when deciding whether a refresh would be redundant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheEntry<T> {
    pub value: T,
    pub fetched_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Wraps a value fetched just now.
    pub fn fresh(value: T) -> Self {
        Self {
            value,
            fetched_at: Utc::now(),
        }
    }

    /// True if the entry is younger than `max_age`. A `max_age` beyond the
    /// signed range counts as unbounded rather than wrapping.
    pub fn is_fresh(&self, max_age: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        let max_secs = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);
        age.num_seconds() < max_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_entry_is_fresh() {
        let entry = CacheEntry::fresh(42u32);
        assert!(entry.is_fresh(Duration::from_secs(60)));
    }

    #[test]
    fn test_old_entry_is_stale() {
        let entry = CacheEntry {
            value: 42u32,
            fetched_at: Utc::now() - chrono::Duration::seconds(600),
        };
        assert!(!entry.is_fresh(Duration::from_secs(300)));
        assert!(entry.is_fresh(Duration::from_secs(3600)));
    }

    #[test]
    fn test_huge_max_age_still_counts_as_fresh() {
        let entry = CacheEntry::fresh(42u32);
        assert!(entry.is_fresh(Duration::from_secs(u64::MAX)));
    }

    #[test]
    fn test_envelope_serializes_value_and_timestamp() {
        let entry = CacheEntry::fresh(vec!["a".to_string()]);
        let json = serde_json::to_string(&entry).unwrap();
        let back: CacheEntry<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value, entry.value);
        assert_eq!(back.fetched_at, entry.fetched_at);
    }
}
