use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cache::key::{cache_key, CacheKey};
use crate::models::FormSnapshot;
use crate::storage::Storage;

/// Storage key holding the serialized cache blob
pub const CACHE_STORAGE_KEY: &str = "training_progression_cache";

/// Consider cached progressions stale after 24 hours.
/// Onboarding answers rarely change mid-plan; a day of reuse avoids
/// redundant derivations without serving ancient results.
const CACHE_EXPIRY_HOURS: i64 = 24;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub key: CacheKey,
    pub value: T,
    pub created_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    fn new(key: CacheKey, value: T) -> Self {
        Self {
            key,
            value,
            created_at: Utc::now(),
        }
    }

    fn is_valid(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at < ttl
    }
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Entry time-to-live
    pub ttl: Duration,
    /// Re-persist the store right after load-time pruning. Off by
    /// default: a cold start that changed nothing should not write,
    /// and dropped entries disappear on the next natural save anyway.
    pub compact_on_load: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::hours(CACHE_EXPIRY_HOURS),
            compact_on_load: false,
        }
    }
}

/// Read-only classification of the in-memory store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub total: usize,
    pub valid: usize,
    pub expired: usize,
}

/// Expiring cache of derived results, keyed by snapshot hash.
///
/// The whole store lives as one JSON blob under `CACHE_STORAGE_KEY`.
/// It is loaded and pruned once at construction; every mutation
/// re-persists the full store. Storage faults are logged and swallowed,
/// leaving the in-memory store authoritative for the session - a cache
/// fault must never take down a consuming view.
///
/// Single-writer only: two sessions sharing one backend race with
/// last-write-wins semantics on the persisted blob.
pub struct ProgressionCache<T, S> {
    storage: S,
    entries: HashMap<CacheKey, CacheEntry<T>>,
    config: CacheConfig,
}

impl<T, S> ProgressionCache<T, S>
where
    T: Clone + Serialize + DeserializeOwned,
    S: Storage,
{
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, CacheConfig::default())
    }

    pub fn with_config(storage: S, config: CacheConfig) -> Self {
        let loaded = Self::load(&storage);
        let now = Utc::now();
        let before = loaded.len();

        let entries: HashMap<CacheKey, CacheEntry<T>> = loaded
            .into_iter()
            .filter(|(_, entry)| entry.is_valid(now, config.ttl))
            .collect();

        let pruned = before - entries.len();
        if pruned > 0 {
            debug!(pruned, kept = entries.len(), "Pruned expired progression cache entries");
        }

        let mut cache = Self {
            storage,
            entries,
            config,
        };
        if pruned > 0 && cache.config.compact_on_load {
            cache.persist();
        }
        cache
    }

    /// Deserialize the persisted blob. Absent, unreadable, or corrupt
    /// storage all start an empty cache; none of them are errors.
    fn load(storage: &S) -> HashMap<CacheKey, CacheEntry<T>> {
        match storage.get_item(CACHE_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "Failed to parse progression cache, starting empty");
                    HashMap::new()
                }
            },
            Ok(None) => HashMap::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load progression cache, starting empty");
                HashMap::new()
            }
        }
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to serialize progression cache");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(CACHE_STORAGE_KEY, &raw) {
            warn!(error = %e, "Failed to save progression cache");
        }
    }

    /// Look up the cached value for a snapshot.
    ///
    /// An expired entry is a miss but is not evicted here; eviction is
    /// guaranteed only at the next load-time prune.
    pub fn get(&self, snapshot: &FormSnapshot) -> Option<T> {
        let key = cache_key(snapshot);
        let entry = self.entries.get(&key)?;
        if entry.is_valid(Utc::now(), self.config.ttl) {
            debug!(key = %key, "Progression cache hit");
            Some(entry.value.clone())
        } else {
            debug!(key = %key, "Progression cache entry expired");
            None
        }
    }

    /// Insert or overwrite the entry for a snapshot and persist the
    /// full store.
    pub fn set(&mut self, snapshot: &FormSnapshot, value: T) {
        let key = cache_key(snapshot);
        debug!(key = %key, "Caching progression");
        self.entries
            .insert(key.clone(), CacheEntry::new(key, value));
        self.persist();
    }

    /// Drop every entry and remove the persisted blob.
    pub fn clear(&mut self) {
        debug!("Clearing progression cache");
        self.entries.clear();
        if let Err(e) = self.storage.remove_item(CACHE_STORAGE_KEY) {
            warn!(error = %e, "Failed to remove persisted progression cache");
        }
    }

    /// Classify entries by the same TTL check `get` uses. No mutation,
    /// no pruning.
    pub fn stats(&self) -> CacheStats {
        let now = Utc::now();
        let total = self.entries.len();
        let valid = self
            .entries
            .values()
            .filter(|entry| entry.is_valid(now, self.config.ttl))
            .count();
        CacheStats {
            total,
            valid,
            expired: total - valid,
        }
    }

    /// Rewind an entry's creation time to simulate aging.
    #[cfg(test)]
    fn backdate(&mut self, snapshot: &FormSnapshot, age: Duration) {
        let key = cache_key(snapshot);
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.created_at = Utc::now() - age;
        }
    }
}
