//! Expiring cache for derived training-progression results.
//!
//! This module provides the `ProgressionCache` for memoizing derived
//! results keyed by a stable hash of the onboarding answers. Entries
//! expire 24 hours after insertion and the whole store is persisted as
//! one JSON blob in the injected storage backend.
//!
//! Pieces:
//! - `key`: canonical JSON encoding and SHA-256 cache-key derivation
//! - `manager`: the store itself - get/set/clear/stats plus load-time
//!   pruning of expired entries

pub mod key;
pub mod manager;

pub use key::{cache_key, canonical_json, CacheKey};
pub use manager::{CacheConfig, CacheEntry, CacheStats, ProgressionCache, CACHE_STORAGE_KEY};
