//! Maintenance helpers over the well-known storage keys.
//!
//! Used from settings screens and debugging consoles; these operate on
//! the raw blobs so they work even when the typed wrappers cannot
//! parse what is stored.

use serde_json::Value;
use tracing::{info, warn};

use crate::cache::CACHE_STORAGE_KEY;
use crate::form::FORM_STORAGE_KEY;
use crate::storage::Storage;

/// Remove every blob this crate owns: the progression cache and the
/// persisted onboarding form. Useful when user data becomes
/// inconsistent during development.
pub fn clear_all_caches<S: Storage>(storage: &mut S) {
    for key in [CACHE_STORAGE_KEY, FORM_STORAGE_KEY] {
        if let Err(e) = storage.remove_item(key) {
            warn!(key, error = %e, "Failed to clear cache");
        }
    }
    info!("All caches cleared");
}

/// Size and entry counts for the persisted blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheInfo {
    pub progression_entries: usize,
    pub progression_bytes: usize,
    pub form_bytes: usize,
    pub has_form_data: bool,
}

/// Inspect the persisted blobs for debugging. Unreadable or corrupt
/// blobs report zero entries rather than failing.
pub fn cache_info<S: Storage>(storage: &S) -> CacheInfo {
    let mut info = CacheInfo::default();

    match storage.get_item(CACHE_STORAGE_KEY) {
        Ok(Some(raw)) => {
            info.progression_bytes = raw.len();
            info.progression_entries = serde_json::from_str::<Value>(&raw)
                .ok()
                .and_then(|v| v.as_object().map(|m| m.len()))
                .unwrap_or(0);
        }
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Failed to read progression cache info"),
    }

    match storage.get_item(FORM_STORAGE_KEY) {
        Ok(Some(raw)) => {
            info.form_bytes = raw.len();
            info.has_form_data = true;
        }
        Ok(None) => {}
        Err(e) => warn!(error = %e, "Failed to read onboarding form info"),
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_cache_info_counts_entries() {
        let mut storage = MemoryStorage::new();
        storage
            .set_item(CACHE_STORAGE_KEY, r#"{"a":{"x":1},"b":{"x":2}}"#)
            .unwrap();
        storage.set_item(FORM_STORAGE_KEY, "{}").unwrap();

        let info = cache_info(&storage);
        assert_eq!(info.progression_entries, 2);
        assert!(info.progression_bytes > 0);
        assert!(info.has_form_data);
    }

    #[test]
    fn test_cache_info_on_empty_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(cache_info(&storage), CacheInfo::default());
    }

    #[test]
    fn test_clear_all_caches_removes_both_keys() {
        let mut storage = MemoryStorage::new();
        storage.set_item(CACHE_STORAGE_KEY, "{}").unwrap();
        storage.set_item(FORM_STORAGE_KEY, "{}").unwrap();

        clear_all_caches(&mut storage);
        assert_eq!(storage.get_item(CACHE_STORAGE_KEY).unwrap(), None);
        assert_eq!(storage.get_item(FORM_STORAGE_KEY).unwrap(), None);
    }
}
