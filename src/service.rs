//! Consumer-side sequencing: check cache, fetch on miss, store result.
//!
//! The cache itself never initiates computation and the provider never
//! touches storage; `ProgressionService` owns both and sequences them
//! the one correct way. Provider failures degrade to the fallback
//! progression so a consuming view always has something to render.

use tracing::{debug, warn};

use crate::cache::ProgressionCache;
use crate::models::{FormSnapshot, TrainingProgression};
use crate::progression;
use crate::provider::ProgressionProvider;
use crate::storage::Storage;

pub struct ProgressionService<P, S> {
    cache: ProgressionCache<TrainingProgression, S>,
    provider: P,
}

impl<P, S> ProgressionService<P, S>
where
    P: ProgressionProvider,
    S: Storage,
{
    pub fn new(cache: ProgressionCache<TrainingProgression, S>, provider: P) -> Self {
        Self { cache, provider }
    }

    /// Progression for a snapshot, from cache when possible.
    ///
    /// Returns `None` only for incomplete snapshots (no goal or no
    /// fitness answers yet); once both steps are answered a value is
    /// always produced, falling back to defaults on provider failure.
    pub async fn progression_for(&mut self, snapshot: &FormSnapshot) -> Option<TrainingProgression> {
        if !snapshot.is_complete() {
            return None;
        }

        if let Some(cached) = self.cache.get(snapshot) {
            return Some(cached);
        }

        debug!("No cached progression, fetching from provider");
        Some(self.fetch_and_store(snapshot).await)
    }

    /// Fetch fresh data, bypassing the cache read. The result is still
    /// stored, replacing whatever was cached for this snapshot.
    pub async fn refetch(&mut self, snapshot: &FormSnapshot) -> Option<TrainingProgression> {
        if !snapshot.is_complete() {
            return None;
        }
        Some(self.fetch_and_store(snapshot).await)
    }

    async fn fetch_and_store(&mut self, snapshot: &FormSnapshot) -> TrainingProgression {
        match self.provider.fetch(snapshot).await {
            Ok(progression) => {
                self.cache.set(snapshot, progression.clone());
                progression
            }
            Err(e) => {
                // Fallback values are not cached: the next call should
                // retry the provider instead of reusing a guess
                warn!(error = %e, "Progression fetch failed, using fallback values");
                progression::fallback()
            }
        }
    }

    pub fn cache(&self) -> &ProgressionCache<TrainingProgression, S> {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
