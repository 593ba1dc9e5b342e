//! Session persistence for the onboarding form.
//!
//! The wizard writes partial answers as the user moves between steps;
//! this keeps them across restarts under their own storage key, on the
//! same substrate as the progression cache. Storage faults are logged
//! and swallowed - losing form persistence never breaks the wizard.

use tracing::warn;

use crate::models::FormSnapshot;
use crate::storage::Storage;

/// Storage key holding the raw onboarding answers
pub const FORM_STORAGE_KEY: &str = "onboarding_form_data";

pub struct PersistedForm<S> {
    storage: S,
    data: FormSnapshot,
}

impl<S: Storage> PersistedForm<S> {
    /// Load persisted answers, starting empty if absent or corrupt.
    pub fn new(storage: S) -> Self {
        let data = match storage.get_item(FORM_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to parse persisted onboarding form, starting empty");
                FormSnapshot::default()
            }),
            Ok(None) => FormSnapshot::default(),
            Err(e) => {
                warn!(error = %e, "Failed to load persisted onboarding form, starting empty");
                FormSnapshot::default()
            }
        };
        Self { storage, data }
    }

    pub fn data(&self) -> &FormSnapshot {
        &self.data
    }

    /// Merge a partial update over the current answers and persist.
    pub fn update(&mut self, partial: FormSnapshot) {
        self.data.merge(partial);
        self.persist();
    }

    /// Reset the form and remove the persisted blob.
    pub fn clear(&mut self) {
        self.data = FormSnapshot::default();
        if let Err(e) = self.storage.remove_item(FORM_STORAGE_KEY) {
            warn!(error = %e, "Failed to clear persisted onboarding form");
        }
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.data) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to serialize onboarding form");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(FORM_STORAGE_KEY, &raw) {
            warn!(error = %e, "Failed to persist onboarding form");
        }
    }
}
