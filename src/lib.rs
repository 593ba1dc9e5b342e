//! Tenflow core - onboarding models, progression cache, providers.
//!
//! This crate is the client-side core of the Tenflow fitness onboarding
//! product. It derives a training progression from a user's onboarding
//! answers and memoizes the result in an expiring, locally persisted
//! cache so repeated visits to the plan summary never recompute or
//! refetch needlessly.
//!
//! The pieces:
//!
//! - [`models`]: `FormSnapshot` (the hashed subset of onboarding
//!   answers) and `TrainingProgression` (the derived result)
//! - [`cache`]: stable SHA-256 cache keys over a canonical JSON
//!   encoding, plus the 24-hour expiring store
//! - [`storage`]: injected key-value backend (file-based or in-memory)
//! - [`progression`]: local derivation and fallback values
//! - [`provider`]: local or HTTP sources for derived results
//! - [`service`]: the check-cache / fetch / store sequencing consumers
//!   actually call
//! - [`form`]: session persistence of the raw onboarding answers
//!
//! Caching is strictly best-effort: storage faults are logged warnings
//! and the worst case is a redundant recomputation, never a crash.

pub mod cache;
pub mod form;
pub mod maintenance;
pub mod models;
pub mod progression;
pub mod provider;
pub mod service;
pub mod storage;

pub use cache::{cache_key, CacheConfig, CacheKey, CacheStats, ProgressionCache};
pub use form::PersistedForm;
pub use models::{
    FitnessProfile, FormSnapshot, GoalKind, GoalSelection, RaceOption, TrainingProgression,
};
pub use provider::{HttpProvider, LocalProvider, ProgressionProvider, ProviderError};
pub use service::ProgressionService;
pub use storage::{FileStorage, MemoryStorage, Storage};
