//! Data models for Tenflow onboarding and training plans.
//!
//! This module contains the data structures shared across the crate:
//!
//! - `FormSnapshot`, `GoalSelection`, `FitnessProfile`: the onboarding
//!   answers that feed progression derivation and cache-key hashing
//! - `TrainingProgression`: the derived plan summary
//! - `RaceOption`: goal-selection catalog entries

pub mod onboarding;
pub mod progression;

pub use onboarding::{FitnessProfile, FormSnapshot, GoalKind, GoalSelection, RaceOption};
pub use progression::TrainingProgression;
