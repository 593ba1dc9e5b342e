//! Local derivation of a training progression from onboarding answers.
//!
//! Mirrors what the planning backend returns so the product works
//! before an account exists. The numbers are deliberately coarse:
//! duration keys off the goal distance, intensity off the self-reported
//! fitness level, and the load curve off current weekly hours.

use crate::models::{FormSnapshot, TrainingProgression};

/// Program length when the goal distance matches nothing specific
const DEFAULT_PROGRAM_WEEKS: u32 = 12;

/// Weekly hours assumed when the fitness step was skipped
const DEFAULT_WEEKLY_HOURS: u32 = 5;

/// Training days assumed when the fitness step was skipped
const DEFAULT_TRAINING_DAYS: u32 = 4;

/// Peak load relative to current weekly hours
const PEAK_HOURS_MULTIPLIER: f64 = 2.6;

/// Fraction of the program spent building toward peak load
const BUILD_PHASE_FRACTION: f64 = 0.6;

/// Derive a progression from whatever answers are present. Missing
/// answers fall back to recreational-runner defaults.
pub fn compute(snapshot: &FormSnapshot) -> TrainingProgression {
    let goal = snapshot.selected_goal.as_ref();
    let fitness = snapshot.fitness_data.as_ref();

    let mut program_duration = DEFAULT_PROGRAM_WEEKS;
    if let Some(goal) = goal {
        if goal.distance.contains("100") || goal.distance.contains("200") {
            program_duration = 40;
        } else if goal.distance.contains("50") {
            program_duration = 24;
        } else if goal.distance.to_lowercase().contains("marathon") {
            program_duration = 16;
        }
    }

    let intensity_level = match fitness.map(|f| f.fitness_level.as_str()) {
        Some("beginner") => "Easy",
        Some("recreational") => "Moderate",
        Some("competitive") => "High",
        Some("elite") => "Elite Intensity",
        _ => "Moderate",
    }
    .to_string();

    let current_weekly_hours = fitness
        .map(|f| f.weekly_hours)
        .filter(|&hours| hours > 0)
        .unwrap_or(DEFAULT_WEEKLY_HOURS);
    let peak_weekly_hours = (current_weekly_hours as f64 * PEAK_HOURS_MULTIPLIER).round() as u32;
    let training_days_per_week = fitness
        .map(|f| f.training_days)
        .filter(|&days| days > 0)
        .unwrap_or(DEFAULT_TRAINING_DAYS);

    let build_weeks = program_duration as f64 * BUILD_PHASE_FRACTION;
    let weekly_increase =
        (((peak_weekly_hours - current_weekly_hours) as f64 / build_weeks).round() as u32).max(1);

    TrainingProgression {
        program_duration,
        intensity_level,
        current_weekly_hours,
        peak_weekly_hours,
        training_days_per_week,
        weekly_increase,
    }
}

/// Values shown when neither the cache nor a provider can produce a
/// progression. A consumer displays these rather than crashing.
pub fn fallback() -> TrainingProgression {
    TrainingProgression {
        program_duration: 12,
        intensity_level: "Moderate".to_string(),
        current_weekly_hours: 5,
        peak_weekly_hours: 13,
        training_days_per_week: 4,
        weekly_increase: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FitnessProfile, GoalKind, GoalSelection};

    fn snapshot(distance: &str, fitness_level: &str, weekly_hours: u32) -> FormSnapshot {
        FormSnapshot {
            selected_goal: Some(GoalSelection {
                id: "g".to_string(),
                name: "Goal".to_string(),
                distance: distance.to_string(),
                kind: GoalKind::Race,
            }),
            fitness_data: Some(FitnessProfile {
                trail_experience: "some".to_string(),
                injury_history: "none".to_string(),
                fitness_level: fitness_level.to_string(),
                weekly_hours,
                training_days: 4,
            }),
        }
    }

    #[test]
    fn test_marathon_recreational() {
        let progression = compute(&snapshot("Marathon", "recreational", 5));
        assert_eq!(progression.program_duration, 16);
        assert_eq!(progression.intensity_level, "Moderate");
        assert_eq!(progression.current_weekly_hours, 5);
        assert_eq!(progression.peak_weekly_hours, 13);
        assert_eq!(progression.weekly_increase, 1);
    }

    #[test]
    fn test_duration_scales_with_distance() {
        assert_eq!(compute(&snapshot("100M", "elite", 10)).program_duration, 40);
        assert_eq!(compute(&snapshot("200K", "elite", 10)).program_duration, 40);
        assert_eq!(compute(&snapshot("50K", "elite", 10)).program_duration, 24);
        assert_eq!(compute(&snapshot("10K", "elite", 10)).program_duration, 12);
    }

    #[test]
    fn test_intensity_from_fitness_level() {
        assert_eq!(compute(&snapshot("10K", "beginner", 3)).intensity_level, "Easy");
        assert_eq!(compute(&snapshot("10K", "competitive", 8)).intensity_level, "High");
        assert_eq!(
            compute(&snapshot("10K", "elite", 12)).intensity_level,
            "Elite Intensity"
        );
        assert_eq!(compute(&snapshot("10K", "unknown", 5)).intensity_level, "Moderate");
    }

    #[test]
    fn test_empty_snapshot_gets_defaults() {
        let progression = compute(&FormSnapshot::default());
        assert_eq!(progression.program_duration, 12);
        assert_eq!(progression.current_weekly_hours, 5);
        assert_eq!(progression.training_days_per_week, 4);
        assert_eq!(progression.intensity_level, "Moderate");
    }

    #[test]
    fn test_weekly_increase_never_zero() {
        // Tiny gap between current and peak still increases by 1h/week
        let progression = compute(&snapshot("10K", "beginner", 1));
        assert!(progression.weekly_increase >= 1);
    }
}
