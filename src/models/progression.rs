use serde::{Deserialize, Serialize};

/// The derived training progression shown on the plan summary screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingProgression {
    /// Program length in weeks
    #[serde(rename = "programDuration")]
    pub program_duration: u32,
    #[serde(rename = "intensityLevel")]
    pub intensity_level: String,
    #[serde(rename = "currentWeeklyHours")]
    pub current_weekly_hours: u32,
    #[serde(rename = "peakWeeklyHours")]
    pub peak_weekly_hours: u32,
    #[serde(rename = "trainingDaysPerWeek")]
    pub training_days_per_week: u32,
    /// Hours added per build week
    #[serde(rename = "weeklyIncrease")]
    pub weekly_increase: u32,
}
