use serde::{Deserialize, Serialize};

/// Whether a selected target is an open-ended goal or a concrete race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Goal,
    Race,
}

impl std::fmt::Display for GoalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalKind::Goal => write!(f, "goal"),
            GoalKind::Race => write!(f, "race"),
        }
    }
}

/// The goal or race the user picked in the goal-selection step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSelection {
    pub id: String,
    pub name: String,
    pub distance: String,
    #[serde(rename = "type")]
    pub kind: GoalKind,
}

/// Self-reported fitness answers from the fitness step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessProfile {
    #[serde(rename = "trailExperience")]
    pub trail_experience: String,
    #[serde(rename = "injuryHistory")]
    pub injury_history: String,
    #[serde(rename = "fitnessLevel")]
    pub fitness_level: String,
    #[serde(rename = "weeklyHours")]
    pub weekly_hours: u32,
    #[serde(rename = "trainingDays")]
    pub training_days: u32,
}

/// The subset of onboarding answers that feeds progression derivation.
///
/// Only these two fields participate in cache-key hashing; absent fields
/// are omitted from serialization so a partial snapshot hashes the same
/// way regardless of how it was assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(rename = "selectedGoal", skip_serializing_if = "Option::is_none")]
    pub selected_goal: Option<GoalSelection>,
    #[serde(rename = "fitnessData", skip_serializing_if = "Option::is_none")]
    pub fitness_data: Option<FitnessProfile>,
}

impl FormSnapshot {
    /// Both steps answered; progression derivation needs both.
    pub fn is_complete(&self) -> bool {
        self.selected_goal.is_some() && self.fitness_data.is_some()
    }

    /// Merge a partial snapshot over this one. Fields set in `partial`
    /// replace the current values; unset fields are left alone.
    pub fn merge(&mut self, partial: FormSnapshot) {
        if partial.selected_goal.is_some() {
            self.selected_goal = partial.selected_goal;
        }
        if partial.fitness_data.is_some() {
            self.fitness_data = partial.fitness_data;
        }
    }
}

/// A catalog entry backing the goal-selection step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceOption {
    pub id: String,
    pub name: String,
    pub distance: String,
    pub description: String,
    #[serde(rename = "participantCount")]
    pub participant_count: u32,
    pub badge: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub category: GoalKind,
    #[serde(rename = "elevationGain")]
    pub elevation_gain: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> GoalSelection {
        GoalSelection {
            id: "marathon".to_string(),
            name: "Marathon".to_string(),
            distance: "42K".to_string(),
            kind: GoalKind::Goal,
        }
    }

    #[test]
    fn test_snapshot_serializes_wire_names() {
        let snapshot = FormSnapshot {
            selected_goal: Some(goal()),
            fitness_data: None,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["selectedGoal"]["type"], "goal");
        // Absent fields are omitted entirely, not serialized as null
        assert!(json.get("fitnessData").is_none());
    }

    #[test]
    fn test_merge_overrides_only_set_fields() {
        let mut snapshot = FormSnapshot {
            selected_goal: Some(goal()),
            fitness_data: None,
        };
        snapshot.merge(FormSnapshot {
            selected_goal: None,
            fitness_data: Some(FitnessProfile {
                trail_experience: "some".to_string(),
                injury_history: "none".to_string(),
                fitness_level: "recreational".to_string(),
                weekly_hours: 5,
                training_days: 4,
            }),
        });
        assert!(snapshot.is_complete());
        assert_eq!(snapshot.selected_goal.unwrap().id, "marathon");
    }

    #[test]
    fn test_empty_snapshot_is_incomplete() {
        assert!(!FormSnapshot::default().is_complete());
    }
}
