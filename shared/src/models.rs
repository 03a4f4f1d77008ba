//! Data models for the Workout Tracker application

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender as entered on the profile and health metrics forms
///
/// Anything that is not recognized parses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    /// Parse a free-form gender string, falling back to `Other`
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or(Gender::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("Unknown gender: {}", other)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goal type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    TargetWeight,
    WorkoutFrequency,
    CalorieBurn,
    ExerciseTarget,
}

impl GoalType {
    pub const ALL: [GoalType; 4] = [
        GoalType::TargetWeight,
        GoalType::WorkoutFrequency,
        GoalType::CalorieBurn,
        GoalType::ExerciseTarget,
    ];

    /// Storage/wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::TargetWeight => "target_weight",
            GoalType::WorkoutFrequency => "workout_frequency",
            GoalType::CalorieBurn => "calorie_burn",
            GoalType::ExerciseTarget => "exercise_target",
        }
    }

    /// Human-readable label shown next to the goal
    pub fn label(&self) -> &'static str {
        match self {
            GoalType::TargetWeight => "Target Weight",
            GoalType::WorkoutFrequency => "Weekly Workouts",
            GoalType::CalorieBurn => "Monthly Calories Burned",
            GoalType::ExerciseTarget => "Exercise Target",
        }
    }
}

impl FromStr for GoalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid goal type. Must be one of: {}",
                    GoalType::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged workout in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub id: i64,
    pub exercise_name: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub timestamp: DateTime<Utc>,
}

/// Reference exercise with its calorie burn rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub calories_burned_per_minute: f64,
    pub muscle_groups: String,
    pub instructions: String,
}

/// Fitness goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub goal_type: GoalType,
    pub target_value: f64,
    pub current_value: f64,
    pub target_date: Option<NaiveDate>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Whether the goal still takes automatic progress on `today`
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        !self.is_completed && self.target_date.map_or(true, |d| d >= today)
    }

    /// Progress toward target as a percentage in 0..=100
    pub fn progress_percent(&self) -> f64 {
        if self.target_value <= 0.0 {
            return if self.is_completed { 100.0 } else { 0.0 };
        }
        (self.current_value / self.target_value * 100.0).clamp(0.0, 100.0)
    }
}

/// The single user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub initial_weight_kg: Option<f64>,
    pub gender: Gender,
}

/// Body measurement log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurement {
    pub id: i64,
    pub weight_kg: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub chest_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub measurement_date: DateTime<Utc>,
}
