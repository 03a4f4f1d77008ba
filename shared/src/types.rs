//! API request and response types

use crate::models::{BodyMeasurement, ExerciseDefinition, Goal, GoalType, Profile, WorkoutEntry};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Date inputs arrive as "" when the form field is left blank
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// ============================================================================
// Workouts
// ============================================================================

/// Log workout request
#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
pub struct CreateWorkoutRequest {
    pub exercise_name: Option<String>,
    pub duration_minutes: Option<i32>,
    /// Omitted (or zero) means "derive from the exercise rate"
    #[validate(range(min = 0, max = 50000, message = "Calories must be between 0 and 50000"))]
    pub calories_burned: Option<i32>,
}

/// Log workout response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutResponse {
    pub message: String,
    pub id: i64,
    pub calories_burned: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutsListResponse {
    pub workouts: Vec<WorkoutEntry>,
}

// ============================================================================
// Health metrics
// ============================================================================

/// Health metrics request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HealthMetricsRequest {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

// ============================================================================
// Goals
// ============================================================================

/// Create goal request
#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
pub struct CreateGoalRequest {
    pub goal_type: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Target value must be greater than zero"))]
    pub target_value: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGoalResponse {
    pub message: String,
    pub id: i64,
}

/// Partial goal update
#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
pub struct UpdateGoalRequest {
    #[validate(range(min = 0.0, message = "Current value cannot be negative"))]
    pub current_value: Option<f64>,
    pub is_completed: Option<bool>,
}

/// Goal as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalResponse {
    pub id: i64,
    pub goal_type: GoalType,
    pub label: String,
    pub target_value: f64,
    pub current_value: f64,
    pub target_date: Option<NaiveDate>,
    pub is_completed: bool,
    pub progress_percent: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self {
            progress_percent: goal.progress_percent(),
            label: goal.goal_type.label().to_string(),
            id: goal.id,
            goal_type: goal.goal_type,
            target_value: goal.target_value,
            current_value: goal.current_value,
            target_date: goal.target_date,
            is_completed: goal.is_completed,
            created_at: goal.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalsListResponse {
    pub goals: Vec<GoalResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalDetailResponse {
    pub goal: GoalResponse,
}

// ============================================================================
// Profile
// ============================================================================

/// Save profile request; replaces the stored profile wholesale
#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
pub struct SaveProfileRequest {
    #[validate(length(max = 100, message = "Name is too long"))]
    pub name: Option<String>,
    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150"))]
    pub age: Option<i32>,
    #[validate(range(min = 50.0, max = 300.0, message = "Height must be between 50 and 300 cm"))]
    pub height_cm: Option<f64>,
    #[serde(alias = "initial_weight_kg")]
    #[validate(range(min = 20.0, max = 500.0, message = "Weight must be between 20 and 500 kg"))]
    pub weight_kg: Option<f64>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: Option<Profile>,
}

// ============================================================================
// Exercises
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExercisesQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExercisesListResponse {
    pub exercises: Vec<ExerciseDefinition>,
}

// ============================================================================
// Body measurements
// ============================================================================

/// Log body measurement request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogMeasurementRequest {
    pub weight_kg: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub chest_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hips_cm: Option<f64>,
}

impl LogMeasurementRequest {
    pub fn is_empty(&self) -> bool {
        self.weight_kg.is_none()
            && self.body_fat_percentage.is_none()
            && self.chest_cm.is_none()
            && self.waist_cm.is_none()
            && self.hips_cm.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMeasurementResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementsListResponse {
    pub measurements: Vec<BodyMeasurement>,
}

// ============================================================================
// Dashboard
// ============================================================================

/// Dashboard summary figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_workouts: i64,
    pub total_calories: i64,
    pub total_minutes: i64,
    pub monthly_workouts: i64,
    pub monthly_calories: i64,
    pub active_days: i64,
    pub current_streak: i64,
    pub active_goals: i64,
    pub completed_goals: i64,
    pub recent_workouts: Vec<WorkoutEntry>,
}
