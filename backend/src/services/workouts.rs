//! Workout service - logging workouts and resolving their calories

use crate::error::ApiError;
use crate::repositories::{NewWorkout, Store};
use crate::services::GoalsService;
use chrono::Utc;
use tracing::{error, info};
use validator::Validate;
use workout_tracker_shared::exercises::estimate_calories;
use workout_tracker_shared::models::WorkoutEntry;
use workout_tracker_shared::types::CreateWorkoutRequest;
use workout_tracker_shared::validation::{
    validate_calories, validate_duration_minutes, validate_exercise_name,
};

/// Workout service
pub struct WorkoutService;

impl WorkoutService {
    /// Log a workout and credit its calories to active calorie goals
    pub async fn log_workout(
        store: &dyn Store,
        req: CreateWorkoutRequest,
    ) -> Result<WorkoutEntry, ApiError> {
        req.validate()?;
        let exercise_name =
            validate_exercise_name(req.exercise_name.as_deref()).map_err(ApiError::Validation)?;
        let duration_minutes =
            validate_duration_minutes(req.duration_minutes).map_err(ApiError::Validation)?;

        let calories_burned = match req.calories_burned.filter(|c| *c > 0) {
            Some(calories) => calories,
            None => Self::estimate(store, &exercise_name, duration_minutes).await?,
        };
        validate_calories(calories_burned).map_err(ApiError::Validation)?;

        let now = Utc::now();
        let entry = store
            .insert_workout(NewWorkout {
                exercise_name,
                duration_minutes,
                calories_burned,
                timestamp: now,
            })
            .await
            .map_err(ApiError::Storage)?;

        info!(
            workout_id = entry.id,
            exercise = %entry.exercise_name,
            calories = entry.calories_burned,
            "Workout logged"
        );

        // The workout is already stored; goal progress is best effort
        if let Err(e) =
            GoalsService::auto_update_goals(store, f64::from(calories_burned), now.date_naive()).await
        {
            error!(workout_id = entry.id, "Failed to update goals: {}", e);
        }

        Ok(entry)
    }

    /// Calories from the exercise library rate, or the default rate
    async fn estimate(store: &dyn Store, exercise_name: &str, duration_minutes: i32) -> Result<i32, ApiError> {
        let rate = store
            .find_exercise(exercise_name)
            .await
            .map_err(ApiError::Storage)?
            .map(|e| e.calories_burned_per_minute);

        Ok(estimate_calories(rate, duration_minutes))
    }

    /// All workouts, newest first
    pub async fn list_workouts(store: &dyn Store) -> Result<Vec<WorkoutEntry>, ApiError> {
        store.list_workouts(None).await.map_err(ApiError::Storage)
    }

    /// Delete a workout; goal progress is left as is
    pub async fn delete_workout(store: &dyn Store, workout_id: i64) -> Result<(), ApiError> {
        let deleted = store
            .delete_workout(workout_id)
            .await
            .map_err(ApiError::Storage)?;

        if !deleted {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }

        Ok(())
    }
}
