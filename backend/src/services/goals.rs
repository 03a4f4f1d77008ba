//! Goals service for goal setting and progress tracking
//!
//! Provides business logic for:
//! - Goal creation and management
//! - Automatic progress on calorie-burn goals as workouts are logged

use crate::error::ApiError;
use crate::repositories::{NewGoal, Store, UpdateGoal};
use chrono::{NaiveDate, Utc};
use tracing::debug;
use validator::Validate;
use workout_tracker_shared::models::{Goal, GoalType};
use workout_tracker_shared::types::{CreateGoalRequest, UpdateGoalRequest};

/// Goals service for business logic
pub struct GoalsService;

impl GoalsService {
    /// Create a new goal
    pub async fn create_goal(store: &dyn Store, req: CreateGoalRequest) -> Result<Goal, ApiError> {
        req.validate()?;

        let goal_type: GoalType = req
            .goal_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Validation("Goal type is required".to_string()))?
            .parse()
            .map_err(ApiError::Validation)?;

        let target_value = req
            .target_value
            .ok_or_else(|| ApiError::Validation("Target value is required".to_string()))?;

        let goal = store
            .insert_goal(NewGoal {
                goal_type,
                target_value,
                target_date: req.target_date,
                created_at: Utc::now(),
            })
            .await
            .map_err(ApiError::Storage)?;

        debug!(goal_id = goal.id, goal_type = %goal.goal_type, "Goal created");
        Ok(goal)
    }

    /// Get all goals, newest first
    pub async fn get_goals(store: &dyn Store) -> Result<Vec<Goal>, ApiError> {
        store.list_goals().await.map_err(ApiError::Storage)
    }

    /// Get a specific goal
    pub async fn get_goal(store: &dyn Store, goal_id: i64) -> Result<Goal, ApiError> {
        store
            .get_goal(goal_id)
            .await
            .map_err(ApiError::Storage)?
            .ok_or_else(|| ApiError::NotFound("Goal not found".to_string()))
    }

    /// Update a goal; provided fields are stored as given
    pub async fn update_goal(
        store: &dyn Store,
        goal_id: i64,
        req: UpdateGoalRequest,
    ) -> Result<Goal, ApiError> {
        req.validate()?;

        let updates = UpdateGoal {
            current_value: req.current_value,
            is_completed: req.is_completed,
        };

        store
            .update_goal(goal_id, updates)
            .await
            .map_err(ApiError::Storage)?
            .ok_or_else(|| ApiError::NotFound("Goal not found".to_string()))
    }

    /// Delete a goal
    pub async fn delete_goal(store: &dyn Store, goal_id: i64) -> Result<(), ApiError> {
        let deleted = store.delete_goal(goal_id).await.map_err(ApiError::Storage)?;

        if !deleted {
            return Err(ApiError::NotFound("Goal not found".to_string()));
        }

        Ok(())
    }

    /// Credit burned calories to active calorie-burn goals, then complete
    /// the ones that reached their target
    ///
    /// Returns how many goals were completed by this call.
    pub async fn auto_update_goals(
        store: &dyn Store,
        calories: f64,
        today: NaiveDate,
    ) -> Result<u64, ApiError> {
        let credited = store
            .increment_calorie_goals(calories, today)
            .await
            .map_err(ApiError::Storage)?;

        if credited == 0 {
            return Ok(0);
        }

        let completed = store
            .complete_reached_calorie_goals(today)
            .await
            .map_err(ApiError::Storage)?;

        debug!(credited, completed, calories, "Calorie goals updated");
        Ok(completed)
    }
}
