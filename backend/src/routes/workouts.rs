//! Workout ledger API routes

use super::{parse_id, AppJson};
use crate::error::ApiResult;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, post},
    Json, Router,
};
use workout_tracker_shared::types::{
    CreateWorkoutRequest, CreateWorkoutResponse, WorkoutsListResponse,
};

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_workout).get(list_workouts))
        .route("/:id", delete(delete_workout))
}

/// POST /api/workouts - Log a workout
async fn create_workout(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateWorkoutRequest>,
) -> ApiResult<Json<CreateWorkoutResponse>> {
    let entry = WorkoutService::log_workout(state.store(), req).await?;

    Ok(Json(CreateWorkoutResponse {
        message: "Workout logged successfully".to_string(),
        id: entry.id,
        calories_burned: entry.calories_burned,
    }))
}

/// GET /api/workouts - List workouts, newest first
async fn list_workouts(
    State(state): State<AppState>,
) -> ApiResult<Json<WorkoutsListResponse>> {
    let workouts = WorkoutService::list_workouts(state.store()).await?;
    Ok(Json(WorkoutsListResponse { workouts }))
}

/// DELETE /api/workouts/:id - Delete a workout
async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let workout_id = parse_id(&id, "Invalid workout ID")?;
    WorkoutService::delete_workout(state.store(), workout_id).await?;
    Ok(Json(serde_json::json!({})))
}
