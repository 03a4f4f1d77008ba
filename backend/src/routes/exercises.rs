//! Exercise library API routes

use super::AppQuery;
use crate::error::ApiResult;
use crate::services::ExerciseService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use workout_tracker_shared::types::{ExercisesListResponse, ExercisesQuery};

/// Create exercise routes
pub fn exercise_routes() -> Router<AppState> {
    Router::new().route("/", get(list_exercises))
}

/// GET /api/exercises - List exercises, optionally by category
async fn list_exercises(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ExercisesQuery>,
) -> ApiResult<Json<ExercisesListResponse>> {
    let exercises = ExerciseService::list_exercises(state.store(), query.category.as_deref()).await?;
    Ok(Json(ExercisesListResponse { exercises }))
}
