//! Goals API routes

use super::{parse_id, AppJson};
use crate::error::ApiResult;
use crate::services::GoalsService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use workout_tracker_shared::types::{
    CreateGoalRequest, CreateGoalResponse, GoalDetailResponse, GoalResponse, GoalsListResponse,
    UpdateGoalRequest,
};

/// Create goals routes
pub fn goals_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_goal).get(list_goals))
        .route("/:id", get(get_goal).put(update_goal).delete(delete_goal))
}

/// POST /api/goals - Create a new goal
async fn create_goal(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateGoalRequest>,
) -> ApiResult<Json<CreateGoalResponse>> {
    let goal = GoalsService::create_goal(state.store(), req).await?;

    Ok(Json(CreateGoalResponse {
        message: "Goal created successfully".to_string(),
        id: goal.id,
    }))
}

/// GET /api/goals - List goals
async fn list_goals(State(state): State<AppState>) -> ApiResult<Json<GoalsListResponse>> {
    let goals = GoalsService::get_goals(state.store()).await?;

    Ok(Json(GoalsListResponse {
        goals: goals.into_iter().map(GoalResponse::from).collect(),
    }))
}

/// GET /api/goals/:id - Get a specific goal
async fn get_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<GoalDetailResponse>> {
    let goal_id = parse_id(&id, "Invalid goal ID")?;
    let goal = GoalsService::get_goal(state.store(), goal_id).await?;

    Ok(Json(GoalDetailResponse { goal: goal.into() }))
}

/// PUT /api/goals/:id - Update a goal
async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateGoalRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let goal_id = parse_id(&id, "Invalid goal ID")?;
    GoalsService::update_goal(state.store(), goal_id, req).await?;
    Ok(Json(serde_json::json!({})))
}

/// DELETE /api/goals/:id - Delete a goal
async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let goal_id = parse_id(&id, "Invalid goal ID")?;
    GoalsService::delete_goal(state.store(), goal_id).await?;
    Ok(Json(serde_json::json!({})))
}
