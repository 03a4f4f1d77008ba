//! Dashboard summary route

use crate::error::ApiResult;
use crate::services::DashboardService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use workout_tracker_shared::types::DashboardResponse;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

/// GET /api/dashboard - Summary figures
async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardResponse>> {
    let summary = DashboardService::summary(state.store(), Utc::now()).await?;
    Ok(Json(summary))
}
