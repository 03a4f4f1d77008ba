//! Health metrics calculator route

use super::AppJson;
use crate::error::ApiResult;
use crate::services::HealthMetricsService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use workout_tracker_shared::health_metrics::HealthMetrics;
use workout_tracker_shared::types::HealthMetricsRequest;

/// Create health metrics routes
pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/", post(calculate_metrics))
}

/// POST /api/health-metrics - BMI, BMR and calorie needs
async fn calculate_metrics(
    AppJson(req): AppJson<HealthMetricsRequest>,
) -> ApiResult<Json<HealthMetrics>> {
    Ok(Json(HealthMetricsService::calculate(&req)?))
}
