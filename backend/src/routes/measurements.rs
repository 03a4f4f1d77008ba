//! Body measurement API routes

use super::AppJson;
use crate::error::ApiResult;
use crate::services::MeasurementService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use workout_tracker_shared::types::{
    LogMeasurementRequest, LogMeasurementResponse, MeasurementsListResponse,
};

/// Create measurement routes
pub fn measurement_routes() -> Router<AppState> {
    Router::new().route("/", post(log_measurement).get(list_measurements))
}

/// POST /api/body-measurements - Record a measurement
async fn log_measurement(
    State(state): State<AppState>,
    AppJson(req): AppJson<LogMeasurementRequest>,
) -> ApiResult<Json<LogMeasurementResponse>> {
    let measurement = MeasurementService::log_measurement(state.store(), req).await?;

    Ok(Json(LogMeasurementResponse {
        message: "Measurement logged successfully".to_string(),
        id: measurement.id,
    }))
}

/// GET /api/body-measurements - List measurements, newest first
async fn list_measurements(
    State(state): State<AppState>,
) -> ApiResult<Json<MeasurementsListResponse>> {
    let measurements = MeasurementService::list_measurements(state.store()).await?;
    Ok(Json(MeasurementsListResponse { measurements }))
}
