//! Profile API routes

use super::AppJson;
use crate::error::ApiResult;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use workout_tracker_shared::types::{MessageResponse, ProfileResponse, SaveProfileRequest};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).post(save_profile))
}

/// GET /api/profile - Get the profile (null until saved)
async fn get_profile(State(state): State<AppState>) -> ApiResult<Json<ProfileResponse>> {
    let profile = ProfileService::get_profile(state.store()).await?;
    Ok(Json(ProfileResponse { profile }))
}

/// POST /api/profile - Save the profile
async fn save_profile(
    State(state): State<AppState>,
    AppJson(req): AppJson<SaveProfileRequest>,
) -> ApiResult<Json<MessageResponse>> {
    ProfileService::save_profile(state.store(), req).await?;

    Ok(Json(MessageResponse {
        message: "Profile saved successfully".to_string(),
    }))
}
