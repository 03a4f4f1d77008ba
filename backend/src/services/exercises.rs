//! Exercise library service

use crate::error::ApiError;
use crate::repositories::Store;
use workout_tracker_shared::models::ExerciseDefinition;

/// Exercise service
pub struct ExerciseService;

impl ExerciseService {
    /// List the library, optionally filtered by category (case-insensitive)
    pub async fn list_exercises(
        store: &dyn Store,
        category: Option<&str>,
    ) -> Result<Vec<ExerciseDefinition>, ApiError> {
        let category = category.map(str::trim).filter(|c| !c.is_empty());

        store
            .list_exercises(category)
            .await
            .map_err(ApiError::Storage)
    }
}
