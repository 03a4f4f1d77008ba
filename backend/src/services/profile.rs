//! Profile service - business logic for the single user profile

use crate::error::ApiError;
use crate::repositories::Store;
use tracing::info;
use validator::Validate;
use workout_tracker_shared::models::{Gender, Profile};
use workout_tracker_shared::types::SaveProfileRequest;

/// Profile service for profile operations
pub struct ProfileService;

impl ProfileService {
    /// Get the profile, `None` until one is saved
    pub async fn get_profile(store: &dyn Store) -> Result<Option<Profile>, ApiError> {
        store.get_profile().await.map_err(ApiError::Storage)
    }

    /// Replace the profile with the submitted fields
    pub async fn save_profile(store: &dyn Store, req: SaveProfileRequest) -> Result<Profile, ApiError> {
        req.validate()?;

        let profile = Profile {
            name: req.name.as_deref().map(str::trim).unwrap_or_default().to_string(),
            age: req.age,
            height_cm: req.height_cm,
            initial_weight_kg: req.weight_kg,
            gender: req
                .gender
                .as_deref()
                .map(Gender::parse_lenient)
                .unwrap_or_default(),
        };

        let saved = store.save_profile(profile).await.map_err(ApiError::Storage)?;
        info!(gender = %saved.gender, "Profile saved");

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    #[tokio::test]
    async fn test_save_profile_normalizes_fields() {
        let store = MemoryStore::new();
        assert_eq!(ProfileService::get_profile(&store).await.unwrap(), None);

        let saved = ProfileService::save_profile(
            &store,
            SaveProfileRequest {
                name: Some("  Sam ".to_string()),
                age: Some(30),
                height_cm: Some(175.0),
                weight_kg: Some(70.0),
                gender: Some("Female".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(saved.name, "Sam");
        assert_eq!(saved.initial_weight_kg, Some(70.0));
        assert_eq!(saved.gender, Gender::Female);
        assert_eq!(ProfileService::get_profile(&store).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_out_of_range_age_rejected() {
        let store = MemoryStore::new();
        let result = ProfileService::save_profile(
            &store,
            SaveProfileRequest {
                age: Some(0),
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
