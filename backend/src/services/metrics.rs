//! Health metrics service - request mapping around the shared calculator

use crate::error::ApiError;
use workout_tracker_shared::health_metrics::{
    calculate_health_metrics, HealthMetrics, HealthProfile,
};
use workout_tracker_shared::models::Gender;
use workout_tracker_shared::types::HealthMetricsRequest;

/// Health metrics service
pub struct HealthMetricsService;

impl HealthMetricsService {
    /// Compute BMI, BMR, ideal weight range and calorie needs
    ///
    /// The submitted gender string is echoed back as given; a missing one
    /// echoes the default it was parsed to.
    pub fn calculate(req: &HealthMetricsRequest) -> Result<HealthMetrics, ApiError> {
        let gender = req
            .gender
            .as_deref()
            .map(Gender::parse_lenient)
            .unwrap_or_default();

        let profile = HealthProfile::new(req.weight_kg, req.height_cm, req.age, gender)?;
        let submitted = req.gender.as_deref().unwrap_or(gender.as_str());

        Ok(calculate_health_metrics(&profile, submitted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_from_request() {
        let req = HealthMetricsRequest {
            weight_kg: Some(60.0),
            height_cm: Some(165.0),
            age: Some(30),
            gender: Some("female".to_string()),
        };
        let metrics = HealthMetricsService::calculate(&req).unwrap();
        assert_eq!(metrics.bmr, 1320);
    }

    #[test]
    fn test_unknown_gender_echoed_verbatim() {
        let req = HealthMetricsRequest {
            weight_kg: Some(80.0),
            height_cm: Some(180.0),
            age: Some(40),
            gender: Some("Nonbinary".to_string()),
        };
        let metrics = HealthMetricsService::calculate(&req).unwrap();
        assert_eq!(metrics.metrics.gender, "Nonbinary");
        assert_eq!(metrics.bmr, 1730);

        let req = HealthMetricsRequest { gender: None, ..req };
        let metrics = HealthMetricsService::calculate(&req).unwrap();
        assert_eq!(metrics.metrics.gender, "other");
    }

    #[test]
    fn test_missing_height_rejected() {
        let req = HealthMetricsRequest {
            weight_kg: Some(60.0),
            age: Some(30),
            ..Default::default()
        };
        assert!(matches!(
            HealthMetricsService::calculate(&req),
            Err(ApiError::Validation(msg)) if msg == "Weight & height required"
        ));
    }
}
