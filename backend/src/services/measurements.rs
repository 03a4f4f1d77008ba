//! Body measurement service

use crate::error::ApiError;
use crate::repositories::{NewMeasurement, Store};
use chrono::Utc;
use workout_tracker_shared::models::BodyMeasurement;
use workout_tracker_shared::types::LogMeasurementRequest;
use workout_tracker_shared::validation::{validate_percentage, validate_positive};

/// Measurement service
pub struct MeasurementService;

impl MeasurementService {
    /// Record a measurement; at least one field must be present
    pub async fn log_measurement(
        store: &dyn Store,
        req: LogMeasurementRequest,
    ) -> Result<BodyMeasurement, ApiError> {
        Self::validate(&req).map_err(ApiError::Validation)?;

        store
            .insert_measurement(NewMeasurement {
                weight_kg: req.weight_kg,
                body_fat_percentage: req.body_fat_percentage,
                chest_cm: req.chest_cm,
                waist_cm: req.waist_cm,
                hips_cm: req.hips_cm,
                measurement_date: Utc::now(),
            })
            .await
            .map_err(ApiError::Storage)
    }

    /// All measurements, newest first
    pub async fn list_measurements(store: &dyn Store) -> Result<Vec<BodyMeasurement>, ApiError> {
        store.list_measurements().await.map_err(ApiError::Storage)
    }

    fn validate(req: &LogMeasurementRequest) -> Result<(), String> {
        if req.is_empty() {
            return Err("At least one measurement is required".to_string());
        }

        let positives = [
            ("weight_kg", req.weight_kg),
            ("chest_cm", req.chest_cm),
            ("waist_cm", req.waist_cm),
            ("hips_cm", req.hips_cm),
        ];
        for (field, value) in positives {
            if let Some(value) = value {
                validate_positive(field, value)?;
            }
        }

        if let Some(body_fat) = req.body_fat_percentage {
            validate_percentage(body_fat)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LogMeasurementRequest::default(), false)]
    #[case(LogMeasurementRequest { waist_cm: Some(81.5), ..Default::default() }, true)]
    #[case(LogMeasurementRequest { weight_kg: Some(0.0), ..Default::default() }, false)]
    #[case(LogMeasurementRequest { body_fat_percentage: Some(101.0), ..Default::default() }, false)]
    #[case(LogMeasurementRequest { body_fat_percentage: Some(0.0), ..Default::default() }, true)]
    fn test_measurement_validation(#[case] req: LogMeasurementRequest, #[case] valid: bool) {
        assert_eq!(MeasurementService::validate(&req).is_ok(), valid);
    }
}
