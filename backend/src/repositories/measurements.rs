//! Body measurement repository

use super::NewMeasurement;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use workout_tracker_shared::models::BodyMeasurement;

/// Body measurement record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MeasurementRecord {
    pub id: i64,
    pub weight_kg: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub chest_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub measurement_date: DateTime<Utc>,
}

impl From<MeasurementRecord> for BodyMeasurement {
    fn from(record: MeasurementRecord) -> Self {
        Self {
            id: record.id,
            weight_kg: record.weight_kg,
            body_fat_percentage: record.body_fat_percentage,
            chest_cm: record.chest_cm,
            waist_cm: record.waist_cm,
            hips_cm: record.hips_cm,
            measurement_date: record.measurement_date,
        }
    }
}

/// Body measurement repository
pub struct MeasurementRepository;

impl MeasurementRepository {
    /// Create a measurement entry
    pub async fn create(pool: &SqlitePool, input: NewMeasurement) -> Result<MeasurementRecord> {
        let record = sqlx::query_as::<_, MeasurementRecord>(
            r#"
            INSERT INTO body_measurements (
                weight_kg, body_fat_percentage, chest_cm, waist_cm, hips_cm, measurement_date
            )
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, weight_kg, body_fat_percentage, chest_cm, waist_cm, hips_cm, measurement_date
            "#,
        )
        .bind(input.weight_kg)
        .bind(input.body_fat_percentage)
        .bind(input.chest_cm)
        .bind(input.waist_cm)
        .bind(input.hips_cm)
        .bind(input.measurement_date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// All measurements, newest first
    pub async fn list(pool: &SqlitePool) -> Result<Vec<MeasurementRecord>> {
        let records = sqlx::query_as::<_, MeasurementRecord>(
            r#"
            SELECT id, weight_kg, body_fat_percentage, chest_cm, waist_cm, hips_cm, measurement_date
            FROM body_measurements
            ORDER BY id DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
