//! Single-row profile repository

use anyhow::Result;
use sqlx::SqlitePool;
use workout_tracker_shared::models::{Gender, Profile};

/// Profile record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
    pub name: String,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub initial_weight_kg: Option<f64>,
    pub gender: String,
}

impl From<ProfileRecord> for Profile {
    fn from(record: ProfileRecord) -> Self {
        Self {
            name: record.name,
            age: record.age,
            height_cm: record.height_cm,
            initial_weight_kg: record.initial_weight_kg,
            gender: Gender::parse_lenient(&record.gender),
        }
    }
}

/// Profile repository
pub struct ProfileRepository;

impl ProfileRepository {
    /// The stored profile, if one was ever saved
    pub async fn get(pool: &SqlitePool) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            SELECT name, age, height_cm, initial_weight_kg, gender
            FROM profile
            WHERE id = 1
            "#,
        )
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Replace the profile
    pub async fn upsert(pool: &SqlitePool, profile: &Profile) -> Result<ProfileRecord> {
        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            INSERT INTO profile (id, name, age, height_cm, initial_weight_kg, gender)
            VALUES (1, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                age = excluded.age,
                height_cm = excluded.height_cm,
                initial_weight_kg = excluded.initial_weight_kg,
                gender = excluded.gender
            RETURNING name, age, height_cm, initial_weight_kg, gender
            "#,
        )
        .bind(&profile.name)
        .bind(profile.age)
        .bind(profile.height_cm)
        .bind(profile.initial_weight_kg)
        .bind(profile.gender.as_str())
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}
