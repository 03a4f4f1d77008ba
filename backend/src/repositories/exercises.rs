//! Exercise library repository

use anyhow::Result;
use sqlx::SqlitePool;
use workout_tracker_shared::models::ExerciseDefinition;

/// Exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub calories_burned_per_minute: f64,
    pub muscle_groups: String,
    pub instructions: String,
}

impl From<ExerciseRecord> for ExerciseDefinition {
    fn from(record: ExerciseRecord) -> Self {
        Self {
            name: record.name,
            description: record.description,
            category: record.category,
            difficulty: record.difficulty,
            calories_burned_per_minute: record.calories_burned_per_minute,
            muscle_groups: record.muscle_groups,
            instructions: record.instructions,
        }
    }
}

/// Exercise repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// List exercises by name, optionally restricted to one category
    pub async fn list(pool: &SqlitePool, category: Option<&str>) -> Result<Vec<ExerciseRecord>> {
        let records = match category {
            Some(category) => {
                sqlx::query_as::<_, ExerciseRecord>(
                    r#"
                    SELECT name, description, category, difficulty,
                           calories_burned_per_minute, muscle_groups, instructions
                    FROM exercises
                    WHERE category = ? COLLATE NOCASE
                    ORDER BY name
                    "#,
                )
                .bind(category)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ExerciseRecord>(
                    r#"
                    SELECT name, description, category, difficulty,
                           calories_burned_per_minute, muscle_groups, instructions
                    FROM exercises
                    ORDER BY name
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(records)
    }

    /// Find an exercise by exact name
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<ExerciseRecord>> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT name, description, category, difficulty,
                   calories_burned_per_minute, muscle_groups, instructions
            FROM exercises
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
