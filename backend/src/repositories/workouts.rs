//! Workout ledger repository for database operations

use super::{NewWorkout, WorkoutTotals};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use workout_tracker_shared::models::WorkoutEntry;

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: i64,
    pub exercise_name: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub timestamp: DateTime<Utc>,
}

impl From<WorkoutRecord> for WorkoutEntry {
    fn from(record: WorkoutRecord) -> Self {
        Self {
            id: record.id,
            exercise_name: record.exercise_name,
            duration_minutes: record.duration_minutes,
            calories_burned: record.calories_burned,
            timestamp: record.timestamp,
        }
    }
}

/// Workout repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Append a workout to the ledger
    pub async fn create(pool: &SqlitePool, input: NewWorkout) -> Result<WorkoutRecord> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (exercise_name, duration_minutes, calories_burned, timestamp)
            VALUES (?, ?, ?, ?)
            RETURNING id, exercise_name, duration_minutes, calories_burned, timestamp
            "#,
        )
        .bind(&input.exercise_name)
        .bind(input.duration_minutes)
        .bind(input.calories_burned)
        .bind(input.timestamp)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Newest first, optionally capped
    pub async fn list(pool: &SqlitePool, limit: Option<i64>) -> Result<Vec<WorkoutRecord>> {
        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, exercise_name, duration_minutes, calories_burned, timestamp
            FROM workouts
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        // SQLite treats a negative LIMIT as "no limit"
        .bind(limit.unwrap_or(-1))
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Delete a workout
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM workouts WHERE id = ?"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count, calories and minutes, optionally only since a point in time
    pub async fn totals(pool: &SqlitePool, since: Option<DateTime<Utc>>) -> Result<WorkoutTotals> {
        let totals = match since {
            Some(since) => {
                sqlx::query_as::<_, WorkoutTotals>(
                    r#"
                    SELECT COUNT(*) AS workouts,
                           COALESCE(SUM(calories_burned), 0) AS calories,
                           COALESCE(SUM(duration_minutes), 0) AS minutes
                    FROM workouts
                    WHERE timestamp >= ?
                    "#,
                )
                .bind(since)
                .fetch_one(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, WorkoutTotals>(
                    r#"
                    SELECT COUNT(*) AS workouts,
                           COALESCE(SUM(calories_burned), 0) AS calories,
                           COALESCE(SUM(duration_minutes), 0) AS minutes
                    FROM workouts
                    "#,
                )
                .fetch_one(pool)
                .await?
            }
        };

        Ok(totals)
    }

    /// Workout timestamps newest first, optionally only since a point in time
    pub async fn timestamps(
        pool: &SqlitePool,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<DateTime<Utc>>> {
        let timestamps = match since {
            Some(since) => {
                sqlx::query_scalar::<_, DateTime<Utc>>(
                    r#"
                    SELECT timestamp
                    FROM workouts
                    WHERE timestamp >= ?
                    ORDER BY timestamp DESC
                    "#,
                )
                .bind(since)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, DateTime<Utc>>(
                    r#"
                    SELECT timestamp
                    FROM workouts
                    ORDER BY timestamp DESC
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(timestamps)
    }
}
