//! Goals repository for database operations

use super::{NewGoal, UpdateGoal};
use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use workout_tracker_shared::models::{Goal, GoalType};

/// Goal record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GoalRecord {
    pub id: i64,
    pub goal_type: String,
    pub target_value: f64,
    pub current_value: f64,
    pub target_date: Option<NaiveDate>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<GoalRecord> for Goal {
    type Error = anyhow::Error;

    fn try_from(record: GoalRecord) -> Result<Self> {
        let goal_type: GoalType = record
            .goal_type
            .parse()
            .map_err(|e: String| anyhow!("goal {}: {}", record.id, e))?;

        Ok(Self {
            id: record.id,
            goal_type,
            target_value: record.target_value,
            current_value: record.current_value,
            target_date: record.target_date,
            is_completed: record.is_completed,
            created_at: record.created_at,
        })
    }
}

/// Goal repository
pub struct GoalRepository;

impl GoalRepository {
    /// Create a new goal
    pub async fn create(pool: &SqlitePool, input: NewGoal) -> Result<GoalRecord> {
        let record = sqlx::query_as::<_, GoalRecord>(
            r#"
            INSERT INTO goals (goal_type, target_value, current_value, target_date, is_completed, created_at)
            VALUES (?, ?, 0, ?, 0, ?)
            RETURNING id, goal_type, target_value, current_value, target_date, is_completed, created_at
            "#,
        )
        .bind(input.goal_type.as_str())
        .bind(input.target_value)
        .bind(input.target_date)
        .bind(input.created_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get a goal by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<GoalRecord>> {
        let record = sqlx::query_as::<_, GoalRecord>(
            r#"
            SELECT id, goal_type, target_value, current_value, target_date, is_completed, created_at
            FROM goals
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// All goals, newest first
    pub async fn list(pool: &SqlitePool) -> Result<Vec<GoalRecord>> {
        let records = sqlx::query_as::<_, GoalRecord>(
            r#"
            SELECT id, goal_type, target_value, current_value, target_date, is_completed, created_at
            FROM goals
            ORDER BY id DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Update a goal; absent fields keep their stored value
    pub async fn update(pool: &SqlitePool, id: i64, updates: UpdateGoal) -> Result<Option<GoalRecord>> {
        let record = sqlx::query_as::<_, GoalRecord>(
            r#"
            UPDATE goals SET
                current_value = COALESCE(?, current_value),
                is_completed = COALESCE(?, is_completed)
            WHERE id = ?
            RETURNING id, goal_type, target_value, current_value, target_date, is_completed, created_at
            "#,
        )
        .bind(updates.current_value)
        .bind(updates.is_completed)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a goal
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM goals WHERE id = ?"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Add calories to every active calorie-burn goal
    pub async fn increment_calorie_goals(pool: &SqlitePool, delta: f64, today: NaiveDate) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE goals SET current_value = current_value + ?
            WHERE goal_type = 'calorie_burn'
              AND is_completed = 0
              AND (target_date IS NULL OR target_date >= ?)
            "#,
        )
        .bind(delta)
        .bind(today)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Mark active calorie-burn goals that reached their target as completed
    pub async fn complete_reached_calorie_goals(pool: &SqlitePool, today: NaiveDate) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE goals SET is_completed = 1
            WHERE goal_type = 'calorie_burn'
              AND is_completed = 0
              AND (target_date IS NULL OR target_date >= ?)
              AND current_value >= target_value
            "#,
        )
        .bind(today)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
