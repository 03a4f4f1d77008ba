//! SQLite-backed store

use super::{
    ExerciseRepository, GoalRepository, MeasurementRepository, NewGoal, NewMeasurement,
    NewWorkout, ProfileRepository, Store, UpdateGoal, WorkoutRepository, WorkoutTotals,
};
use crate::config::{DatabaseConfig, StorageBackend};
use crate::db;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::info;
use workout_tracker_shared::models::{
    BodyMeasurement, ExerciseDefinition, Goal, Profile, WorkoutEntry,
};

/// Store over a SQLite connection pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect, migrate and seed the exercise library
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        let pool = db::create_pool(&config.url, config.max_connections).await?;
        db::run_migrations(&pool).await?;
        db::seed_exercises(&pool).await?;

        info!(url = %config.url, "SQLite store ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl Store for SqliteStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Sqlite
    }

    async fn ping(&self) -> Result<()> {
        db::health_check(&self.pool).await
    }

    async fn close(&self) {
        self.pool.close().await;
    }

    async fn insert_workout(&self, input: NewWorkout) -> Result<WorkoutEntry> {
        Ok(WorkoutRepository::create(&self.pool, input).await?.into())
    }

    async fn list_workouts(&self, limit: Option<i64>) -> Result<Vec<WorkoutEntry>> {
        let records = WorkoutRepository::list(&self.pool, limit).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn delete_workout(&self, id: i64) -> Result<bool> {
        WorkoutRepository::delete(&self.pool, id).await
    }

    async fn workout_totals(&self, since: Option<DateTime<Utc>>) -> Result<WorkoutTotals> {
        WorkoutRepository::totals(&self.pool, since).await
    }

    async fn workout_timestamps(&self, since: Option<DateTime<Utc>>) -> Result<Vec<DateTime<Utc>>> {
        WorkoutRepository::timestamps(&self.pool, since).await
    }

    async fn list_exercises(&self, category: Option<&str>) -> Result<Vec<ExerciseDefinition>> {
        let records = ExerciseRepository::list(&self.pool, category).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn find_exercise(&self, name: &str) -> Result<Option<ExerciseDefinition>> {
        Ok(ExerciseRepository::find_by_name(&self.pool, name)
            .await?
            .map(Into::into))
    }

    async fn insert_goal(&self, input: NewGoal) -> Result<Goal> {
        GoalRepository::create(&self.pool, input).await?.try_into()
    }

    async fn list_goals(&self) -> Result<Vec<Goal>> {
        GoalRepository::list(&self.pool)
            .await?
            .into_iter()
            .map(Goal::try_from)
            .collect()
    }

    async fn get_goal(&self, id: i64) -> Result<Option<Goal>> {
        GoalRepository::get_by_id(&self.pool, id)
            .await?
            .map(Goal::try_from)
            .transpose()
    }

    async fn update_goal(&self, id: i64, updates: UpdateGoal) -> Result<Option<Goal>> {
        GoalRepository::update(&self.pool, id, updates)
            .await?
            .map(Goal::try_from)
            .transpose()
    }

    async fn delete_goal(&self, id: i64) -> Result<bool> {
        GoalRepository::delete(&self.pool, id).await
    }

    async fn increment_calorie_goals(&self, delta: f64, today: NaiveDate) -> Result<u64> {
        GoalRepository::increment_calorie_goals(&self.pool, delta, today).await
    }

    async fn complete_reached_calorie_goals(&self, today: NaiveDate) -> Result<u64> {
        GoalRepository::complete_reached_calorie_goals(&self.pool, today).await
    }

    async fn get_profile(&self) -> Result<Option<Profile>> {
        Ok(ProfileRepository::get(&self.pool).await?.map(Into::into))
    }

    async fn save_profile(&self, profile: Profile) -> Result<Profile> {
        Ok(ProfileRepository::upsert(&self.pool, &profile).await?.into())
    }

    async fn insert_measurement(&self, input: NewMeasurement) -> Result<BodyMeasurement> {
        Ok(MeasurementRepository::create(&self.pool, input).await?.into())
    }

    async fn list_measurements(&self) -> Result<Vec<BodyMeasurement>> {
        let records = MeasurementRepository::list(&self.pool).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
