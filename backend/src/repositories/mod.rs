//! Data access layer
//!
//! Services talk to a [`Store`]; two implementations exist. [`SqliteStore`]
//! persists through the per-entity repositories in this module, and
//! [`MemoryStore`] keeps JSON documents in a process-local key/value map
//! for the demo mode.

pub mod exercises;
pub mod goals;
pub mod measurements;
pub mod memory;
pub mod profile;
pub mod sqlite;
pub mod workouts;

use crate::config::{AppConfig, StorageBackend};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use std::time::Duration;
use workout_tracker_shared::models::{
    BodyMeasurement, ExerciseDefinition, Goal, GoalType, Profile, WorkoutEntry,
};

pub use exercises::ExerciseRepository;
pub use goals::GoalRepository;
pub use measurements::MeasurementRepository;
pub use memory::MemoryStore;
pub use profile::ProfileRepository;
pub use sqlite::SqliteStore;
pub use workouts::WorkoutRepository;

/// Input for logging a workout
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub exercise_name: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub timestamp: DateTime<Utc>,
}

/// Input for creating a goal
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub goal_type: GoalType,
    pub target_value: f64,
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Partial goal update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateGoal {
    pub current_value: Option<f64>,
    pub is_completed: Option<bool>,
}

/// Input for logging a body measurement
#[derive(Debug, Clone)]
pub struct NewMeasurement {
    pub weight_kg: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub chest_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub measurement_date: DateTime<Utc>,
}

/// Aggregate workout figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct WorkoutTotals {
    pub workouts: i64,
    pub calories: i64,
    pub minutes: i64,
}

/// Persistence operations needed by the services
#[async_trait]
pub trait Store: Send + Sync {
    /// Which backend this is
    fn backend(&self) -> StorageBackend;

    /// Readiness probe
    async fn ping(&self) -> Result<()>;

    /// Release held resources
    async fn close(&self);

    async fn insert_workout(&self, input: NewWorkout) -> Result<WorkoutEntry>;

    /// Workouts, newest first
    async fn list_workouts(&self, limit: Option<i64>) -> Result<Vec<WorkoutEntry>>;

    /// Returns false when no workout had that id
    async fn delete_workout(&self, id: i64) -> Result<bool>;

    async fn workout_totals(&self, since: Option<DateTime<Utc>>) -> Result<WorkoutTotals>;

    /// Workout timestamps, newest first
    async fn workout_timestamps(&self, since: Option<DateTime<Utc>>) -> Result<Vec<DateTime<Utc>>>;

    async fn list_exercises(&self, category: Option<&str>) -> Result<Vec<ExerciseDefinition>>;

    async fn find_exercise(&self, name: &str) -> Result<Option<ExerciseDefinition>>;

    async fn insert_goal(&self, input: NewGoal) -> Result<Goal>;

    /// Goals, newest first
    async fn list_goals(&self) -> Result<Vec<Goal>>;

    async fn get_goal(&self, id: i64) -> Result<Option<Goal>>;

    async fn update_goal(&self, id: i64, updates: UpdateGoal) -> Result<Option<Goal>>;

    async fn delete_goal(&self, id: i64) -> Result<bool>;

    /// Add `delta` to every calorie-burn goal active on `today`
    async fn increment_calorie_goals(&self, delta: f64, today: NaiveDate) -> Result<u64>;

    /// Complete every calorie-burn goal active on `today` that reached its target
    async fn complete_reached_calorie_goals(&self, today: NaiveDate) -> Result<u64>;

    async fn get_profile(&self) -> Result<Option<Profile>>;

    async fn save_profile(&self, profile: Profile) -> Result<Profile>;

    async fn insert_measurement(&self, input: NewMeasurement) -> Result<BodyMeasurement>;

    /// Measurements, newest first
    async fn list_measurements(&self) -> Result<Vec<BodyMeasurement>>;
}

/// Open the store selected by configuration
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn Store>> {
    let store: Arc<dyn Store> = match config.storage.backend {
        StorageBackend::Sqlite => Arc::new(SqliteStore::open(&config.database).await?),
        StorageBackend::Memory => Arc::new(MemoryStore::with_latency(Duration::from_millis(
            config.storage.simulated_latency_ms,
        ))),
    };

    Ok(store)
}
