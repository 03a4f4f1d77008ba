//! Database connection and pool management
//!
//! SQLite pool creation, migrations, reference-data seeding and the
//! readiness check used by the SQLite store.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};
use workout_tracker_shared::exercises::default_exercises;

/// Database configuration for pool creation
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,      // 10 minutes
            max_lifetime_secs: 1800,     // 30 minutes
        }
    }
}

impl DbConfig {
    /// An in-memory database lives only as long as its connection
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Create a SQLite connection pool
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let config = DbConfig {
        url: database_url.to_string(),
        max_connections,
        ..Default::default()
    };
    create_pool_with_config(&config).await
}

/// Create a SQLite connection pool with custom configuration
pub async fn create_pool_with_config(config: &DbConfig) -> Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let options = SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .test_before_acquire(true);

    let options = if config.is_in_memory() {
        // One connection that is never recycled, or the data disappears
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections.min(config.max_connections))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
    };

    let pool = options.connect_with(connect_options).await?;

    info!(
        in_memory = config.is_in_memory(),
        "Database pool created: max={}",
        if config.is_in_memory() { 1 } else { config.max_connections }
    );

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Insert the built-in exercise library; existing rows are left untouched
pub async fn seed_exercises(pool: &SqlitePool) -> Result<u64> {
    let mut inserted = 0;

    for exercise in default_exercises() {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO exercises (
                name, description, category, difficulty,
                calories_burned_per_minute, muscle_groups, instructions
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&exercise.name)
        .bind(&exercise.description)
        .bind(&exercise.category)
        .bind(&exercise.difficulty)
        .bind(exercise.calories_burned_per_minute)
        .bind(&exercise.muscle_groups)
        .bind(&exercise.instructions)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    if inserted > 0 {
        info!(count = inserted, "Seeded exercise library");
    }

    Ok(inserted)
}

/// Check database health
pub async fn health_check(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}
