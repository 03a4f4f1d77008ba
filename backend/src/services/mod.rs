//! Business logic services
//!
//! Services encapsulate business logic and coordinate between the
//! request handlers and the configured [`Store`](crate::repositories::Store).

pub mod dashboard;
pub mod exercises;
pub mod goals;
pub mod measurements;
pub mod metrics;
pub mod profile;
pub mod workouts;

pub use dashboard::DashboardService;
pub use exercises::ExerciseService;
pub use goals::GoalsService;
pub use measurements::MeasurementService;
pub use metrics::HealthMetricsService;
pub use profile::ProfileService;
pub use workouts::WorkoutService;
