//! Dashboard service - summary figures across workouts and goals

use crate::error::ApiError;
use crate::repositories::Store;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::BTreeSet;
use workout_tracker_shared::types::DashboardResponse;

/// Window for the "this month" figures
const RECENT_WINDOW_DAYS: i64 = 30;

/// Workouts shown on the dashboard
const RECENT_WORKOUTS: i64 = 5;

/// Dashboard service
pub struct DashboardService;

impl DashboardService {
    /// Build the dashboard as of `now`
    pub async fn summary(store: &dyn Store, now: DateTime<Utc>) -> Result<DashboardResponse, ApiError> {
        let today = now.date_naive();
        let window_start = now - Duration::days(RECENT_WINDOW_DAYS);

        let totals = store.workout_totals(None).await.map_err(ApiError::Storage)?;
        let monthly = store
            .workout_totals(Some(window_start))
            .await
            .map_err(ApiError::Storage)?;

        let timestamps = store
            .workout_timestamps(None)
            .await
            .map_err(ApiError::Storage)?;
        let active_days = timestamps
            .iter()
            .filter(|t| **t >= window_start)
            .map(|t| t.date_naive())
            .collect::<BTreeSet<_>>()
            .len() as i64;
        let workout_days: BTreeSet<NaiveDate> =
            timestamps.iter().map(|t| t.date_naive()).collect();

        let goals = store.list_goals().await.map_err(ApiError::Storage)?;
        let completed_goals = goals.iter().filter(|g| g.is_completed).count() as i64;

        let recent_workouts = store
            .list_workouts(Some(RECENT_WORKOUTS))
            .await
            .map_err(ApiError::Storage)?;

        Ok(DashboardResponse {
            total_workouts: totals.workouts,
            total_calories: totals.calories,
            total_minutes: totals.minutes,
            monthly_workouts: monthly.workouts,
            monthly_calories: monthly.calories,
            active_days,
            current_streak: current_streak(&workout_days, today),
            active_goals: goals.len() as i64 - completed_goals,
            completed_goals,
            recent_workouts,
        })
    }
}

/// Consecutive days with a workout, ending today or yesterday
///
/// A streak whose last day is before yesterday is broken and counts as 0.
pub fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> i64 {
    let yesterday = today - Duration::days(1);
    let mut expected = if days.contains(&today) {
        today
    } else if days.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    for day in days.range(..=expected).rev() {
        if *day != expected {
            break;
        }
        streak += 1;
        expected = expected - Duration::days(1);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MemoryStore, NewWorkout};
    use proptest::prelude::*;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap() + Duration::days(offset)
    }

    fn days(offsets: &[i64]) -> BTreeSet<NaiveDate> {
        offsets.iter().map(|o| day(*o)).collect()
    }

    #[test]
    fn test_streak_ending_today() {
        assert_eq!(current_streak(&days(&[0, -1, -2, -4]), day(0)), 3);
    }

    #[test]
    fn test_streak_ending_yesterday() {
        assert_eq!(current_streak(&days(&[-1, -2]), day(0)), 2);
    }

    #[test]
    fn test_broken_streak() {
        assert_eq!(current_streak(&days(&[-2, -3]), day(0)), 0);
        assert_eq!(current_streak(&BTreeSet::new(), day(0)), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_streak_of_consecutive_run(len in 1i64..60) {
            let run: Vec<i64> = (0..len).map(|o| -o).collect();
            prop_assert_eq!(current_streak(&days(&run), day(0)), len);
        }

        #[test]
        fn prop_streak_never_exceeds_active_days(offsets in prop::collection::vec(-40i64..=0, 0..30)) {
            let set = days(&offsets);
            prop_assert!(current_streak(&set, day(0)) <= set.len() as i64);
        }
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let store = MemoryStore::new();
        let now = Utc::now();

        for (offset, calories) in [(45, 400), (1, 200), (0, 100)] {
            store
                .insert_workout(NewWorkout {
                    exercise_name: "Running".to_string(),
                    duration_minutes: 20,
                    calories_burned: calories,
                    timestamp: now - Duration::days(offset),
                })
                .await
                .unwrap();
        }

        let summary = DashboardService::summary(&store, now).await.unwrap();
        assert_eq!(summary.total_workouts, 3);
        assert_eq!(summary.total_calories, 700);
        assert_eq!(summary.total_minutes, 60);
        assert_eq!(summary.monthly_workouts, 2);
        assert_eq!(summary.monthly_calories, 300);
        assert_eq!(summary.active_days, 2);
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.active_goals, 0);
        assert_eq!(summary.recent_workouts.len(), 3);
        assert_eq!(summary.recent_workouts[0].calories_burned, 100);
    }
}
