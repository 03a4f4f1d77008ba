//! Process-local store for the demo mode
//!
//! Every collection is one JSON document under a versioned key, the same
//! layout a browser build keeps in local storage. Nothing survives a
//! restart. An optional per-operation delay imitates network latency.

use super::{NewGoal, NewMeasurement, NewWorkout, Store, UpdateGoal, WorkoutTotals};
use crate::config::StorageBackend;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;
use workout_tracker_shared::exercises::default_exercises;
use workout_tracker_shared::models::{
    BodyMeasurement, ExerciseDefinition, Goal, GoalType, Profile, WorkoutEntry,
};

const WORKOUTS_KEY: &str = "wf_workouts_v1";
const GOALS_KEY: &str = "wf_goals_v1";
const PROFILE_KEY: &str = "wf_profile_v1";
const EXERCISES_KEY: &str = "wf_exercises_v1";
const MEASUREMENTS_KEY: &str = "wf_measurements_v1";
const SEQUENCES_KEY: &str = "wf_sequences_v1";

/// Last id handed out per collection
#[derive(Debug, Default, Serialize, Deserialize)]
struct Sequences {
    workouts: i64,
    goals: i64,
    measurements: i64,
}

type Documents = HashMap<String, String>;

fn load<T: DeserializeOwned>(docs: &Documents, key: &str) -> Result<Option<T>> {
    docs.get(key)
        .map(|raw| serde_json::from_str(raw))
        .transpose()
        .with_context(|| format!("Corrupt document under {}", key))
}

fn load_list<T: DeserializeOwned>(docs: &Documents, key: &str) -> Result<Vec<T>> {
    Ok(load(docs, key)?.unwrap_or_default())
}

fn save<T: Serialize + ?Sized>(docs: &mut Documents, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    docs.insert(key.to_string(), raw);
    Ok(())
}

fn next_id(docs: &mut Documents, pick: impl FnOnce(&mut Sequences) -> &mut i64) -> Result<i64> {
    let mut sequences: Sequences = load(docs, SEQUENCES_KEY)?.unwrap_or_default();
    let slot = pick(&mut sequences);
    *slot += 1;
    let id = *slot;
    save(docs, SEQUENCES_KEY, &sequences)?;
    Ok(id)
}

fn is_active_calorie_goal(goal: &Goal, today: NaiveDate) -> bool {
    goal.goal_type == GoalType::CalorieBurn && goal.is_active_on(today)
}

/// In-memory key/value store
pub struct MemoryStore {
    docs: RwLock<Documents>,
    latency: Duration,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    /// Store that sleeps for `latency` before every operation
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            docs: RwLock::new(HashMap::new()),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// The exercise library, seeded on first access
    async fn exercises(&self) -> Result<Vec<ExerciseDefinition>> {
        if let Some(exercises) = load(&*self.docs.read().await, EXERCISES_KEY)? {
            return Ok(exercises);
        }

        let mut docs = self.docs.write().await;
        if let Some(exercises) = load(&docs, EXERCISES_KEY)? {
            return Ok(exercises);
        }
        let exercises = default_exercises();
        save(&mut docs, EXERCISES_KEY, &exercises)?;
        debug!(count = exercises.len(), "Seeded in-memory exercise library");
        Ok(exercises)
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Memory
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn close(&self) {
        debug!("Discarding in-memory store");
    }

    async fn insert_workout(&self, input: NewWorkout) -> Result<WorkoutEntry> {
        self.simulate_latency().await;
        let mut docs = self.docs.write().await;

        let entry = WorkoutEntry {
            id: next_id(&mut docs, |s| &mut s.workouts)?,
            exercise_name: input.exercise_name,
            duration_minutes: input.duration_minutes,
            calories_burned: input.calories_burned,
            timestamp: input.timestamp,
        };

        let mut workouts: Vec<WorkoutEntry> = load_list(&docs, WORKOUTS_KEY)?;
        workouts.insert(0, entry.clone());
        save(&mut docs, WORKOUTS_KEY, &workouts)?;

        Ok(entry)
    }

    async fn list_workouts(&self, limit: Option<i64>) -> Result<Vec<WorkoutEntry>> {
        self.simulate_latency().await;
        let mut workouts: Vec<WorkoutEntry> = load_list(&*self.docs.read().await, WORKOUTS_KEY)?;

        if let Some(limit) = limit.filter(|l| *l >= 0) {
            workouts.truncate(limit as usize);
        }
        Ok(workouts)
    }

    async fn delete_workout(&self, id: i64) -> Result<bool> {
        self.simulate_latency().await;
        let mut docs = self.docs.write().await;

        let mut workouts: Vec<WorkoutEntry> = load_list(&docs, WORKOUTS_KEY)?;
        let before = workouts.len();
        workouts.retain(|w| w.id != id);
        if workouts.len() == before {
            return Ok(false);
        }
        save(&mut docs, WORKOUTS_KEY, &workouts)?;
        Ok(true)
    }

    async fn workout_totals(&self, since: Option<DateTime<Utc>>) -> Result<WorkoutTotals> {
        self.simulate_latency().await;
        let workouts: Vec<WorkoutEntry> = load_list(&*self.docs.read().await, WORKOUTS_KEY)?;

        Ok(workouts
            .iter()
            .filter(|w| since.map_or(true, |since| w.timestamp >= since))
            .fold(WorkoutTotals::default(), |mut totals, w| {
                totals.workouts += 1;
                totals.calories += i64::from(w.calories_burned);
                totals.minutes += i64::from(w.duration_minutes);
                totals
            }))
    }

    async fn workout_timestamps(&self, since: Option<DateTime<Utc>>) -> Result<Vec<DateTime<Utc>>> {
        self.simulate_latency().await;
        let workouts: Vec<WorkoutEntry> = load_list(&*self.docs.read().await, WORKOUTS_KEY)?;

        Ok(workouts
            .into_iter()
            .map(|w| w.timestamp)
            .filter(|t| since.map_or(true, |since| *t >= since))
            .collect())
    }

    async fn list_exercises(&self, category: Option<&str>) -> Result<Vec<ExerciseDefinition>> {
        self.simulate_latency().await;
        let mut exercises = self.exercises().await?;

        if let Some(category) = category {
            exercises.retain(|e| e.category.eq_ignore_ascii_case(category));
        }
        exercises.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(exercises)
    }

    async fn find_exercise(&self, name: &str) -> Result<Option<ExerciseDefinition>> {
        self.simulate_latency().await;
        Ok(self.exercises().await?.into_iter().find(|e| e.name == name))
    }

    async fn insert_goal(&self, input: NewGoal) -> Result<Goal> {
        self.simulate_latency().await;
        let mut docs = self.docs.write().await;

        let goal = Goal {
            id: next_id(&mut docs, |s| &mut s.goals)?,
            goal_type: input.goal_type,
            target_value: input.target_value,
            current_value: 0.0,
            target_date: input.target_date,
            is_completed: false,
            created_at: input.created_at,
        };

        let mut goals: Vec<Goal> = load_list(&docs, GOALS_KEY)?;
        goals.insert(0, goal.clone());
        save(&mut docs, GOALS_KEY, &goals)?;

        Ok(goal)
    }

    async fn list_goals(&self) -> Result<Vec<Goal>> {
        self.simulate_latency().await;
        load_list(&*self.docs.read().await, GOALS_KEY)
    }

    async fn get_goal(&self, id: i64) -> Result<Option<Goal>> {
        self.simulate_latency().await;
        let goals: Vec<Goal> = load_list(&*self.docs.read().await, GOALS_KEY)?;
        Ok(goals.into_iter().find(|g| g.id == id))
    }

    async fn update_goal(&self, id: i64, updates: UpdateGoal) -> Result<Option<Goal>> {
        self.simulate_latency().await;
        let mut docs = self.docs.write().await;

        let mut goals: Vec<Goal> = load_list(&docs, GOALS_KEY)?;
        let Some(goal) = goals.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };

        if let Some(current_value) = updates.current_value {
            goal.current_value = current_value;
        }
        if let Some(is_completed) = updates.is_completed {
            goal.is_completed = is_completed;
        }
        let updated = goal.clone();

        save(&mut docs, GOALS_KEY, &goals)?;
        Ok(Some(updated))
    }

    async fn delete_goal(&self, id: i64) -> Result<bool> {
        self.simulate_latency().await;
        let mut docs = self.docs.write().await;

        let mut goals: Vec<Goal> = load_list(&docs, GOALS_KEY)?;
        let before = goals.len();
        goals.retain(|g| g.id != id);
        if goals.len() == before {
            return Ok(false);
        }
        save(&mut docs, GOALS_KEY, &goals)?;
        Ok(true)
    }

    async fn increment_calorie_goals(&self, delta: f64, today: NaiveDate) -> Result<u64> {
        self.simulate_latency().await;
        let mut docs = self.docs.write().await;

        let mut goals: Vec<Goal> = load_list(&docs, GOALS_KEY)?;
        let mut touched = 0;
        for goal in goals.iter_mut().filter(|g| is_active_calorie_goal(g, today)) {
            goal.current_value += delta;
            touched += 1;
        }

        if touched > 0 {
            save(&mut docs, GOALS_KEY, &goals)?;
        }
        Ok(touched)
    }

    async fn complete_reached_calorie_goals(&self, today: NaiveDate) -> Result<u64> {
        self.simulate_latency().await;
        let mut docs = self.docs.write().await;

        let mut goals: Vec<Goal> = load_list(&docs, GOALS_KEY)?;
        let mut completed = 0;
        for goal in goals
            .iter_mut()
            .filter(|g| is_active_calorie_goal(g, today) && g.current_value >= g.target_value)
        {
            goal.is_completed = true;
            completed += 1;
        }

        if completed > 0 {
            save(&mut docs, GOALS_KEY, &goals)?;
        }
        Ok(completed)
    }

    async fn get_profile(&self) -> Result<Option<Profile>> {
        self.simulate_latency().await;
        load(&*self.docs.read().await, PROFILE_KEY)
    }

    async fn save_profile(&self, profile: Profile) -> Result<Profile> {
        self.simulate_latency().await;
        save(&mut *self.docs.write().await, PROFILE_KEY, &profile)?;
        Ok(profile)
    }

    async fn insert_measurement(&self, input: NewMeasurement) -> Result<BodyMeasurement> {
        self.simulate_latency().await;
        let mut docs = self.docs.write().await;

        let measurement = BodyMeasurement {
            id: next_id(&mut docs, |s| &mut s.measurements)?,
            weight_kg: input.weight_kg,
            body_fat_percentage: input.body_fat_percentage,
            chest_cm: input.chest_cm,
            waist_cm: input.waist_cm,
            hips_cm: input.hips_cm,
            measurement_date: input.measurement_date,
        };

        let mut measurements: Vec<BodyMeasurement> = load_list(&docs, MEASUREMENTS_KEY)?;
        measurements.insert(0, measurement.clone());
        save(&mut docs, MEASUREMENTS_KEY, &measurements)?;

        Ok(measurement)
    }

    async fn list_measurements(&self) -> Result<Vec<BodyMeasurement>> {
        self.simulate_latency().await;
        load_list(&*self.docs.read().await, MEASUREMENTS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn workout(name: &str, calories: i32) -> NewWorkout {
        NewWorkout {
            exercise_name: name.to_string(),
            duration_minutes: 10,
            calories_burned: calories,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_per_collection() {
        let store = MemoryStore::new();

        let first = store.insert_workout(workout("Running", 100)).await.unwrap();
        let second = store.insert_workout(workout("Yoga", 30)).await.unwrap();
        let goal = store
            .insert_goal(NewGoal {
                goal_type: GoalType::WorkoutFrequency,
                target_value: 3.0,
                target_date: None,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        assert_eq!((first.id, second.id, goal.id), (1, 2, 1));
    }

    #[tokio::test]
    async fn test_workouts_newest_first_and_delete() {
        let store = MemoryStore::new();
        store.insert_workout(workout("Running", 100)).await.unwrap();
        let yoga = store.insert_workout(workout("Yoga", 30)).await.unwrap();

        let listed = store.list_workouts(None).await.unwrap();
        assert_eq!(listed[0].id, yoga.id);
        assert_eq!(store.list_workouts(Some(1)).await.unwrap().len(), 1);

        assert!(store.delete_workout(yoga.id).await.unwrap());
        assert!(!store.delete_workout(yoga.id).await.unwrap());

        let totals = store.workout_totals(None).await.unwrap();
        assert_eq!(totals, WorkoutTotals { workouts: 1, calories: 100, minutes: 10 });
    }

    #[tokio::test]
    async fn test_only_calorie_goals_progress() {
        let store = MemoryStore::new();
        let today = Utc::now().date_naive();

        for goal_type in [GoalType::CalorieBurn, GoalType::TargetWeight] {
            store
                .insert_goal(NewGoal {
                    goal_type,
                    target_value: 100.0,
                    target_date: None,
                    created_at: Utc::now(),
                })
                .await
                .unwrap();
        }

        assert_eq!(store.increment_calorie_goals(120.0, today).await.unwrap(), 1);
        assert_eq!(store.complete_reached_calorie_goals(today).await.unwrap(), 1);
        // Completed goals stop accruing
        assert_eq!(store.increment_calorie_goals(50.0, today).await.unwrap(), 0);

        let goals = store.list_goals().await.unwrap();
        let weight = goals.iter().find(|g| g.goal_type == GoalType::TargetWeight).unwrap();
        assert_eq!(weight.current_value, 0.0);
    }

    #[tokio::test]
    async fn test_exercises_seeded_once() {
        let store = MemoryStore::new();
        assert_eq!(store.list_exercises(None).await.unwrap().len(), 8);
        assert_eq!(store.list_exercises(None).await.unwrap().len(), 8);
        assert!(store.find_exercise("Plank").await.unwrap().is_some());
        assert!(store.find_exercise("plank").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_simulated_latency() {
        let store = MemoryStore::with_latency(Duration::from_millis(20));
        let started = Instant::now();
        store.list_goals().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
