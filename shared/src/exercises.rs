//! Built-in exercise library and calorie resolution

use crate::models::ExerciseDefinition;

/// Burn rate used when an exercise is not in the library
pub const DEFAULT_CALORIES_PER_MINUTE: f64 = 5.0;

/// (name, description, category, difficulty, cal/min, muscle groups, instructions)
type SeedRow = (&'static str, &'static str, &'static str, &'static str, f64, &'static str, &'static str);

const SEED: &[SeedRow] = &[
    (
        "Running",
        "Running at a moderate pace. Great for cardiovascular health and endurance building.",
        "Cardio",
        "Intermediate",
        10.0,
        "Legs, Core, Cardiovascular",
        "Maintain steady pace, proper breathing technique. Start with 5-10 minute warm-up.",
    ),
    (
        "Push-ups",
        "Classic bodyweight exercise for upper body strength.",
        "Strength",
        "Beginner",
        4.0,
        "Chest, Shoulders, Triceps, Core",
        "Keep body straight, lower chest to floor. Modify with knee push-ups if needed.",
    ),
    (
        "Squats",
        "Fundamental lower body exercise for leg strength.",
        "Strength",
        "Beginner",
        5.0,
        "Legs, Glutes, Core",
        "Keep knees behind toes, back straight. Go as low as comfortable.",
    ),
    (
        "Yoga",
        "Mind-body practice combining physical postures and breathing.",
        "Flexibility",
        "Beginner",
        3.0,
        "Full Body, Core",
        "Focus on breathing and proper alignment. Move slowly between poses.",
    ),
    (
        "Cycling",
        "Low-impact cardiovascular exercise.",
        "Cardio",
        "Beginner",
        8.0,
        "Legs, Glutes, Cardiovascular",
        "Keep back straight, pedal consistently. Adjust resistance as needed.",
    ),
    (
        "Swimming",
        "Full-body, low-impact exercise.",
        "Cardio",
        "Intermediate",
        9.0,
        "Full Body, Cardiovascular",
        "Focus on breathing and stroke technique. Start with shorter distances.",
    ),
    (
        "Deadlift",
        "Compound exercise for posterior chain development.",
        "Strength",
        "Advanced",
        6.0,
        "Back, Legs, Glutes, Core",
        "Keep back straight, lift with legs. Start with light weights to master form.",
    ),
    (
        "Plank",
        "Core stability and endurance exercise.",
        "Strength",
        "Beginner",
        3.0,
        "Core, Shoulders, Back",
        "Keep body straight, engage core. Hold for 20-60 seconds.",
    ),
];

/// The exercise library every store is seeded with
pub fn default_exercises() -> Vec<ExerciseDefinition> {
    SEED.iter()
        .map(
            |&(name, description, category, difficulty, rate, muscle_groups, instructions)| {
                ExerciseDefinition {
                    name: name.to_string(),
                    description: description.to_string(),
                    category: category.to_string(),
                    difficulty: difficulty.to_string(),
                    calories_burned_per_minute: rate,
                    muscle_groups: muscle_groups.to_string(),
                    instructions: instructions.to_string(),
                }
            },
        )
        .collect()
}

/// Calories for a workout from a per-minute rate, rounded to whole calories
///
/// `None` (exercise not found) falls back to the default rate.
pub fn estimate_calories(rate_per_minute: Option<f64>, duration_minutes: i32) -> i32 {
    let rate = rate_per_minute
        .filter(|r| *r > 0.0)
        .unwrap_or(DEFAULT_CALORIES_PER_MINUTE);
    (rate * duration_minutes as f64).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_names_unique() {
        let exercises = default_exercises();
        let names: HashSet<_> = exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(exercises.len(), 8);
        assert_eq!(names.len(), exercises.len());
    }

    #[test]
    fn test_running_rate() {
        let running = default_exercises()
            .into_iter()
            .find(|e| e.name == "Running")
            .unwrap();
        assert_eq!(running.calories_burned_per_minute, 10.0);
        assert_eq!(estimate_calories(Some(running.calories_burned_per_minute), 30), 300);
    }

    #[test]
    fn test_unknown_exercise_uses_default_rate() {
        assert_eq!(estimate_calories(None, 10), 50);
    }

    #[test]
    fn test_fractional_rate_rounds() {
        assert_eq!(estimate_calories(Some(3.3), 7), 23);
        assert_eq!(estimate_calories(Some(2.5), 3), 8);
    }
}
