//! Workout Tracker WASM Module
//!
//! WebAssembly bindings so the static client can compute health metrics and
//! workout calories without a server round-trip.

use wasm_bindgen::prelude::*;
use workout_tracker_shared::exercises::estimate_calories;
use workout_tracker_shared::health_metrics::{self, HealthProfile};
use workout_tracker_shared::models::Gender;

/// Calculate BMI from weight (kg) and height (cm), rounded to one decimal
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    health_metrics::round_to(health_metrics::calculate_bmi(weight_kg, height_cm), 1)
}

/// Calculate BMR (Mifflin-St Jeor), rounded to whole calories
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: i32, gender: &str) -> f64 {
    health_metrics::calculate_bmr(weight_kg, height_cm, age, Gender::parse_lenient(gender)).round()
}

/// Full health metrics as JSON, or `{"error": "..."}` for invalid input
#[wasm_bindgen]
pub fn health_metrics_json(weight_kg: f64, height_cm: f64, age: i32, gender: &str) -> String {
    let result = HealthProfile::new(
        Some(weight_kg),
        Some(height_cm),
        Some(age),
        Gender::parse_lenient(gender),
    )
    .map(|profile| health_metrics::calculate_health_metrics(&profile, gender));

    let value = match result {
        Ok(metrics) => serde_json::to_value(metrics),
        Err(e) => Ok(serde_json::json!({ "error": e.message() })),
    };

    value
        .map(|v| v.to_string())
        .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
}

/// Calories for a workout; a non-positive rate means "unknown exercise"
#[wasm_bindgen]
pub fn workout_calories(rate_per_minute: f64, duration_minutes: i32) -> i32 {
    estimate_calories(Some(rate_per_minute), duration_minutes)
}
