//! Input validation functions
//!
//! Field-level checks shared by the request types. Range checks that fit a
//! derive live on the request structs themselves (`validator`); the helpers
//! here cover required fields and cross-field rules.

use validator::ValidationErrors;

/// Longest workout accepted, in minutes
pub const MAX_DURATION_MINUTES: i32 = 1440;

/// Validate an exercise name
pub fn validate_exercise_name(name: Option<&str>) -> Result<String, String> {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => Ok(n.to_string()),
        _ => Err("Exercise name is required".to_string()),
    }
}

/// Validate duration in minutes
pub fn validate_duration_minutes(minutes: Option<i32>) -> Result<i32, String> {
    match minutes {
        None => Err("Duration is required".to_string()),
        Some(m) if m <= 0 => Err("Duration must be greater than zero".to_string()),
        Some(m) if m > MAX_DURATION_MINUTES => {
            Err("Duration cannot exceed 24 hours".to_string())
        }
        Some(m) => Ok(m),
    }
}

/// Validate calorie value
pub fn validate_calories(calories: i32) -> Result<(), String> {
    if calories < 0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50_000 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a strictly positive measurement
pub fn validate_positive(field: &str, value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", get_field_display_label(field)));
    }
    if value <= 0.0 {
        return Err(format!("{} must be greater than zero", get_field_display_label(field)));
    }
    Ok(())
}

/// Validate percentage value (0-100)
pub fn validate_percentage(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Percentage must be a valid number".to_string());
    }
    if !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100".to_string());
    }
    Ok(())
}

/// Display label for a request field
pub fn get_field_display_label(field: &str) -> &str {
    match field {
        "exercise_name" => "Exercise",
        "duration_minutes" => "Duration",
        "calories_burned" => "Calories burned",
        "goal_type" => "Goal type",
        "target_value" => "Target value",
        "current_value" => "Current value",
        "target_date" => "Target date",
        "weight_kg" => "Weight",
        "height_cm" => "Height",
        "age" => "Age",
        "body_fat_percentage" => "Body fat",
        "chest_cm" => "Chest",
        "waist_cm" => "Waist",
        "hips_cm" => "Hips",
        "name" => "Name",
        other => other,
    }
}

/// Flatten `validator` errors into one message, fields in name order
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .map(|(field, errs)| {
            let detail = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{}: {}", get_field_display_label(field.as_ref()), detail)
        })
        .collect::<Vec<_>>()
        .join("; ")
}
