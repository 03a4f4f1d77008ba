//! Health metrics calculations module
//!
//! Maps body measurements (weight, height, age, gender) to BMI, BMR, an
//! ideal weight range and daily calorie needs per activity tier.
//!
//! Everything here is a pure function: no persistence, no side effects.
//! The same code runs on the server and, through the wasm bindings, in the
//! browser.

use crate::errors::DomainError;
use crate::models::Gender;
use serde::{Deserialize, Serialize};

// ============================================================================
// Input
// ============================================================================

/// Validated input for the calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: i32,
    pub gender: Gender,
}

impl HealthProfile {
    /// Build a profile from possibly-missing form values
    ///
    /// Weight, height and age must be present and positive.
    pub fn new(
        weight_kg: Option<f64>,
        height_cm: Option<f64>,
        age: Option<i32>,
        gender: Gender,
    ) -> Result<Self, DomainError> {
        let (weight_kg, height_cm) = match (weight_kg, height_cm) {
            (Some(w), Some(h)) if is_positive(w) && is_positive(h) => (w, h),
            _ => {
                return Err(DomainError::Validation(
                    "Weight & height required".to_string(),
                ))
            }
        };

        let age = match age {
            Some(a) if a > 0 => a,
            _ => return Err(DomainError::Validation("Age must be a positive number".to_string())),
        };

        Ok(Self {
            weight_kg,
            height_cm,
            age,
            gender,
        })
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Round to the given number of decimals from the exact binary value
///
/// Scaling first (`value * 10`) can push a quotient stored just below a
/// tie onto the tie and round it up, so 18.4499.. would become 18.5. The
/// decimal formatter works on the exact value instead. Exact ties, which
/// are only representable as odd multiples of `2^-(decimals+1)`, round
/// away from zero.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let tie_scale = 2f64.powi(decimals as i32 + 1);
    let scaled = value * tie_scale;
    if scaled.fract() == 0.0 && scaled.abs() % 2.0 == 1.0 {
        let factor = 10f64.powi(decimals as i32);
        return (value * factor).round() / factor;
    }

    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

// ============================================================================
// BMI
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Static health-risk description for the category
    pub fn health_risk(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Increased risk of nutritional deficiency and osteoporosis"
            }
            BmiCategory::NormalWeight => "Lowest risk of health problems",
            BmiCategory::Overweight => "Increased risk of heart disease, diabetes",
            BmiCategory::Obese => "High risk of serious health conditions",
        }
    }
}

/// Calculate BMI from weight and height, unrounded
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Ideal weight range for a height, from BMI 18.5 to 24.9, rounded to 0.1 kg
pub fn ideal_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    (round_to(18.5 * height_m_sq, 1), round_to(24.9 * height_m_sq, 1))
}

// ============================================================================
// BMR and calorie needs
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor
///
/// Female: 10w + 6.25h - 5a - 161. Every other gender value gets +5.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: i32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Female => base - 161.0,
        Gender::Male | Gender::Other => base + 5.0,
    }
}

/// Activity tier for daily calorie needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    LightExercise,
    ModerateExercise,
    HeavyExercise,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightExercise => 1.375,
            ActivityLevel::ModerateExercise => 1.55,
            ActivityLevel::HeavyExercise => 1.725,
        }
    }
}

/// Daily calories per activity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCalorieNeeds {
    pub sedentary: i64,
    pub light_exercise: i64,
    pub moderate_exercise: i64,
    pub heavy_exercise: i64,
}

impl DailyCalorieNeeds {
    /// Tiers from an unrounded BMR
    pub fn from_bmr(bmr: f64) -> Self {
        let tier = |level: ActivityLevel| (bmr * level.multiplier()).round() as i64;
        Self {
            sedentary: tier(ActivityLevel::Sedentary),
            light_exercise: tier(ActivityLevel::LightExercise),
            moderate_exercise: tier(ActivityLevel::ModerateExercise),
            heavy_exercise: tier(ActivityLevel::HeavyExercise),
        }
    }
}

// ============================================================================
// Combined result
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

/// Echo of the inputs the metrics were computed from
///
/// `gender` carries the submitted string, which may differ from the parsed
/// value used for BMR (an unknown string computes as `other`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsInputEcho {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: i32,
    pub gender: String,
}

/// Full calculator output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub bmi: f64,
    pub category: String,
    pub health_risk: String,
    pub bmr: i64,
    pub ideal_weight_range: WeightRange,
    pub daily_calorie_needs: DailyCalorieNeeds,
    pub metrics: MetricsInputEcho,
}

/// Calculate every metric for a validated profile
///
/// `submitted_gender` is echoed verbatim in `metrics`.
pub fn calculate_health_metrics(profile: &HealthProfile, submitted_gender: &str) -> HealthMetrics {
    let bmi = round_to(calculate_bmi(profile.weight_kg, profile.height_cm), 1);
    let category = classify_bmi(bmi);
    let bmr = calculate_bmr(profile.weight_kg, profile.height_cm, profile.age, profile.gender);
    let (min, max) = ideal_weight_range_kg(profile.height_cm);

    HealthMetrics {
        bmi,
        category: category.label().to_string(),
        health_risk: category.health_risk().to_string(),
        bmr: bmr.round() as i64,
        ideal_weight_range: WeightRange { min, max },
        daily_calorie_needs: DailyCalorieNeeds::from_bmr(bmr),
        metrics: MetricsInputEcho {
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            age: profile.age,
            gender: submitted_gender.to_string(),
        },
    }
}
