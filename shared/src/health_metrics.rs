//! Calorie calculation module
//!
//! Computes BMI, BMR (Harris-Benedict), maintenance calories and a
//! goal-adjusted calorie target from a validated profile.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Validate First**: No derived value exists for an out-of-range profile
//! 3. **Full Precision**: Rounding happens at presentation time only
//! 4. **Type Safety**: Activity tiers and goals are enums, never matched as text

use crate::errors::CalculatorResult;
use crate::validation::validate_profile;
use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Types
// ============================================================================

/// Gender used by the physiological formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Serialized name
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Activity level for the maintenance calorie calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little to no exercise
    #[default]
    Sedentary,
    /// Exercise 1-3 times a week
    LightlyActive,
    /// Exercise 3-5 times a week
    ModeratelyActive,
    /// Exercise 6-7 times a week
    VeryActive,
    /// Physical job or training twice a day
    ExtremelyActive,
}

impl ActivityLevel {
    /// Every tier, from least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    /// Serialized name
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }

    /// Get the activity multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }

    /// Get a short human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little to no exercise",
            ActivityLevel::LightlyActive => "1-3x/week",
            ActivityLevel::ModeratelyActive => "3-5x/week",
            ActivityLevel::VeryActive => "6-7x/week",
            ActivityLevel::ExtremelyActive => "Physical job or 2x/day training",
        }
    }
}

/// Desired weight-change direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    /// Daily calorie offset applied to maintenance calories
    pub fn calorie_offset(&self) -> f64 {
        match self {
            Goal::Lose => -500.0,
            Goal::Maintain => 0.0,
            Goal::Gain => 300.0,
        }
    }

    /// Label shown in the goal selector
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Lose => "Lose Weight",
            Goal::Maintain => "Maintain Weight",
            Goal::Gain => "Gain Muscle",
        }
    }

    /// Headline used for the calorie target
    pub fn headline(&self) -> &'static str {
        match self {
            Goal::Lose => "Weight Loss",
            Goal::Maintain => "Maintenance",
            Goal::Gain => "Muscle Gain",
        }
    }
}

/// Biometric data submitted for one calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub gender: Gender,
    /// Age in years
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI band classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "underweight",
            BmiBand::Normal => "normal",
            BmiBand::Overweight => "overweight",
            BmiBand::Obese => "obese",
        }
    }

    /// Get the BMI range for this band (lower bound inclusive)
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiBand::Underweight => (0.0, 18.5),
            BmiBand::Normal => (18.5, 25.0),
            BmiBand::Overweight => (25.0, 30.0),
            BmiBand::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "Underweight",
            BmiBand::Normal => "Normal",
            BmiBand::Overweight => "Overweight",
            BmiBand::Obese => "Obese",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into band
pub fn classify_bmi(bmi: f64) -> BmiBand {
    if bmi < 18.5 {
        BmiBand::Underweight
    } else if bmi < 25.0 {
        BmiBand::Normal
    } else if bmi < 30.0 {
        BmiBand::Overweight
    } else {
        BmiBand::Obese
    }
}

// ============================================================================
// BMR and Calorie Calculations
// ============================================================================

/// Calculate BMR using the original Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr_harris_benedict(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let age = f64::from(age_years);
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Maintenance calories = BMR × activity multiplier
pub fn calculate_maintenance_calories(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Apply the goal offset to maintenance calories
pub fn calculate_target_calories(maintenance_calories: f64, goal: Goal) -> f64 {
    maintenance_calories + goal.calorie_offset()
}

/// Intensity of the calorie adjustment, in [0, 1]
///
/// Maintenance is pinned to the midpoint; otherwise the distance from
/// maintenance is scaled against a 500 kcal swing and capped at 1.
pub fn calculate_progress_fraction(goal: Goal, maintenance_calories: f64, target_calories: f64) -> f64 {
    match goal {
        Goal::Maintain => 0.5,
        Goal::Lose | Goal::Gain => ((target_calories - maintenance_calories).abs() / 500.0).min(1.0),
    }
}

/// Full calculation result for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieReport {
    pub bmi: f64,
    pub bmi_band: BmiBand,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Activity multiplier used
    pub activity_multiplier: f64,
    pub maintenance_calories: f64,
    pub target_calories: f64,
    pub goal: Goal,
    pub progress_fraction: f64,
}

/// Validate a profile and compute its calorie report
pub fn compute(profile: &Profile) -> CalculatorResult<CalorieReport> {
    validate_profile(profile)?;

    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let bmr = calculate_bmr_harris_benedict(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );
    let maintenance_calories = calculate_maintenance_calories(bmr, profile.activity_level);
    let target_calories = calculate_target_calories(maintenance_calories, profile.goal);

    Ok(CalorieReport {
        bmi,
        bmi_band: classify_bmi(bmi),
        bmr,
        activity_multiplier: profile.activity_level.multiplier(),
        maintenance_calories,
        target_calories,
        goal: profile.goal,
        progress_fraction: calculate_progress_fraction(profile.goal, maintenance_calories, target_calories),
    })
}
