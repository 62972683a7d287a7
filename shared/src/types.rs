//! API request and response types

use crate::advice::{bmi_advice, goal_advice, Advice, GENERAL_TIP};
use crate::health_metrics::{ActivityLevel, BmiBand, CalorieReport, Gender, Goal, Profile};
use serde::{Deserialize, Serialize};

/// Calculation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub gender: Gender,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
}

impl From<CalculateRequest> for Profile {
    fn from(req: CalculateRequest) -> Self {
        Profile {
            gender: req.gender,
            age_years: req.age,
            height_cm: req.height_cm,
            weight_kg: req.weight_kg,
            activity_level: req.activity_level,
            goal: req.goal,
        }
    }
}

/// Calculation response, rounded for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub bmi: f64,
    pub bmi_band: BmiBand,
    pub bmr: f64,
    pub maintenance_calories: f64,
    pub target_calories: f64,
    pub goal: Goal,
    pub goal_headline: String,
    pub progress_fraction: f64,
    pub bmi_advice: Advice,
    pub goal_advice: String,
    pub tip: String,
    pub unit: String,
}

impl From<&CalorieReport> for CalculationResponse {
    fn from(report: &CalorieReport) -> Self {
        CalculationResponse {
            bmi: round_bmi(report.bmi),
            bmi_band: report.bmi_band,
            bmr: round_calories(report.bmr),
            maintenance_calories: round_calories(report.maintenance_calories),
            target_calories: round_calories(report.target_calories),
            goal: report.goal,
            goal_headline: report.goal.headline().to_string(),
            progress_fraction: report.progress_fraction,
            bmi_advice: bmi_advice(report.bmi_band),
            goal_advice: goal_advice(report.goal).to_string(),
            tip: GENERAL_TIP.to_string(),
            unit: "kcal".to_string(),
        }
    }
}

/// Round a calorie figure to whole kcal
pub fn round_calories(kcal: f64) -> f64 {
    kcal.round()
}

/// Round a BMI value to one decimal place
pub fn round_bmi(bmi: f64) -> f64 {
    (bmi * 10.0).round() / 10.0
}
