//! Qualitative advice selected by BMI band and goal
//!
//! Text is fixed per enum variant; nothing here depends on the numeric
//! values beyond the band they were classified into.

use crate::health_metrics::{BmiBand, Goal};
use serde::{Deserialize, Serialize};

/// Tip shown with every result
pub const GENERAL_TIP: &str = "Adjust calories by ±250 kcal if progress stalls.";

/// Caption explaining the progress indicator
pub const PROGRESS_CAPTION: &str =
    "Progress bar indicates the intensity of your calorie adjustment relative to maintenance.";

/// How a piece of advice should be emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A piece of advice with its emphasis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub severity: Severity,
    pub message: String,
}

/// Advice for a BMI band
pub fn bmi_advice(band: BmiBand) -> Advice {
    let (severity, message) = match band {
        BmiBand::Underweight => (
            Severity::Warning,
            "Underweight: Focus on nutrient-dense foods and strength training.",
        ),
        BmiBand::Normal => (
            Severity::Success,
            "Normal range: Great job maintaining a healthy weight!",
        ),
        BmiBand::Overweight => (
            Severity::Info,
            "Overweight: Try adding cardio and monitoring portion sizes.",
        ),
        BmiBand::Obese => (
            Severity::Error,
            "Obesity: Consult a healthcare professional for guidance.",
        ),
    };

    Advice {
        severity,
        message: message.to_string(),
    }
}

/// Advice for a goal
pub fn goal_advice(goal: Goal) -> &'static str {
    match goal {
        Goal::Lose => "Aim for a 500 kcal deficit for ~0.5 kg/week loss.",
        Goal::Maintain => "Maintain consistency to stay at your current weight.",
        Goal::Gain => "Target a 300 kcal surplus for muscle gain.",
    }
}
