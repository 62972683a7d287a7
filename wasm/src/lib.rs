//! Calorie Advisor WASM Module
//!
//! This crate provides WebAssembly bindings so the calculator can run
//! in the browser without a round-trip to the backend.

use calorie_advisor_shared::validation::{validate_height_cm, validate_weight_kg};
use calorie_advisor_shared::{self as shared, CalculateRequest, CalculationResponse, Profile};
use wasm_bindgen::prelude::*;

/// Run the full calculation on a JSON-encoded `CalculateRequest`
///
/// Returns a JSON-encoded `CalculationResponse`, or throws with the
/// validation message when an input is out of range.
#[wasm_bindgen]
pub fn calculate(request_json: &str) -> Result<String, JsError> {
    calculate_json(request_json).map_err(|e| JsError::new(&e))
}

fn calculate_json(request_json: &str) -> Result<String, String> {
    let request: CalculateRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid request: {}", e))?;
    let report = shared::compute(&Profile::from(request)).map_err(|e| e.to_string())?;
    serde_json::to_string(&CalculationResponse::from(&report)).map_err(|e| e.to_string())
}

/// Calculate BMI from weight (kg) and height (cm)
///
/// Throws when either value is outside the calculator's accepted range.
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, JsError> {
    checked_bmi(weight_kg, height_cm).map_err(|e| JsError::new(&e))
}

fn checked_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, String> {
    validate_height_cm(height_cm).map_err(|e| e.to_string())?;
    validate_weight_kg(weight_kg).map_err(|e| e.to_string())?;
    Ok(shared::calculate_bmi(weight_kg, height_cm))
}

/// Classify a BMI value, returning the band name (e.g. "overweight")
#[wasm_bindgen]
pub fn classify_bmi(bmi: f64) -> String {
    shared::classify_bmi(bmi).as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_json() {
        let request = r#"{
            "gender": "female",
            "age": 25,
            "height_cm": 165.0,
            "weight_kg": 60.0,
            "activity_level": "sedentary",
            "goal": "maintain"
        }"#;
        let response: serde_json::Value = serde_json::from_str(&calculate_json(request).unwrap()).unwrap();
        assert_eq!(response["target_calories"], 1615.0);
        assert_eq!(response["progress_fraction"], 0.5);
        assert_eq!(response["bmi_band"], "normal");
    }

    #[test]
    fn test_calculate_json_out_of_range() {
        let request = r#"{"gender": "male", "age": 101, "height_cm": 180.0, "weight_kg": 80.0}"#;
        let err = calculate_json(request).unwrap_err();
        assert!(err.starts_with("age must be between"));
    }

    #[test]
    fn test_calculate_json_malformed() {
        assert!(calculate_json("{not json").unwrap_err().starts_with("Invalid request"));
    }

    #[test]
    fn test_bmi() {
        let bmi = checked_bmi(70.0, 175.0).unwrap();
        assert!((bmi - 22.86).abs() < 0.1);
    }

    #[test]
    fn test_bmi_rejects_invalid_inputs() {
        assert!(checked_bmi(70.0, 0.0).unwrap_err().starts_with("height_cm must be between"));
        assert!(checked_bmi(70.0, -175.0).is_err());
        assert!(checked_bmi(f64::NAN, 175.0).unwrap_err().starts_with("weight_kg must be between"));
    }

    #[test]
    fn test_classify_bmi() {
        assert_eq!(classify_bmi(18.4), "underweight");
        assert_eq!(classify_bmi(30.0), "obese");
    }
}
