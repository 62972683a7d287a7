//! Input validation functions
//!
//! Every profile field has a static inclusive range. Checks run in a fixed
//! order (age, height, weight) and the first failure is reported.

use crate::errors::{CalculatorError, CalculatorResult};
use crate::health_metrics::Profile;

/// Minimum accepted age in years
pub const MIN_AGE_YEARS: u32 = 15;
/// Maximum accepted age in years
pub const MAX_AGE_YEARS: u32 = 100;
/// Minimum accepted height in centimeters
pub const MIN_HEIGHT_CM: f64 = 100.0;
/// Maximum accepted height in centimeters
pub const MAX_HEIGHT_CM: f64 = 250.0;
/// Minimum accepted weight in kilograms
pub const MIN_WEIGHT_KG: f64 = 30.0;
/// Maximum accepted weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 200.0;

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> CalculatorResult<()> {
    // NaN fails both comparisons, so test containment rather than exclusion
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(CalculatorError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Validate age (in years)
pub fn validate_age(age_years: u32) -> CalculatorResult<()> {
    check_range(
        "age",
        f64::from(age_years),
        f64::from(MIN_AGE_YEARS),
        f64::from(MAX_AGE_YEARS),
    )
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> CalculatorResult<()> {
    check_range("height_cm", height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> CalculatorResult<()> {
    check_range("weight_kg", weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)
}

/// Validate every numeric field of a profile
pub fn validate_profile(profile: &Profile) -> CalculatorResult<()> {
    validate_age(profile.age_years)?;
    validate_height_cm(profile.height_cm)?;
    validate_weight_kg(profile.weight_kg)?;
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "gender" => "Gender",
        "age" => "Age (years)",
        "height_cm" => "Height (cm)",
        "weight_kg" => "Weight (kg)",
        "activity_level" => "Activity Level",
        "goal" => "Goal",
        _ => field_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(14, false)]
    #[case(15, true)]
    #[case(50, true)]
    #[case(100, true)]
    #[case(101, false)]
    fn test_age_bounds(#[case] age: u32, #[case] ok: bool) {
        assert_eq!(validate_age(age).is_ok(), ok);
    }

    #[rstest]
    #[case(99.9, false)]
    #[case(100.0, true)]
    #[case(175.5, true)]
    #[case(250.0, true)]
    #[case(250.1, false)]
    fn test_height_bounds(#[case] height: f64, #[case] ok: bool) {
        assert_eq!(validate_height_cm(height).is_ok(), ok);
    }

    #[rstest]
    #[case(29.9, false)]
    #[case(30.0, true)]
    #[case(82.3, true)]
    #[case(200.0, true)]
    #[case(200.1, false)]
    fn test_weight_bounds(#[case] weight: f64, #[case] ok: bool) {
        assert_eq!(validate_weight_kg(weight).is_ok(), ok);
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(validate_height_cm(f64::NAN).is_err());
        assert!(validate_height_cm(f64::INFINITY).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_reports_field_and_bounds() {
        let err = validate_weight_kg(200.1).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::OutOfRange {
                field: "weight_kg",
                value: 200.1,
                min: MIN_WEIGHT_KG,
                max: MAX_WEIGHT_KG,
            }
        );
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("height_cm"), "Height (cm)");
        assert_eq!(get_field_display_label("age"), "Age (years)");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: every height inside the domain is accepted
        #[test]
        fn prop_height_in_domain_accepted(height in MIN_HEIGHT_CM..=MAX_HEIGHT_CM) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        /// Property: weights above the domain are always rejected
        #[test]
        fn prop_weight_above_domain_rejected(excess in 0.001f64..1000.0) {
            prop_assert!(validate_weight_kg(MAX_WEIGHT_KG + excess).is_err());
        }
    }
}
