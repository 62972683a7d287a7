//! Error types for the Calorie Advisor calculator

use thiserror::Error;

/// Calculator error types
///
/// The calculator has exactly one failure mode: an input outside its
/// declared numeric domain. Validation runs before any derived value is
/// computed, so an error never comes with a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl CalculatorError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            CalculatorError::OutOfRange { field, .. } => field,
        }
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = CalculatorError::OutOfRange {
            field: "age",
            value: 14.0,
            min: 15.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "age must be between 15 and 100 (got 14)");
        assert_eq!(err.field(), "age");
    }
}
