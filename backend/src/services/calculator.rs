//! Calculator service
//!
//! Thin layer over the shared calculator that adds logging and turns
//! reports into rounded presentation responses.

use crate::error::ApiError;
use calorie_advisor_shared::{compute, CalculateRequest, CalculationResponse, Profile};
use tracing::{debug, info};

pub struct CalculatorService;

impl CalculatorService {
    /// Validate the request and compute its rounded response
    pub fn calculate(request: CalculateRequest) -> Result<CalculationResponse, ApiError> {
        let profile = Profile::from(request);

        let report = compute(&profile).map_err(|e| {
            info!(field = e.field(), "Rejected out-of-range input");
            ApiError::from(e)
        })?;

        debug!(
            bmi = report.bmi,
            bmr = report.bmr,
            maintenance = report.maintenance_calories,
            target = report.target_calories,
            goal = report.goal.as_str(),
            "Calculated calorie report"
        );

        Ok(CalculationResponse::from(&report))
    }
}
