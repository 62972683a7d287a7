//! Calorie calculation API routes

use crate::error::{ApiError, ApiResult};
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use calorie_advisor_shared::{CalculateRequest, CalculationResponse};

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new().route("/", post(calculate))
}

/// POST /api/v1/calculate - Compute BMI, BMR and calorie targets
async fn calculate(
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> ApiResult<Json<CalculationResponse>> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    CalculatorService::calculate(req).map(Json)
}
