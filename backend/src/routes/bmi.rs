//! BMI API routes

use crate::error::ApiError;
use crate::services::BmiService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query},
    routing::{get, post},
    Json, Router,
};
use bmi_calculator_shared::types::{
    ClassifyQuery, ClassifyResponse, EvaluateRequest, EvaluateResponse,
};

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new()
        .route("/evaluate", post(evaluate))
        .route("/classify", get(classify))
}

/// POST /api/v1/bmi/evaluate - Evaluate raw field values
///
/// Incomplete input is still 200 with `{"state": "welcome"}`; a malformed
/// body or unknown unit system is 400 `BAD_REQUEST`.
async fn evaluate(
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(BmiService::evaluate(&req)))
}

/// GET /api/v1/bmi/classify?bmi=24.2 - Classify a BMI value
async fn classify(Query(query): Query<ClassifyQuery>) -> Result<Json<ClassifyResponse>, ApiError> {
    BmiService::classify(query.bmi).map(Json)
}
