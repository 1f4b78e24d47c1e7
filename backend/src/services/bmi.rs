//! BMI evaluation service

use crate::error::ApiError;
use bmi_calculator_shared::{
    evaluate, ClassifyResponse, EvaluateRequest, EvaluateResponse, UnitSystem,
};
use tracing::debug;

/// Counter of evaluations, labeled by unit system and outcome
pub const EVALUATIONS_METRIC: &str = "bmi_evaluations_total";

/// BMI service for business logic
pub struct BmiService;

impl BmiService {
    /// Evaluate a request from scratch
    ///
    /// Incomplete input is a normal outcome and yields the Welcome state.
    pub fn evaluate(req: &EvaluateRequest) -> EvaluateResponse {
        let result = evaluate(req.unit_system, &req.fields);
        let outcome = if result.is_some() { "result" } else { "welcome" };

        debug!(
            unit_system = %req.unit_system,
            outcome,
            bmi = result.as_ref().map(|r| r.bmi),
            "Evaluated BMI"
        );
        Self::record(req.unit_system, outcome);

        EvaluateResponse::from_evaluation(result)
    }

    /// Classify a precomputed BMI value
    pub fn classify(bmi: f64) -> Result<ClassifyResponse, ApiError> {
        if !bmi.is_finite() || bmi < 0.0 {
            return Err(ApiError::Validation(
                "BMI must be a finite, non-negative number".to_string(),
            ));
        }
        Ok(ClassifyResponse::new(bmi))
    }

    fn record(unit_system: UnitSystem, outcome: &'static str) {
        metrics::counter!(
            EVALUATIONS_METRIC,
            "unit_system" => unit_system.as_str(),
            "outcome" => outcome
        )
        .increment(1);
    }
}
