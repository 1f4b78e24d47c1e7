//! API request and response types

use crate::health_metrics::{classify_bmi, evaluate, BmiResult, Classification};
use crate::input::RawFields;
use crate::render::{render, RenderPayload};
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};

/// Evaluate the current field values in a unit system
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default)]
    pub fields: RawFields,
}

impl EvaluateRequest {
    pub fn new(unit_system: UnitSystem, fields: RawFields) -> Self {
        Self {
            unit_system,
            fields,
        }
    }
}

/// Either the placeholder state or a full result with its render payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum EvaluateResponse {
    Welcome,
    Result {
        result: BmiResult,
        render: RenderPayload,
    },
}

impl EvaluateResponse {
    pub fn from_evaluation(result: Option<BmiResult>) -> Self {
        match result {
            None => EvaluateResponse::Welcome,
            Some(result) => {
                let render = render(&result);
                EvaluateResponse::Result { result, render }
            }
        }
    }
}

impl From<&EvaluateRequest> for EvaluateResponse {
    fn from(req: &EvaluateRequest) -> Self {
        Self::from_evaluation(evaluate(req.unit_system, &req.fields))
    }
}

/// Query for classifying a precomputed BMI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyQuery {
    pub bmi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub bmi: f64,
    pub classification: Classification,
    pub description: String,
}

impl ClassifyResponse {
    pub fn new(bmi: f64) -> Self {
        let classification = classify_bmi(bmi);
        Self {
            bmi,
            classification,
            description: classification.description().to_string(),
        }
    }
}
