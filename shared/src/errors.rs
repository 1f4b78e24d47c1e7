//! Error types for the BMI calculator
//!
//! Incomplete or invalid measurements are never errors: the engine reports
//! them as "no result". These errors only cover malformed requests at the
//! adapter boundaries (unknown unit system names, unknown field ids, bad JSON).

use thiserror::Error;

/// Boundary error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BmiError {
    #[error("Unknown unit system: {0}")]
    UnknownUnitSystem(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<serde_json::Error> for BmiError {
    fn from(err: serde_json::Error) -> Self {
        BmiError::InvalidPayload(err.to_string())
    }
}
