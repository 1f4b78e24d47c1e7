//! BMI Calculator Shared Library
//!
//! This crate contains the BMI engine and the types shared by the
//! backend and WASM modules.

pub mod calculator;
pub mod errors;
pub mod health_metrics;
pub mod input;
pub mod render;
pub mod types;
pub mod units;

// Re-export commonly used items
pub use calculator::Calculator;
pub use errors::*;
pub use health_metrics::*;
pub use input::{Field, ImperialInput, MetricInput, RawFields};
pub use render::{RenderPayload, View};
pub use types::*;
pub use units::*;
