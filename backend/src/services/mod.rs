//! Business logic services
//!
//! Services wrap the shared BMI engine with logging and metrics.

pub mod bmi;

pub use bmi::BmiService;
