//! Unit system selection and imperial display helpers
//!
//! The calculator works in one of two unit systems. Metric input is
//! centimeters and kilograms; imperial input is split into feet + inches
//! and stone + pounds, which are summed into total inches and total pounds
//! before any arithmetic happens.

use crate::errors::BmiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Centimeters in one meter
pub const CM_PER_METER: f64 = 100.0;

/// Inches in one foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Pounds in one stone
pub const POUNDS_PER_STONE: f64 = 14.0;

/// Conversion factor between lb/in² and kg/m² for the imperial BMI formula
pub const IMPERIAL_BMI_FACTOR: f64 = 703.0;

// ============================================================================
// Unit System
// ============================================================================

/// Which set of input fields and output formatting is active
///
/// Serializes lowercase; deserializes through [`FromStr`](std::str::FromStr),
/// so JSON accepts the same names and aliases as every other adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" | "uk" => Ok(UnitSystem::Imperial),
            _ => Err(BmiError::UnknownUnitSystem(s.to_string())),
        }
    }
}

impl TryFrom<String> for UnitSystem {
    type Error = BmiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Stone + Pounds Display Helper
// ============================================================================

/// A weight in pounds split into whole stone and rounded pounds for display
///
/// `pounds` is rounded after the stone split, so values just under a stone
/// boundary display as 14 pounds (e.g. 13.6 lbs is `0st 14lbs`). The value
/// is intentionally not carried into the next stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StonePounds {
    pub stone: i64,
    pub pounds: i64,
}

impl StonePounds {
    /// Split a total pound value into stone and pounds
    pub fn from_total_pounds(total_pounds: f64) -> Self {
        let stone = (total_pounds / POUNDS_PER_STONE).floor();
        let pounds = (total_pounds - stone * POUNDS_PER_STONE).round();
        Self {
            stone: stone as i64,
            pounds: pounds as i64,
        }
    }
}

impl fmt::Display for StonePounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}st {}lbs", self.stone, self.pounds)
    }
}

/// Format a pound value as `"{stone}st {pounds}lbs"`
pub fn format_stone_pounds(total_pounds: f64) -> String {
    StonePounds::from_total_pounds(total_pounds).to_string()
}
