//! Raw input fields and the parsing policy applied to them
//!
//! The presentation layer hands over whatever text is currently typed into
//! the six measurement fields. Parsing is lenient: leading whitespace is
//! skipped and the longest numeric prefix is used, so `"170cm"` reads as 170.
//! What happens when a field does not parse depends on the unit system:
//!
//! - metric height/weight are *missing* (no default)
//! - imperial sub-components (feet, inches, stone, pounds) default to 0

use crate::errors::BmiError;
use crate::units::{UnitSystem, INCHES_PER_FOOT, POUNDS_PER_STONE};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::OnceLock;

// ============================================================================
// Number Parsing
// ============================================================================

fn number_prefix() -> &'static regex_lite::Regex {
    static PATTERN: OnceLock<regex_lite::Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        regex_lite::Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("number prefix pattern is valid")
    })
}

/// Parse the leading decimal number of a raw field value
///
/// Returns `None` when there is no numeric prefix or the value is not finite.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let matched = number_prefix().find(trimmed)?;
    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

// ============================================================================
// Fields
// ============================================================================

/// One of the six measurement inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "height")]
    HeightCm,
    #[serde(rename = "weight")]
    WeightKg,
    #[serde(rename = "height-ft")]
    HeightFeet,
    #[serde(rename = "height-in")]
    HeightInches,
    #[serde(rename = "weight-st")]
    WeightStone,
    #[serde(rename = "weight-lbs")]
    WeightPounds,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::HeightCm,
        Field::WeightKg,
        Field::HeightFeet,
        Field::HeightInches,
        Field::WeightStone,
        Field::WeightPounds,
    ];

    /// Stable element id used by the presentation layer
    pub fn id(&self) -> &'static str {
        match self {
            Field::HeightCm => "height",
            Field::WeightKg => "weight",
            Field::HeightFeet => "height-ft",
            Field::HeightInches => "height-in",
            Field::WeightStone => "weight-st",
            Field::WeightPounds => "weight-lbs",
        }
    }

    /// The unit system this field belongs to
    pub fn unit_system(&self) -> UnitSystem {
        match self {
            Field::HeightCm | Field::WeightKg => UnitSystem::Metric,
            _ => UnitSystem::Imperial,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Field {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "height" | "height-cm" | "height_cm" => Ok(Field::HeightCm),
            "weight" | "weight-kg" | "weight_kg" => Ok(Field::WeightKg),
            "height-ft" | "height_ft" | "height_feet" => Ok(Field::HeightFeet),
            "height-in" | "height_in" | "height_inches" => Ok(Field::HeightInches),
            "weight-st" | "weight_st" | "weight_stone" => Ok(Field::WeightStone),
            "weight-lbs" | "weight_lbs" | "weight_pounds" => Ok(Field::WeightPounds),
            _ => Err(BmiError::UnknownField(s.to_string())),
        }
    }
}

/// Accept a JSON string, number, or null as raw field text
fn deserialize_raw<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}

/// Current raw text of all six fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFields {
    #[serde(default, rename = "height", alias = "height_cm", deserialize_with = "deserialize_raw")]
    pub height_cm: String,
    #[serde(default, rename = "weight", alias = "weight_kg", deserialize_with = "deserialize_raw")]
    pub weight_kg: String,
    #[serde(default, rename = "height-ft", alias = "height_ft", deserialize_with = "deserialize_raw")]
    pub height_feet: String,
    #[serde(default, rename = "height-in", alias = "height_in", deserialize_with = "deserialize_raw")]
    pub height_inches: String,
    #[serde(default, rename = "weight-st", alias = "weight_st", deserialize_with = "deserialize_raw")]
    pub weight_stone: String,
    #[serde(default, rename = "weight-lbs", alias = "weight_lbs", deserialize_with = "deserialize_raw")]
    pub weight_pounds: String,
}

impl RawFields {
    /// Metric fields from raw text
    pub fn metric(height_cm: impl Into<String>, weight_kg: impl Into<String>) -> Self {
        Self {
            height_cm: height_cm.into(),
            weight_kg: weight_kg.into(),
            ..Self::default()
        }
    }

    /// Imperial fields from raw text
    pub fn imperial(
        feet: impl Into<String>,
        inches: impl Into<String>,
        stone: impl Into<String>,
        pounds: impl Into<String>,
    ) -> Self {
        Self {
            height_feet: feet.into(),
            height_inches: inches.into(),
            weight_stone: stone.into(),
            weight_pounds: pounds.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::HeightCm => &self.height_cm,
            Field::WeightKg => &self.weight_kg,
            Field::HeightFeet => &self.height_feet,
            Field::HeightInches => &self.height_inches,
            Field::WeightStone => &self.weight_stone,
            Field::WeightPounds => &self.weight_pounds,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::HeightCm => &mut self.height_cm,
            Field::WeightKg => &mut self.weight_kg,
            Field::HeightFeet => &mut self.height_feet,
            Field::HeightInches => &mut self.height_inches,
            Field::WeightStone => &mut self.weight_stone,
            Field::WeightPounds => &mut self.weight_pounds,
        };
        *slot = value.into();
    }

    /// Reset every field to empty text
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

// ============================================================================
// Parsed Inputs
// ============================================================================

/// Parsed metric measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricInput {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl MetricInput {
    /// Parse both metric fields, `None` if either is missing
    pub fn from_raw(fields: &RawFields) -> Option<Self> {
        Some(Self {
            height_cm: parse_number(&fields.height_cm)?,
            weight_kg: parse_number(&fields.weight_kg)?,
        })
    }

    /// Both dimensions strictly positive
    pub fn is_valid(&self) -> bool {
        self.height_cm > 0.0 && self.weight_kg > 0.0
    }
}

/// Parsed imperial measurements, unparseable components read as 0
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImperialInput {
    pub height_feet: f64,
    pub height_inches: f64,
    pub weight_stone: f64,
    pub weight_pounds: f64,
}

impl ImperialInput {
    pub fn from_raw(fields: &RawFields) -> Self {
        let component = |raw: &str| parse_number(raw).unwrap_or(0.0);
        Self {
            height_feet: component(&fields.height_feet),
            height_inches: component(&fields.height_inches),
            weight_stone: component(&fields.weight_stone),
            weight_pounds: component(&fields.weight_pounds),
        }
    }

    pub fn total_inches(&self) -> f64 {
        self.height_feet * INCHES_PER_FOOT + self.height_inches
    }

    pub fn total_pounds(&self) -> f64 {
        self.weight_stone * POUNDS_PER_STONE + self.weight_pounds
    }

    /// Neither dimension left entirely at zero, and both totals positive
    ///
    /// Only one sub-field per dimension needs to be filled in.
    pub fn is_valid(&self) -> bool {
        let height_blank = self.height_feet == 0.0 && self.height_inches == 0.0;
        let weight_blank = self.weight_stone == 0.0 && self.weight_pounds == 0.0;
        !height_blank && !weight_blank && self.total_inches() > 0.0 && self.total_pounds() > 0.0
    }
}
