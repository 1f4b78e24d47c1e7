//! BMI calculations module
//!
//! Provides the BMI engine: classification bands, metric and imperial
//! formulas, the ideal weight range for a height, and [`evaluate`], which
//! turns raw field text into either a [`BmiResult`] or "no result".
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: every evaluation starts from scratch, no hidden state
//! 2. **No result is not an error**: invalid input yields `None`
//! 3. **Same thresholds everywhere**: classification and ideal range share constants

use crate::input::{ImperialInput, MetricInput, RawFields};
use crate::units::{UnitSystem, CM_PER_METER, IMPERIAL_BMI_FACTOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the healthy band
pub const HEALTHY_MIN_BMI: f64 = 18.5;

/// Upper edge used for the ideal weight range
pub const IDEAL_MAX_BMI: f64 = 24.9;

/// Lower bound of the overweight band
pub const OVERWEIGHT_MIN_BMI: f64 = 25.0;

/// Lower bound of the obese band
pub const OBESE_MIN_BMI: f64 = 30.0;

// ============================================================================
// Classification
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl Classification {
    /// Get the BMI range for this category, lower bound inclusive
    pub fn range(&self) -> (f64, f64) {
        match self {
            Classification::Underweight => (0.0, HEALTHY_MIN_BMI),
            Classification::Healthy => (HEALTHY_MIN_BMI, OVERWEIGHT_MIN_BMI),
            Classification::Overweight => (OVERWEIGHT_MIN_BMI, OBESE_MIN_BMI),
            Classification::Obese => (OBESE_MIN_BMI, f64::INFINITY),
        }
    }

    /// Short human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Underweight => "Underweight",
            Classification::Healthy => "Healthy",
            Classification::Overweight => "Overweight",
            Classification::Obese => "Obese",
        }
    }

    /// Sentence shown alongside the result
    pub fn description(&self) -> &'static str {
        match self {
            Classification::Underweight => "Your BMI suggests you're underweight.",
            Classification::Healthy => "Your BMI suggests you're a healthy weight.",
            Classification::Overweight => "Your BMI suggests you're overweight.",
            Classification::Obese => "Your BMI suggests you're obese.",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> Classification {
    if bmi < HEALTHY_MIN_BMI {
        Classification::Underweight
    } else if bmi < OVERWEIGHT_MIN_BMI {
        Classification::Healthy
    } else if bmi < OBESE_MIN_BMI {
        Classification::Overweight
    } else {
        Classification::Obese
    }
}

// ============================================================================
// Formulas
// ============================================================================

/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_metric_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / CM_PER_METER;
    weight_kg / (height_m * height_m)
}

/// Formula: BMI = weight(lb) / height(in)² × 703
pub fn calculate_imperial_bmi(total_pounds: f64, total_inches: f64) -> f64 {
    (total_pounds / (total_inches * total_inches)) * IMPERIAL_BMI_FACTOR
}

/// Format to exactly one decimal place, `None` for NaN or infinities
///
/// Exact ties (x.25, x.75) round away from zero; `{:.1}` alone would round
/// them to even.
pub fn format_one_decimal(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0;
    if is_tie {
        let tenths = (value.abs() * 10.0).ceil().copysign(value);
        return Some(format!("{:.1}", tenths / 10.0));
    }
    Some(format!("{:.1}", value))
}

// ============================================================================
// Ideal Weight Range
// ============================================================================

/// Weight interval for a height that keeps BMI within 18.5..=24.9
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "units", rename_all = "lowercase")]
pub enum IdealRange {
    Metric { min_kg: f64, max_kg: f64 },
    Imperial { min_pounds: f64, max_pounds: f64 },
}

impl IdealRange {
    pub fn unit_system(&self) -> UnitSystem {
        match self {
            IdealRange::Metric { .. } => UnitSystem::Metric,
            IdealRange::Imperial { .. } => UnitSystem::Imperial,
        }
    }

    pub fn is_finite(&self) -> bool {
        let (min, max) = self.bounds();
        min.is_finite() && max.is_finite()
    }

    /// Bounds in the range's own unit (kg or pounds)
    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            IdealRange::Metric { min_kg, max_kg } => (min_kg, max_kg),
            IdealRange::Imperial {
                min_pounds,
                max_pounds,
            } => (min_pounds, max_pounds),
        }
    }
}

pub fn ideal_range_metric(height_cm: f64) -> IdealRange {
    let height_m = height_cm / CM_PER_METER;
    let height_m_sq = height_m * height_m;
    IdealRange::Metric {
        min_kg: HEALTHY_MIN_BMI * height_m_sq,
        max_kg: IDEAL_MAX_BMI * height_m_sq,
    }
}

pub fn ideal_range_imperial(total_inches: f64) -> IdealRange {
    let inches_sq = total_inches * total_inches;
    IdealRange::Imperial {
        min_pounds: HEALTHY_MIN_BMI * inches_sq / IMPERIAL_BMI_FACTOR,
        max_pounds: IDEAL_MAX_BMI * inches_sq / IMPERIAL_BMI_FACTOR,
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// BMI calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// Unrounded BMI value
    pub bmi: f64,
    /// BMI to one decimal place, e.g. "24.2"
    pub rounded_bmi: String,
    pub classification: Classification,
    /// Healthy weight interval for the entered height
    pub ideal_range: IdealRange,
}

impl BmiResult {
    /// `None` when the BMI or either range bound is not finite
    fn from_parts(bmi: f64, ideal_range: IdealRange) -> Option<Self> {
        if !ideal_range.is_finite() {
            return None;
        }
        let rounded_bmi = format_one_decimal(bmi)?;
        Some(Self {
            bmi,
            rounded_bmi,
            classification: classify_bmi(bmi),
            ideal_range,
        })
    }
}

pub fn evaluate_metric(input: &MetricInput) -> Option<BmiResult> {
    if !input.is_valid() {
        return None;
    }
    let bmi = calculate_metric_bmi(input.weight_kg, input.height_cm);
    BmiResult::from_parts(bmi, ideal_range_metric(input.height_cm))
}

pub fn evaluate_imperial(input: &ImperialInput) -> Option<BmiResult> {
    if !input.is_valid() {
        return None;
    }
    let total_inches = input.total_inches();
    let bmi = calculate_imperial_bmi(input.total_pounds(), total_inches);
    BmiResult::from_parts(bmi, ideal_range_imperial(total_inches))
}

/// Evaluate the fields of the active unit system
///
/// Fields of the other unit system are ignored. Returns `None` whenever the
/// input is incomplete, non-positive, or produces a non-finite BMI or
/// ideal range.
pub fn evaluate(unit_system: UnitSystem, fields: &RawFields) -> Option<BmiResult> {
    match unit_system {
        UnitSystem::Metric => MetricInput::from_raw(fields).and_then(|m| evaluate_metric(&m)),
        UnitSystem::Imperial => evaluate_imperial(&ImperialInput::from_raw(fields)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // =========================================================================
    // Classification Tests
    // =========================================================================

    #[rstest]
    #[case(0.0, Classification::Underweight)]
    #[case(18.49, Classification::Underweight)]
    #[case(18.5, Classification::Healthy)]
    #[case(24.99, Classification::Healthy)]
    #[case(25.0, Classification::Overweight)]
    #[case(29.99, Classification::Overweight)]
    #[case(30.0, Classification::Obese)]
    #[case(55.0, Classification::Obese)]
    fn test_classification_bands(#[case] bmi: f64, #[case] expected: Classification) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the classified band's range contains the BMI
        #[test]
        fn prop_classification_within_range(bmi in 0.0f64..80.0) {
            let (low, high) = classify_bmi(bmi).range();
            prop_assert!(bmi >= low && bmi < high);
        }
    }

    #[test]
    fn test_format_one_decimal() {
        assert_eq!(format_one_decimal(22.857).as_deref(), Some("22.9"));
        assert_eq!(format_one_decimal(24.0).as_deref(), Some("24.0"));
        assert_eq!(format_one_decimal(24.25).as_deref(), Some("24.3"));
        assert_eq!(format_one_decimal(24.75).as_deref(), Some("24.8"));
        assert_eq!(format_one_decimal(1.45).as_deref(), Some("1.4"));
        assert_eq!(format_one_decimal(f64::NAN), None);
        assert_eq!(format_one_decimal(f64::INFINITY), None);
    }

    // =========================================================================
    // Metric Tests
    // =========================================================================

    #[test]
    fn test_metric_example() {
        let result = evaluate(UnitSystem::Metric, &RawFields::metric("170", "70")).unwrap();
        assert!((result.bmi - 24.221).abs() < 0.001);
        assert_eq!(result.rounded_bmi, "24.2");
        assert_eq!(result.classification, Classification::Healthy);

        let (min, max) = result.ideal_range.bounds();
        assert_eq!(result.ideal_range.unit_system(), UnitSystem::Metric);
        assert!((min - 53.465).abs() < 0.001);
        assert!((max - 71.961).abs() < 0.001);
    }

    #[rstest]
    #[case("0", "70")]
    #[case("170", "0")]
    #[case("", "")]
    #[case("", "70")]
    #[case("170", "abc")]
    #[case("-170", "70")]
    fn test_metric_no_result(#[case] height: &str, #[case] weight: &str) {
        assert!(evaluate(UnitSystem::Metric, &RawFields::metric(height, weight)).is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: metric BMI matches weight / (height in m)²
        #[test]
        fn prop_metric_formula(height in 50.0f64..250.0, weight in 2.0f64..400.0) {
            let fields = RawFields::metric(height.to_string(), weight.to_string());
            let result = evaluate(UnitSystem::Metric, &fields).unwrap();
            let expected = weight / ((height / 100.0) * (height / 100.0));
            prop_assert!((result.bmi - expected).abs() < 1e-9);
        }

        /// Property: ideal range depends on height only
        #[test]
        fn prop_ideal_range_ignores_weight(
            height in 100.0f64..220.0,
            w1 in 30.0f64..100.0,
            w2 in 100.0f64..200.0
        ) {
            let a = evaluate(UnitSystem::Metric, &RawFields::metric(height.to_string(), w1.to_string())).unwrap();
            let b = evaluate(UnitSystem::Metric, &RawFields::metric(height.to_string(), w2.to_string())).unwrap();
            prop_assert_eq!(a.ideal_range, b.ideal_range);
        }

        /// Property: weights inside the ideal range classify as healthy
        #[test]
        fn prop_ideal_range_is_healthy(height in 100.0f64..220.0, t in 0.0f64..1.0) {
            let (min, max) = ideal_range_metric(height).bounds();
            let weight = min + (max - min) * t;
            let bmi = calculate_metric_bmi(weight, height);
            prop_assert!((HEALTHY_MIN_BMI - 1e-9..=IDEAL_MAX_BMI + 1e-9).contains(&bmi));
        }
    }

    // =========================================================================
    // Imperial Tests
    // =========================================================================

    #[test]
    fn test_imperial_example() {
        let fields = RawFields::imperial("5", "7", "11", "0");
        let result = evaluate(UnitSystem::Imperial, &fields).unwrap();
        let expected = (154.0 / (67.0 * 67.0)) * 703.0;
        assert!((result.bmi - expected).abs() < 1e-9);
        assert_eq!(result.rounded_bmi, "24.1");
        assert_eq!(result.classification, Classification::Healthy);

        let (min, max) = result.ideal_range.bounds();
        assert!((min - 18.5 * 4489.0 / 703.0).abs() < 1e-9);
        assert!((max - 24.9 * 4489.0 / 703.0).abs() < 1e-9);
    }

    #[test]
    fn test_imperial_single_subfield_is_enough() {
        let fields = RawFields::imperial("", "67", "", "154");
        let result = evaluate(UnitSystem::Imperial, &fields).unwrap();
        assert_eq!(result.rounded_bmi, "24.1");
    }

    #[test]
    fn test_imperial_zero_height_is_no_result() {
        let fields = RawFields::imperial("0", "0", "5", "0");
        assert!(evaluate(UnitSystem::Imperial, &fields).is_none());
    }

    #[test]
    fn test_imperial_zero_weight_is_no_result() {
        let fields = RawFields::imperial("6", "0", "", "");
        assert!(evaluate(UnitSystem::Imperial, &fields).is_none());
    }

    // =========================================================================
    // Engine Behaviour Tests
    // =========================================================================

    #[test]
    fn test_inactive_unit_fields_are_ignored() {
        let mut fields = RawFields::metric("170", "70");
        fields.height_feet = "5".to_string();
        fields.weight_stone = "11".to_string();

        let metric = evaluate(UnitSystem::Metric, &fields).unwrap();
        assert_eq!(metric.rounded_bmi, "24.2");

        let imperial = evaluate(UnitSystem::Imperial, &fields).unwrap();
        assert_eq!(imperial.ideal_range.unit_system(), UnitSystem::Imperial);

        let only_metric = RawFields::metric("170", "70");
        assert!(evaluate(UnitSystem::Imperial, &only_metric).is_none());
    }

    #[test]
    fn test_tiny_height_overflow_is_no_result() {
        // height^2 underflows to zero and the BMI becomes infinite
        let fields = RawFields::metric("1e-200", "70");
        assert!(evaluate(UnitSystem::Metric, &fields).is_none());
    }

    #[test]
    fn test_huge_height_overflow_is_no_result() {
        // height^2 overflows: BMI collapses to 0.0 but the ideal range is infinite
        let metric = RawFields::metric("1e200", "70");
        assert!(evaluate(UnitSystem::Metric, &metric).is_none());

        let imperial = RawFields::imperial("1e308", "", "10", "");
        assert!(evaluate(UnitSystem::Imperial, &imperial).is_none());
    }

    #[test]
    fn test_ideal_range_finiteness() {
        assert!(ideal_range_metric(170.0).is_finite());
        assert!(!ideal_range_metric(1e200).is_finite());
        assert!(!ideal_range_imperial(1e200).is_finite());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let fields = RawFields::imperial("6", "1", "14", "3");
        let first = evaluate(UnitSystem::Imperial, &fields);
        let second = evaluate(UnitSystem::Imperial, &fields);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serializes_with_tagged_range() {
        let result = evaluate(UnitSystem::Metric, &RawFields::metric("170", "70")).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["rounded_bmi"], "24.2");
        assert_eq!(json["classification"], "healthy");
        assert_eq!(json["ideal_range"]["units"], "metric");
        assert!(json["ideal_range"]["min_kg"].is_number());
    }
}
