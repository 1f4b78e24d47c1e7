//! BMI Calculator WASM Module
//!
//! This crate provides WebAssembly bindings so the browser page can drive
//! the BMI engine directly. Views cross the boundary as JSON strings.

use bmi_calculator_shared::{
    classify_bmi as classify, evaluate, BmiError, Calculator, EvaluateResponse, Field,
    RawFields, UnitSystem, View,
};
use wasm_bindgen::prelude::*;

fn to_js(err: BmiError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn view_to_json(view: &View) -> Result<String, BmiError> {
    Ok(serde_json::to_string(view)?)
}

fn evaluate_json(unit_system: &str, fields_json: &str) -> Result<String, BmiError> {
    let unit_system: UnitSystem = unit_system.parse()?;
    let fields: RawFields = serde_json::from_str(fields_json)?;
    let response = EvaluateResponse::from_evaluation(evaluate(unit_system, &fields));
    Ok(serde_json::to_string(&response)?)
}

/// Evaluate raw field values for a unit system
///
/// `fields_json` is an object keyed by field id (`height`, `weight`,
/// `height-ft`, `height-in`, `weight-st`, `weight-lbs`). Returns the
/// serialized evaluation: `{"state":"welcome"}` or a result with its
/// render payload.
#[wasm_bindgen]
pub fn evaluate_bmi(unit_system: &str, fields_json: &str) -> Result<String, JsValue> {
    evaluate_json(unit_system, fields_json).map_err(to_js)
}

/// Classification label for a BMI value
#[wasm_bindgen]
pub fn classify_bmi(bmi: f64) -> String {
    classify(bmi).label().to_string()
}

/// Stateful calculator for a page with live inputs
#[wasm_bindgen]
pub struct BmiCalculator {
    inner: Calculator,
}

#[wasm_bindgen]
impl BmiCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> BmiCalculator {
        BmiCalculator {
            inner: Calculator::new(),
        }
    }

    /// Update one field by element id and return the new view as JSON
    pub fn set_field(&mut self, id: &str, value: &str) -> Result<String, JsValue> {
        self.set_field_json(id, value).map_err(to_js)
    }

    /// Switch unit system; clears all fields and returns the Welcome view
    pub fn select_unit_system(&mut self, name: &str) -> Result<String, JsValue> {
        self.select_unit_system_json(name).map_err(to_js)
    }

    pub fn view_json(&self) -> Result<String, JsValue> {
        view_to_json(self.inner.view()).map_err(to_js)
    }

    pub fn is_showing_result(&self) -> bool {
        self.inner.is_showing_result()
    }

    pub fn unit_system(&self) -> String {
        self.inner.unit_system().to_string()
    }
}

impl BmiCalculator {
    fn set_field_json(&mut self, id: &str, value: &str) -> Result<String, BmiError> {
        let field: Field = id.parse()?;
        view_to_json(self.inner.set_field(field, value))
    }

    fn select_unit_system_json(&mut self, name: &str) -> Result<String, BmiError> {
        let unit_system: UnitSystem = name.parse()?;
        view_to_json(self.inner.select_unit_system(unit_system))
    }
}

impl Default for BmiCalculator {
    fn default() -> Self {
        Self::new()
    }
}
