//! Calculator session: current unit system, raw fields and displayed view
//!
//! Two states: Welcome (no result shown) and Result. Every field change
//! re-evaluates from scratch; every unit system selection clears all fields
//! and returns to Welcome.

use crate::health_metrics::{evaluate, BmiResult};
use crate::input::{Field, RawFields};
use crate::render::View;
use crate::units::UnitSystem;

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    unit_system: UnitSystem,
    fields: RawFields,
    view: View,
}

impl Calculator {
    /// Metric, empty fields, Welcome
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit_system(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            ..Self::default()
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn fields(&self) -> &RawFields {
        &self.fields
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_showing_result(&self) -> bool {
        self.view.is_result()
    }

    /// Evaluate the current fields without touching the view
    pub fn evaluate(&self) -> Option<BmiResult> {
        evaluate(self.unit_system, &self.fields)
    }

    /// Store a raw field value and redraw
    ///
    /// Fields of the inactive unit system are stored but do not affect the view.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> &View {
        self.fields.set(field, value);
        self.refresh()
    }

    /// Switch unit system, clearing every field
    ///
    /// Always lands in Welcome, including when the same system is reselected.
    pub fn select_unit_system(&mut self, unit_system: UnitSystem) -> &View {
        self.unit_system = unit_system;
        self.fields.clear();
        self.view = View::Welcome;
        &self.view
    }

    fn refresh(&mut self) -> &View {
        let result = self.evaluate();
        self.view = View::from_evaluation(result.as_ref());
        &self.view
    }
}
