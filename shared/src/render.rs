//! Render payloads for the presentation layer
//!
//! The presentation layer is a passive renderer: it receives a [`View`] and
//! redraws. Text is plain; emphasis of the range is left to the renderer,
//! which gets the bare range separately in [`RenderPayload::ideal_range`].

use crate::health_metrics::{format_one_decimal, BmiResult, IdealRange};
use crate::units::format_stone_pounds;
use serde::{Deserialize, Serialize};

/// Text the result panel displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPayload {
    pub rounded_bmi: String,
    pub description_text: String,
    /// Range alone, e.g. "53.5kg - 72.0kg"
    pub ideal_range: String,
    /// Full sentence, e.g. "Your ideal weight is between 53.5kg - 72.0kg."
    pub ideal_range_text: String,
}

/// What the presentation layer should currently show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum View {
    /// Placeholder shown while there is no result
    #[default]
    Welcome,
    Result(RenderPayload),
}

impl View {
    pub fn from_evaluation(result: Option<&BmiResult>) -> Self {
        result.map_or(View::Welcome, |r| View::Result(render(r)))
    }

    pub fn is_result(&self) -> bool {
        matches!(self, View::Result(_))
    }

    pub fn payload(&self) -> Option<&RenderPayload> {
        match self {
            View::Welcome => None,
            View::Result(payload) => Some(payload),
        }
    }
}

/// Format an ideal range in its own unit system
///
/// Evaluated ranges are always finite; a non-finite bound renders empty.
pub fn format_ideal_range(range: &IdealRange) -> String {
    match *range {
        IdealRange::Metric { min_kg, max_kg } => format!(
            "{}kg - {}kg",
            format_one_decimal(min_kg).unwrap_or_default(),
            format_one_decimal(max_kg).unwrap_or_default()
        ),
        IdealRange::Imperial {
            min_pounds,
            max_pounds,
        } => format!(
            "{} - {}",
            format_stone_pounds(min_pounds),
            format_stone_pounds(max_pounds)
        ),
    }
}

pub fn render(result: &BmiResult) -> RenderPayload {
    let ideal_range = format_ideal_range(&result.ideal_range);
    RenderPayload {
        rounded_bmi: result.rounded_bmi.clone(),
        description_text: result.classification.description().to_string(),
        ideal_range_text: format!("Your ideal weight is between {}.", ideal_range),
        ideal_range,
    }
}
