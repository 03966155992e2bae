// File: crates/sparkline-core/src/theme.rs
// Summary: Default colors and the two-stop stroke/fill gradient.

use serde::Deserialize;

/// Gradient start (blue).
pub const GRADIENT_START: &str = "#3b82f6";
/// Gradient end (purple).
pub const GRADIENT_END: &str = "#8b5cf6";
/// Plot background (light gray).
pub const BACKGROUND: &str = "#f3f4f6";
/// Stop opacity of the fill under the line.
pub const FILL_OPACITY: f64 = 0.3;
/// Color of the hovered-point marker body.
pub const HOVER_MARKER: &str = "#ffffff";

/// Two colors spanning the line from first to last sample.
/// Deserializes from a two-element array: `["#3b82f6", "#8b5cf6"]`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct GradientColors {
    pub start: String,
    pub end: String,
}

impl GradientColors {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }
}

impl From<(String, String)> for GradientColors {
    fn from((start, end): (String, String)) -> Self {
        Self { start, end }
    }
}

impl Default for GradientColors {
    fn default() -> Self {
        Self::new(GRADIENT_START, GRADIENT_END)
    }
}
