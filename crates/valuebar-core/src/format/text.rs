//! Label text strategies

use super::number::NumberFormat;

/// Produces the strings drawn on a bar
///
/// Bounds and the live value are formatted separately so they can use
/// different number formats (e.g. a currency suffix only on the bounds).
pub trait ValueTextFormatter {
    /// Label for the current value
    fn value_text(&self, value: f32, max: f32, min: f32) -> String;

    /// Label for the lower bound
    fn min_text(&self, min: f32) -> String;

    /// Label for the upper bound
    fn max_text(&self, max: f32) -> String;
}

/// Formats value and bounds with one [`NumberFormat`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecimalTextFormatter {
    format: NumberFormat,
}

impl DecimalTextFormatter {
    pub fn new(format: NumberFormat) -> Self {
        Self { format }
    }
}

impl ValueTextFormatter for DecimalTextFormatter {
    fn value_text(&self, value: f32, _max: f32, _min: f32) -> String {
        self.format.format(value)
    }

    fn min_text(&self, min: f32) -> String {
        self.format.format(min)
    }

    fn max_text(&self, max: f32) -> String {
        self.format.format(max)
    }
}
