//! Bar color strategies
//!
//! A [`BarColorFormatter`] picks the fill color from the current value and
//! bounds. Closures `Fn(value, max, min) -> Color` work as formatters too.

use crate::types::Color;

/// Default bar color (`rgb(39, 140, 230)`)
pub fn default_bar_color() -> Color {
    Color::from_rgb8(39, 140, 230)
}

/// Chooses the bar fill color for a value
pub trait BarColorFormatter {
    /// Color for `value` within `min..=max`
    fn color(&self, value: f32, max: f32, min: f32) -> Color;
}

impl<F> BarColorFormatter for F
where
    F: Fn(f32, f32, f32) -> Color,
{
    fn color(&self, value: f32, max: f32, min: f32) -> Color {
        self(value, max, min)
    }
}

/// Full saturation/brightness color for a hue in degrees
///
/// Hues outside `[0, 360)` (including NaN) fall back to 0° (red).
fn hue_color(hue: f32) -> Color {
    let hue = if (0.0..360.0).contains(&hue) { hue } else { 0.0 };
    Color::from_hsv(hue, 1.0, 1.0)
}

/// Position of `value` in the range, `0.0` when the range is empty
fn range_fraction(value: f32, max: f32, min: f32) -> f32 {
    let span = max - min;
    if span <= 0.0 {
        return 0.0;
    }
    (value - min) / span
}

/// Constant color regardless of value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor(pub Color);

impl Default for SolidColor {
    fn default() -> Self {
        Self(default_bar_color())
    }
}

impl BarColorFormatter for SolidColor {
    fn color(&self, _value: f32, _max: f32, _min: f32) -> Color {
        self.0
    }
}

/// Red at `min` sweeping to green at `max`
///
/// `hue = 120 * (value - min) / (max - min)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedToGreen;

impl BarColorFormatter for RedToGreen {
    fn color(&self, value: f32, max: f32, min: f32) -> Color {
        hue_color(120.0 * range_fraction(value, max, min))
    }
}

/// Green at `min` sweeping to red at `max`
///
/// `hue = 120 * ((max - min) - (value - min)) / (max - min)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreenToRed;

impl BarColorFormatter for GreenToRed {
    fn color(&self, value: f32, max: f32, min: f32) -> Color {
        hue_color(120.0 * (1.0 - range_fraction(value, max, min)))
    }
}

/// Red-to-green sweep normalised by `max` alone
///
/// `hue = 120 - 120 * (max - value) / max`. Matches [`RedToGreen`] only
/// when `min == 0`; with other minimums the sweep starts part-way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedToGreenByMax;

impl BarColorFormatter for RedToGreenByMax {
    fn color(&self, value: f32, max: f32, _min: f32) -> Color {
        if max == 0.0 {
            return hue_color(0.0);
        }
        hue_color(120.0 - (120.0 * (max - value)) / max)
    }
}

/// Built-in color strategies selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPreset {
    /// Single color from the config
    #[default]
    Solid,
    RedToGreen,
    GreenToRed,
    RedToGreenByMax,
}
