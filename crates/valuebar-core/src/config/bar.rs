//! Declarative bar settings
//!
//! Stands in for layout attributes: everything a host would otherwise set
//! through individual setters can be described in YAML. Sizes are in dp,
//! colors are `#RRGGBB` strings.

use serde::{Deserialize, Serialize};

use crate::format::ColorPreset;
use crate::range::{DEFAULT_INTERVAL, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_VALUE};
use crate::render::Typeface;
use crate::types::Color;

/// Default text size for labels, in dp
pub const DEFAULT_TEXT_SIZE_DP: f32 = 18.0;
/// Default border stroke width, in dp
pub const DEFAULT_BORDER_WIDTH_DP: f32 = 2.0;

/// Settings for one bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueBarConfig {
    pub min: f32,
    pub max: f32,
    pub value: f32,
    /// Snapping interval, `<= 0` disables snapping
    pub interval: f32,
    /// Fill color used by the `solid` preset
    pub color: String,
    pub color_preset: ColorPreset,
    pub border: BorderConfig,
    pub text: TextConfig,
    /// Inset between widget edge and bar, in pixels
    pub offset: f32,
    pub touch_enabled: bool,
}

impl Default for ValueBarConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            value: DEFAULT_VALUE,
            interval: DEFAULT_INTERVAL,
            color: "#278CE6".to_string(),
            color_preset: ColorPreset::Solid,
            border: BorderConfig::default(),
            text: TextConfig::default(),
            offset: 0.0,
            touch_enabled: true,
        }
    }
}

/// Border section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    pub enabled: bool,
    pub width_dp: f32,
    pub color: String,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width_dp: DEFAULT_BORDER_WIDTH_DP,
            color: "#000000".to_string(),
        }
    }
}

/// Label section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub draw_value: bool,
    pub draw_min_max: bool,
    pub value_size_dp: f32,
    pub min_max_size_dp: f32,
    pub value_typeface: Typeface,
    pub min_max_typeface: Typeface,
    pub color: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            draw_value: true,
            draw_min_max: true,
            value_size_dp: DEFAULT_TEXT_SIZE_DP,
            min_max_size_dp: DEFAULT_TEXT_SIZE_DP,
            value_typeface: Typeface::Default,
            min_max_typeface: Typeface::Default,
            color: "#FFFFFF".to_string(),
        }
    }
}

/// Parse a config color, falling back when malformed
pub fn parse_color(hex: &str, fallback: Color) -> Color {
    match Color::parse_hex(hex) {
        Some(color) => color,
        None => {
            log::warn!("parse_color: Invalid hex color '{}', using {}", hex, fallback.to_hex());
            fallback
        }
    }
}
