//! Conversions between engine types and iced types
//!
//! Also holds the text metrics used to approximate label extents, since
//! a canvas frame cannot measure text before drawing it.

use iced::font::{Family, Weight};
use iced::Font;
use valuebar_core::{Color, Typeface};

/// Average glyph advance as a fraction of the font size
pub const GLYPH_WIDTH_FACTOR: f32 = 0.6;

/// Cap height as a fraction of the font size
pub const GLYPH_HEIGHT_FACTOR: f32 = 0.75;

/// Background behind bars in the demo and default views
pub const TRACK_BACKGROUND: iced::Color = iced::Color::from_rgb(0.12, 0.12, 0.14);

/// Convert an engine color to an iced color
pub fn to_iced_color(color: Color) -> iced::Color {
    iced::Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Convert an iced color to an engine color
pub fn from_iced_color(color: iced::Color) -> Color {
    Color {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

/// Font used for a label typeface
pub fn to_iced_font(typeface: Typeface) -> Font {
    match typeface {
        Typeface::Default => Font::DEFAULT,
        Typeface::Bold => Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        },
        Typeface::Monospace => Font::MONOSPACE,
        Typeface::Serif => Font {
            family: Family::Serif,
            ..Font::DEFAULT
        },
    }
}
