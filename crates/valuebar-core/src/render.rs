//! Per-frame drawing of a bar onto a host canvas
//!
//! The host supplies a [`Canvas`]; the pipeline recomputes the bar extent
//! from the current value and issues, in order: min/max labels, the bar,
//! the border, then the value label on a translucent overlay.
//!
//! Labels are drawn vertically (rotated 270°), centred on the bar height.

use crate::format::{BarColorFormatter, ValueTextFormatter};
use crate::geometry::{GeometryError, GeometryMapper};
use crate::range::RangeModel;
use crate::types::{BarRect, Color};

/// Labels are spaced by this multiple of the measured text height
const TEXT_SPACING_FACTOR: f32 = 1.5;

/// Alpha of the overlay behind the value label
pub const OVERLAY_ALPHA: u8 = 120;

/// Font family hint for labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Typeface {
    #[default]
    Default,
    Bold,
    Monospace,
    Serif,
}

/// How a label is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text size in pixels
    pub size: f32,
    pub color: Color,
    pub typeface: Typeface,
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            typeface: Typeface::Default,
        }
    }
}

/// Measured bounds of a string (unrotated)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Drawing surface supplied by the host
pub trait Canvas {
    fn fill_rect(&mut self, rect: BarRect, color: Color);

    fn stroke_rect(&mut self, rect: BarRect, color: Color, width: f32);

    /// Draw `text` rotated by 270° around its baseline origin `(x, y)`,
    /// so it reads bottom to top
    fn draw_text_vertical(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);

    fn measure_text(&self, text: &str, style: &TextStyle) -> TextExtent;
}

/// Visual settings of a bar
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub draw_border: bool,
    /// Border stroke width in pixels
    pub border_width: f32,
    pub border_color: Color,
    pub draw_value_text: bool,
    pub draw_min_max_text: bool,
    pub value_text: TextStyle,
    pub min_max_text: TextStyle,
    pub overlay_color: Color,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            draw_border: true,
            border_width: 2.0,
            border_color: Color::BLACK,
            draw_value_text: true,
            draw_min_max_text: true,
            value_text: TextStyle::new(18.0, Color::WHITE),
            min_max_text: TextStyle::new(18.0, Color::WHITE),
            overlay_color: Color::WHITE.with_alpha8(OVERLAY_ALPHA),
        }
    }
}

/// Everything needed to draw one frame
pub struct RenderPipeline<'a> {
    pub range: &'a RangeModel,
    pub mapper: GeometryMapper,
    pub appearance: &'a Appearance,
    pub color_formatter: &'a dyn BarColorFormatter,
    pub text_formatter: &'a dyn ValueTextFormatter,
}

impl RenderPipeline<'_> {
    /// Draw the frame and return the bar rectangle that was drawn
    ///
    /// Nothing is drawn when the geometry is invalid.
    pub fn render(&self, canvas: &mut dyn Canvas) -> Result<BarRect, GeometryError> {
        let bar = self.mapper.bar_rect(self.range)?;

        if self.appearance.draw_min_max_text {
            self.draw_min_max_text(canvas);
        }

        let color = self
            .color_formatter
            .color(self.range.value(), self.range.max(), self.range.min());
        canvas.fill_rect(bar, color);

        if self.appearance.draw_border {
            canvas.stroke_rect(
                self.mapper.frame_rect(),
                self.appearance.border_color,
                self.appearance.border_width,
            );
        }

        if self.appearance.draw_value_text {
            self.draw_value_text(canvas, bar);
        }

        Ok(bar)
    }

    fn at_minimum(&self) -> bool {
        self.range.value() <= self.range.min()
    }

    fn center_y(&self) -> f32 {
        self.mapper.size().height / 2.0
    }

    fn draw_min_max_text(&self, canvas: &mut dyn Canvas) {
        let style = &self.appearance.min_max_text;
        let offset = self.mapper.offset();
        let width = self.mapper.size().width;

        let max = self.text_formatter.max_text(self.range.max());
        let min = self.text_formatter.min_text(self.range.min());

        let text_height = canvas.measure_text(&min, style).height * TEXT_SPACING_FACTOR;

        let max_width = canvas.measure_text(&max, style).width;
        canvas.draw_text_vertical(
            &max,
            width - offset - text_height / 2.0,
            self.center_y() + max_width / 2.0,
            style,
        );

        // The value label takes the min slot unless hidden or at the minimum
        if !self.appearance.draw_value_text || self.at_minimum() {
            let min_width = canvas.measure_text(&min, style).width;
            canvas.draw_text_vertical(
                &min,
                offset + text_height,
                self.center_y() + min_width / 2.0,
                style,
            );
        }
    }

    fn draw_value_text(&self, canvas: &mut dyn Canvas, bar: BarRect) {
        if self.at_minimum() && self.appearance.draw_min_max_text {
            return;
        }

        let style = &self.appearance.value_text;
        let text = self.text_formatter.value_text(
            self.range.value(),
            self.range.max(),
            self.range.min(),
        );

        let extent = canvas.measure_text(&text, style);
        let text_height = extent.height * TEXT_SPACING_FACTOR;

        let min_x = self.mapper.offset() + text_height;
        let x = (bar.right - text_height / 2.0).max(min_x);
        let y = self.center_y() + extent.width / 2.0;

        let overlay = BarRect::new(
            x - text_height / 1.5 - text_height / 2.0,
            bar.top,
            bar.right,
            bar.bottom,
        );
        if overlay.width() > 0.0 {
            canvas.fill_rect(overlay, self.appearance.overlay_color);
        }

        canvas.draw_text_vertical(&text, x, y, style);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::format::{DecimalTextFormatter, SolidColor};
    use crate::types::Size;

    /// Canvas that records draw calls; text is 10px per char, 10px high
    #[derive(Debug, Default)]
    pub(crate) struct RecordingCanvas {
        pub ops: Vec<Op>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Op {
        Fill(BarRect, Color),
        Stroke(BarRect, Color, f32),
        Text(String, f32, f32),
    }

    impl RecordingCanvas {
        pub(crate) fn texts(&self) -> Vec<String> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(text, _, _) => Some(text.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, rect: BarRect, color: Color) {
            self.ops.push(Op::Fill(rect, color));
        }

        fn stroke_rect(&mut self, rect: BarRect, color: Color, width: f32) {
            self.ops.push(Op::Stroke(rect, color, width));
        }

        fn draw_text_vertical(&mut self, text: &str, x: f32, y: f32, _style: &TextStyle) {
            self.ops.push(Op::Text(text.to_string(), x, y));
        }

        fn measure_text(&self, text: &str, _style: &TextStyle) -> TextExtent {
            TextExtent {
                width: text.chars().count() as f32 * 10.0,
                height: 10.0,
            }
        }
    }

    fn render_with(range: &RangeModel, appearance: &Appearance, offset: f32) -> RecordingCanvas {
        let pipeline = RenderPipeline {
            range,
            mapper: GeometryMapper::new(Size::new(300.0, 60.0), offset),
            appearance,
            color_formatter: &SolidColor(Color::RED),
            text_formatter: &DecimalTextFormatter::default(),
        };
        let mut canvas = RecordingCanvas::default();
        pipeline.render(&mut canvas).unwrap();
        canvas
    }

    fn range_at(value: f32) -> RangeModel {
        let mut range = RangeModel::new(0.0, 1000.0).unwrap();
        range.set_value(value);
        range
    }

    #[test]
    fn test_draw_order() {
        let canvas = render_with(&range_at(900.0), &Appearance::default(), 0.0);
        let kinds: Vec<&str> = canvas
            .ops
            .iter()
            .map(|op| match op {
                Op::Fill(..) => "fill",
                Op::Stroke(..) => "stroke",
                Op::Text(..) => "text",
            })
            .collect();
        // max label, bar, border, overlay, value label
        assert_eq!(kinds, vec!["text", "fill", "stroke", "fill", "text"]);
    }

    #[test]
    fn test_bar_fill_matches_value() {
        let canvas = render_with(&range_at(900.0), &Appearance::default(), 0.0);
        assert!(canvas
            .ops
            .contains(&Op::Fill(BarRect::new(0.0, 0.0, 270.0, 60.0), Color::RED)));
    }

    #[test]
    fn test_value_label_position() {
        let canvas = render_with(&range_at(900.0), &Appearance::default(), 0.0);
        // "900.00" is 60px wide, text height 10 * 1.5 = 15
        let value_label = canvas.ops.last().unwrap();
        assert_eq!(value_label, &Op::Text("900.00".to_string(), 262.5, 60.0));
    }

    #[test]
    fn test_value_label_kept_inside_left_edge() {
        let canvas = render_with(&range_at(10.0), &Appearance::default(), 0.0);
        match canvas.ops.last().unwrap() {
            Op::Text(text, x, _) => {
                assert_eq!(text, "10.00");
                assert_eq!(*x, 15.0);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_min_label_replaces_value_label_at_minimum() {
        let canvas = render_with(&range_at(0.0), &Appearance::default(), 0.0);
        assert_eq!(canvas.texts(), vec!["1,000.00", "0.00"]);
    }

    #[test]
    fn test_min_label_drawn_when_value_text_hidden() {
        let appearance = Appearance {
            draw_value_text: false,
            ..Default::default()
        };
        let canvas = render_with(&range_at(500.0), &appearance, 0.0);
        assert_eq!(canvas.texts(), vec!["1,000.00", "0.00"]);
    }

    #[test]
    fn test_value_label_at_minimum_without_bounds() {
        let appearance = Appearance {
            draw_min_max_text: false,
            ..Default::default()
        };
        let canvas = render_with(&range_at(0.0), &appearance, 0.0);
        assert_eq!(canvas.texts(), vec!["0.00"]);
    }

    #[test]
    fn test_border_toggle_and_offset() {
        let appearance = Appearance {
            draw_border: false,
            ..Default::default()
        };
        let canvas = render_with(&range_at(500.0), &appearance, 0.0);
        assert!(!canvas.ops.iter().any(|op| matches!(op, Op::Stroke(..))));

        let canvas = render_with(&range_at(500.0), &Appearance::default(), 5.0);
        assert!(canvas.ops.contains(&Op::Stroke(
            BarRect::new(5.0, 5.0, 295.0, 55.0),
            Color::BLACK,
            2.0
        )));
    }

    #[test]
    fn test_invalid_geometry_draws_nothing() {
        let range = RangeModel::new(3.0, 3.0).unwrap();
        let appearance = Appearance::default();
        let pipeline = RenderPipeline {
            range: &range,
            mapper: GeometryMapper::new(Size::new(300.0, 60.0), 0.0),
            appearance: &appearance,
            color_formatter: &SolidColor::default(),
            text_formatter: &DecimalTextFormatter::default(),
        };
        let mut canvas = RecordingCanvas::default();
        assert!(pipeline.render(&mut canvas).is_err());
        assert!(canvas.ops.is_empty());
    }
}
