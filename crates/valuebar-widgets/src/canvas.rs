//! Canvas Program for value bar rendering and pointer input
//!
//! [`ValueBarCanvas`] draws a [`ValueBar`] through [`FrameCanvas`], an
//! adapter from the engine's drawing trait to an iced [`Frame`]. Pointer
//! input is translated into widget-local [`PointerEvent`]s and published
//! through a callback closure; the application feeds them back into
//! [`ValueBar::handle_pointer`] from its update function.

use std::f32::consts::PI;

use crate::theme::{to_iced_color, to_iced_font, GLYPH_HEIGHT_FACTOR, GLYPH_WIDTH_FACTOR};
use iced::alignment::Vertical;
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{mouse, touch, Point, Rectangle, Size, Theme, Vector};
use valuebar_core::render::{Canvas, TextExtent, TextStyle};
use valuebar_core::{BarRect, Color, PointerEvent, ValueBar};

// =============================================================================
// Frame adapter
// =============================================================================

/// Engine [`Canvas`] backed by an iced canvas frame
pub struct FrameCanvas<'f> {
    frame: &'f mut Frame,
}

impl<'f> FrameCanvas<'f> {
    pub fn new(frame: &'f mut Frame) -> Self {
        Self { frame }
    }
}

/// Approximate extent of `text` at `size` pixels
pub fn estimate_text_extent(text: &str, size: f32) -> TextExtent {
    TextExtent {
        width: text.chars().count() as f32 * size * GLYPH_WIDTH_FACTOR,
        height: size * GLYPH_HEIGHT_FACTOR,
    }
}

fn rect_origin(rect: BarRect) -> Point {
    Point::new(rect.left, rect.top)
}

fn rect_size(rect: BarRect) -> Size {
    Size::new(rect.width(), rect.height())
}

impl Canvas for FrameCanvas<'_> {
    fn fill_rect(&mut self, rect: BarRect, color: Color) {
        self.frame
            .fill_rectangle(rect_origin(rect), rect_size(rect), to_iced_color(color));
    }

    fn stroke_rect(&mut self, rect: BarRect, color: Color, width: f32) {
        self.frame.stroke(
            &Path::rectangle(rect_origin(rect), rect_size(rect)),
            Stroke::default()
                .with_color(to_iced_color(color))
                .with_width(width),
        );
    }

    fn draw_text_vertical(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let content = text.to_string();
        let style = *style;
        self.frame.with_save(|frame| {
            frame.translate(Vector::new(x, y));
            frame.rotate(PI * 1.5);
            frame.fill_text(Text {
                content,
                position: Point::ORIGIN,
                size: style.size.into(),
                color: to_iced_color(style.color),
                font: to_iced_font(style.typeface),
                align_y: Vertical::Bottom.into(),
                ..Text::default()
            });
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> TextExtent {
        estimate_text_extent(text, style.size)
    }
}

// =============================================================================
// Pointer translation
// =============================================================================

/// Pointer input published by the canvas
///
/// Carries the canvas size so the application can keep the bar's layout
/// in sync before handling the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarInput {
    pub pointer: PointerEvent,
    pub width: f32,
    pub height: f32,
}

/// Canvas state tracking an in-progress press
#[derive(Debug, Clone, Copy, Default)]
pub struct BarInteraction {
    /// Whether a press started on this canvas and has not been released
    pub pressed: bool,
}

fn local(position: Point, bounds: Rectangle) -> (f32, f32) {
    (position.x - bounds.x, position.y - bounds.y)
}

/// Translate an iced event into a widget-local pointer event
///
/// Presses only start inside `bounds`; once pressed, moves and the release
/// are reported wherever they happen so a drag can leave the bar.
pub fn translate_event(
    interaction: &mut BarInteraction,
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
) -> Option<PointerEvent> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let position = cursor.position_in(bounds)?;
            interaction.pressed = true;
            Some(PointerEvent::down(position.x, position.y))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) if interaction.pressed => {
            let (x, y) = local(*position, bounds);
            Some(PointerEvent::moved(x, y))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if interaction.pressed => {
            interaction.pressed = false;
            match cursor.position() {
                Some(position) => {
                    let (x, y) = local(position, bounds);
                    Some(PointerEvent::up(x, y))
                }
                None => Some(PointerEvent::cancel()),
            }
        }
        Event::Mouse(mouse::Event::CursorLeft) if interaction.pressed => {
            interaction.pressed = false;
            Some(PointerEvent::cancel())
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            if !bounds.contains(*position) {
                return None;
            }
            interaction.pressed = true;
            let (x, y) = local(*position, bounds);
            Some(PointerEvent::down(x, y))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) if interaction.pressed => {
            let (x, y) = local(*position, bounds);
            Some(PointerEvent::moved(x, y))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) if interaction.pressed => {
            interaction.pressed = false;
            let (x, y) = local(*position, bounds);
            Some(PointerEvent::up(x, y))
        }
        Event::Touch(touch::Event::FingerLost { .. }) if interaction.pressed => {
            interaction.pressed = false;
            Some(PointerEvent::cancel())
        }
        _ => None,
    }
}

// =============================================================================
// Value Bar Canvas Program
// =============================================================================

/// Canvas program drawing one value bar
///
/// Takes a callback closure `on_input` that wraps pointer input into the
/// application's message type.
pub struct ValueBarCanvas<'a, Message, F>
where
    F: Fn(BarInput) -> Message,
{
    pub bar: &'a ValueBar,
    pub on_input: F,
}

impl<'a, Message, F> Program<Message> for ValueBarCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(BarInput) -> Message,
{
    type State = BarInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if !self.bar.is_touch_enabled() {
            interaction.pressed = false;
            return None;
        }

        let pointer = translate_event(interaction, event, bounds, cursor)?;
        let input = BarInput {
            pointer,
            width: bounds.width,
            height: bounds.height,
        };
        Some(canvas::Action::publish((self.on_input)(input)).and_capture())
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.pressed {
            mouse::Interaction::Grabbing
        } else if self.bar.is_touch_enabled() && cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), crate::theme::TRACK_BACKGROUND);

        let size = valuebar_core::Size::new(bounds.width, bounds.height);
        self.bar.render(&mut FrameCanvas::new(&mut frame), size);

        vec![frame.into_geometry()]
    }
}
