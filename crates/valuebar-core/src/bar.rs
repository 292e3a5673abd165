//! The value bar widget state
//!
//! [`ValueBar`] ties the engine together: it owns the range, the animation
//! and gesture controllers, the formatters and the appearance, and exposes
//! the host-facing API. It never draws by itself; the host calls
//! [`ValueBar::render`] with its canvas on every frame and
//! [`ValueBar::tick`] while [`ValueBar::is_animating`] is true.
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use valuebar_core::{ValueBar, PointerEvent};
//!
//! let mut bar = ValueBar::new();
//! bar.set_min_max(0.0, 1000.0).unwrap();
//! bar.set_size(300.0, 40.0);
//!
//! let start = Instant::now();
//! bar.animate_at(0.0, 900.0, Duration::from_millis(1500), start);
//! bar.tick(start + Duration::from_millis(1500));
//! assert_eq!(bar.value(), 900.0);
//! assert_eq!(bar.bar().unwrap().right, 270.0);
//!
//! let outcome = bar.handle_pointer(PointerEvent::down(150.0, 20.0));
//! assert_eq!(outcome.selection().unwrap().value, 500.0);
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::animation::{AnimationController, AnimationMode, TickStatus};
use crate::config::{parse_color, ValueBarConfig};
use crate::format::{
    default_bar_color, BarColorFormatter, ColorFormatter, SolidColor, TextFormatter,
    ValueTextFormatter,
};
use crate::geometry::{GeometryError, GeometryMapper};
use crate::gesture::{
    GestureController, GestureDetector, GestureOutcome, PointerEvent, SelectionListener,
};
use crate::range::{RangeError, RangeModel};
use crate::render::{Appearance, Canvas, RenderPipeline, Typeface};
use crate::types::{BarRect, Color, Size};
use crate::units;

/// Global counter for generating unique bar IDs
static BAR_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// An interactive, animatable bar gauge
pub struct ValueBar {
    /// Stable unique ID (never changes after creation)
    id: u64,
    range: RangeModel,
    /// Last size reported by the host layout or drawn at
    size: Cell<Size>,
    /// Inset between widget edge and bar, in pixels
    offset: f32,
    appearance: Appearance,
    color_formatter: Rc<dyn BarColorFormatter>,
    text_formatter: Rc<dyn ValueTextFormatter>,
    animation: AnimationController,
    gesture: GestureController,
    redraw_requested: bool,
}

impl Default for ValueBar {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ValueBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueBar")
            .field("id", &self.id)
            .field("range", &self.range)
            .field("size", &self.size.get())
            .field("offset", &self.offset)
            .field("appearance", &self.appearance)
            .field("animation", &self.animation)
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

impl ValueBar {
    /// Create a bar with default range (`0..=100`, value 75, interval 1)
    ///
    /// Text sizes and border width are converted from dp with the global
    /// display metrics, see [`units::init`].
    pub fn new() -> Self {
        let mut appearance = Appearance::default();
        let converter = units::converter();
        appearance.border_width = converter.dp_to_px(crate::config::DEFAULT_BORDER_WIDTH_DP);
        appearance.value_text.size = converter.dp_to_px(crate::config::DEFAULT_TEXT_SIZE_DP);
        appearance.min_max_text.size = converter.dp_to_px(crate::config::DEFAULT_TEXT_SIZE_DP);

        Self {
            id: BAR_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            range: RangeModel::default(),
            size: Cell::new(Size::ZERO),
            offset: 0.0,
            appearance,
            color_formatter: ColorFormatter::Default.resolve(),
            text_formatter: TextFormatter::Default.resolve(),
            animation: AnimationController::default(),
            gesture: GestureController::default(),
            redraw_requested: true,
        }
    }

    /// Create a bar from declarative settings
    ///
    /// Invalid bounds are logged and the default range kept.
    pub fn from_config(config: &ValueBarConfig) -> Self {
        let mut bar = Self::new();

        if let Err(e) = bar.set_min_max(config.min, config.max) {
            log::warn!("from_config: {}, keeping default range", e);
        }
        bar.set_value(config.value);
        bar.set_interval(config.interval);

        let solid = parse_color(&config.color, default_bar_color());
        bar.set_color_formatter(ColorFormatter::from_preset(config.color_preset, solid));

        bar.set_draw_border(config.border.enabled);
        bar.set_border_width(units::dp_to_px(config.border.width_dp));
        bar.set_border_color(parse_color(&config.border.color, Color::BLACK));

        let text_color = parse_color(&config.text.color, Color::WHITE);
        bar.set_draw_value_text(config.text.draw_value);
        bar.set_draw_min_max_text(config.text.draw_min_max);
        bar.set_value_text_size(config.text.value_size_dp);
        bar.set_min_max_text_size(config.text.min_max_size_dp);
        bar.set_value_text_typeface(config.text.value_typeface);
        bar.set_min_max_text_typeface(config.text.min_max_typeface);
        bar.appearance.value_text.color = text_color;
        bar.appearance.min_max_text.color = text_color;

        bar.set_offset(config.offset);
        bar.set_touch_enabled(config.touch_enabled);
        bar
    }

    /// Get the bar's stable ID
    pub fn id(&self) -> u64 {
        self.id
    }

    // ─────────────────────────────────────────────────────────────────────
    // Range
    // ─────────────────────────────────────────────────────────────────────

    /// Set the bounds; the current value is re-clamped into them
    pub fn set_min_max(&mut self, min: f32, max: f32) -> Result<(), RangeError> {
        self.range.set_min_max(min, max)?;
        self.request_redraw();
        Ok(())
    }

    pub fn min(&self) -> f32 {
        self.range.min()
    }

    pub fn max(&self) -> f32 {
        self.range.max()
    }

    /// Set the displayed value, clamped into `[min, max]`
    ///
    /// A running animation keeps control and overwrites it on its next tick.
    pub fn set_value(&mut self, value: f32) {
        self.range.set_value(value);
        self.request_redraw();
    }

    pub fn value(&self) -> f32 {
        self.range.value()
    }

    /// Set the interval touch selections snap to; `<= 0` disables snapping
    pub fn set_interval(&mut self, interval: f32) {
        self.range.set_interval(interval);
    }

    pub fn interval(&self) -> f32 {
        self.range.interval()
    }

    pub fn range(&self) -> &RangeModel {
        &self.range
    }

    // ─────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────

    /// Animate from `from` to `to` (both clamped into range), starting now
    pub fn animate(&mut self, from: f32, to: f32, duration_ms: u64) {
        self.animate_at(from, to, Duration::from_millis(duration_ms), Instant::now());
    }

    /// Animate from the minimum up to `to`, starting now
    pub fn animate_up(&mut self, to: f32, duration_ms: u64) {
        self.animate_up_at(to, Duration::from_millis(duration_ms), Instant::now());
    }

    /// Animate from the current value down to `to`, starting now
    pub fn animate_down(&mut self, to: f32, duration_ms: u64) {
        self.animate_down_at(to, Duration::from_millis(duration_ms), Instant::now());
    }

    /// [`animate`](Self::animate) with an explicit start time
    pub fn animate_at(&mut self, from: f32, to: f32, duration: Duration, now: Instant) {
        let from = self.range.clamp(from);
        let to = self.range.clamp(to);
        self.start_animation(AnimationMode::Explicit, from, to, duration, now);
    }

    /// [`animate_up`](Self::animate_up) with an explicit start time
    pub fn animate_up_at(&mut self, to: f32, duration: Duration, now: Instant) {
        let from = self.range.min();
        let to = self.range.clamp(to);
        self.start_animation(AnimationMode::Up, from, to, duration, now);
    }

    /// [`animate_down`](Self::animate_down) with an explicit start time
    pub fn animate_down_at(&mut self, to: f32, duration: Duration, now: Instant) {
        let from = self.range.value();
        let to = self.range.clamp(to);
        self.start_animation(AnimationMode::Down, from, to, duration, now);
    }

    fn start_animation(
        &mut self,
        mode: AnimationMode,
        from: f32,
        to: f32,
        duration: Duration,
        now: Instant,
    ) {
        log::debug!(
            "animate: bar {} {:?} {} -> {} over {:?}",
            self.id,
            mode,
            from,
            to,
            duration
        );
        self.range.set_value(from);
        self.animation.start_mode(mode, from, to, duration, now);
        self.request_redraw();
    }

    /// Advance a running animation to `now`
    ///
    /// Returns `None` when no animation is running.
    pub fn tick(&mut self, now: Instant) -> Option<TickStatus> {
        let (value, status) = self.animation.tick(now)?;
        self.range.set_value(value);
        self.request_redraw();
        Some(status)
    }

    /// Whether the host should keep scheduling frames
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    // ─────────────────────────────────────────────────────────────────────
    // Appearance
    // ─────────────────────────────────────────────────────────────────────

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn set_draw_border(&mut self, enabled: bool) {
        self.appearance.draw_border = enabled;
        self.request_redraw();
    }

    /// Border stroke width in pixels
    pub fn set_border_width(&mut self, width: f32) {
        self.appearance.border_width = width.max(0.0);
        self.request_redraw();
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.appearance.border_color = color;
        self.request_redraw();
    }

    /// Use a single fill color (replaces any color formatter)
    pub fn set_color(&mut self, color: Color) {
        self.set_color_formatter(ColorFormatter::color(SolidColor(color)));
    }

    /// Set the fill color strategy; `Formatter::Default` restores the
    /// default solid color
    pub fn set_color_formatter(&mut self, formatter: ColorFormatter) {
        self.color_formatter = formatter.resolve();
        self.request_redraw();
    }

    /// Set the label strategy; `Formatter::Default` restores the default
    /// `###,###,##0.00` formatting
    pub fn set_value_text_formatter(&mut self, formatter: TextFormatter) {
        self.text_formatter = formatter.resolve();
        self.request_redraw();
    }

    /// Fill color for the current value
    pub fn current_color(&self) -> Color {
        self.color_formatter
            .color(self.range.value(), self.range.max(), self.range.min())
    }

    pub fn set_draw_value_text(&mut self, enabled: bool) {
        self.appearance.draw_value_text = enabled;
        self.request_redraw();
    }

    pub fn is_draw_value_text_enabled(&self) -> bool {
        self.appearance.draw_value_text
    }

    pub fn set_draw_min_max_text(&mut self, enabled: bool) {
        self.appearance.draw_min_max_text = enabled;
        self.request_redraw();
    }

    pub fn is_draw_min_max_text_enabled(&self) -> bool {
        self.appearance.draw_min_max_text
    }

    /// Value label size in dp
    pub fn set_value_text_size(&mut self, size_dp: f32) {
        self.appearance.value_text.size = units::dp_to_px(size_dp);
        self.request_redraw();
    }

    pub fn set_value_text_typeface(&mut self, typeface: Typeface) {
        self.appearance.value_text.typeface = typeface;
        self.request_redraw();
    }

    pub fn set_value_text_color(&mut self, color: Color) {
        self.appearance.value_text.color = color;
        self.request_redraw();
    }

    /// Min/max label size in dp
    pub fn set_min_max_text_size(&mut self, size_dp: f32) {
        self.appearance.min_max_text.size = units::dp_to_px(size_dp);
        self.request_redraw();
    }

    pub fn set_min_max_text_typeface(&mut self, typeface: Typeface) {
        self.appearance.min_max_text.typeface = typeface;
        self.request_redraw();
    }

    pub fn set_min_max_text_color(&mut self, color: Color) {
        self.appearance.min_max_text.color = color;
        self.request_redraw();
    }

    /// Inset in pixels between widget edge and bar; also the width of the
    /// band along the edges where presses are ignored
    pub fn set_offset(&mut self, offset: f32) {
        if offset < 0.0 || offset.is_nan() {
            log::warn!("set_offset: offset must be >= 0, got {}; using 0", offset);
            self.offset = 0.0;
        } else {
            self.offset = offset;
        }
        self.request_redraw();
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    // ─────────────────────────────────────────────────────────────────────
    // Interaction
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.gesture.set_enabled(enabled);
    }

    pub fn is_touch_enabled(&self) -> bool {
        self.gesture.is_enabled()
    }

    /// Attach a recognizer that sees events first and may consume them
    pub fn set_gesture_detector(&mut self, detector: Option<Box<dyn GestureDetector>>) {
        self.gesture.set_detector(detector);
    }

    /// Register the selection listener (last registration wins)
    pub fn set_selection_listener(&mut self, listener: Option<Box<dyn SelectionListener>>) {
        self.gesture.set_listener(listener);
    }

    /// Feed a pointer event in widget-local coordinates
    ///
    /// A selection made while an animation runs stops the animation, so
    /// the selected value is the one that stays.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureOutcome {
        let mapper = self.mapper();
        let outcome = self
            .gesture
            .handle(event, &mut self.range, &mapper, self.id);
        if outcome.changed_value() {
            if self.animation.cancel() {
                log::debug!("handle_pointer: selection on bar {} stopped its animation", self.id);
            }
            self.request_redraw();
        }
        outcome
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Geometry and rendering
    // ─────────────────────────────────────────────────────────────────────

    /// Size-changed callback from the host layout
    pub fn set_size(&mut self, width: f32, height: f32) {
        let size = Size::new(width.max(0.0), height.max(0.0));
        if size != self.size.get() {
            self.size.set(size);
            self.request_redraw();
        }
    }

    pub fn size(&self) -> Size {
        self.size.get()
    }

    fn mapper(&self) -> GeometryMapper {
        GeometryMapper::new(self.size.get(), self.offset)
    }

    /// Bar rectangle for the current value and last known size
    pub fn bar(&self) -> Result<BarRect, GeometryError> {
        self.mapper().bar_rect(&self.range)
    }

    /// Value at horizontal position `x` (unsnapped, clamped to range)
    pub fn value_for_position(&self, x: f32) -> Result<f32, GeometryError> {
        self.mapper().inverse(&self.range, x)
    }

    /// Draw the bar at `size` onto `canvas`
    ///
    /// `size` becomes the bar's known size, so [`bar`](Self::bar) and
    /// [`value_for_position`](Self::value_for_position) follow what was
    /// drawn. Returns the drawn bar rectangle, or `None` (with a warning)
    /// when the range or size leaves nothing to draw.
    pub fn render(&self, canvas: &mut dyn Canvas, size: Size) -> Option<BarRect> {
        self.size.set(Size::new(size.width.max(0.0), size.height.max(0.0)));

        let pipeline = RenderPipeline {
            range: &self.range,
            mapper: GeometryMapper::new(size, self.offset),
            appearance: &self.appearance,
            color_formatter: self.color_formatter.as_ref(),
            text_formatter: self.text_formatter.as_ref(),
        };

        match pipeline.render(canvas) {
            Ok(bar) => Some(bar),
            Err(e) => {
                log::warn!("render: bar {} not drawn: {}", self.id, e);
                None
            }
        }
    }

    /// Mark the bar as needing a redraw
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Consume the pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BorderConfig;
    use crate::format::{ColorPreset, Formatter, RedToGreen};
    use crate::gesture::Selection;
    use crate::render::tests::RecordingCanvas;
    use std::cell::RefCell;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn sized_bar(min: f32, max: f32) -> ValueBar {
        let mut bar = ValueBar::new();
        bar.set_min_max(min, max).unwrap();
        bar.set_size(300.0, 40.0);
        bar
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ValueBar::new().id(), ValueBar::new().id());
    }

    #[test]
    fn test_defaults() {
        let bar = ValueBar::new();
        assert_eq!(bar.min(), 0.0);
        assert_eq!(bar.max(), 100.0);
        assert_eq!(bar.value(), 75.0);
        assert_eq!(bar.interval(), 1.0);
        assert!(bar.is_touch_enabled());
        assert!(!bar.is_animating());
        assert_eq!(bar.current_color(), Color::from_rgb8(39, 140, 230));
    }

    #[test]
    fn test_animation_scenario() {
        let mut bar = sized_bar(0.0, 1000.0);
        bar.set_value(0.0);

        let start = Instant::now();
        bar.animate_at(0.0, 900.0, ms(1500), start);
        assert_eq!(bar.tick(start), Some(TickStatus::Running));
        assert_eq!(bar.value(), 0.0);

        bar.tick(start + ms(750));
        assert!((bar.value() - 450.0).abs() < 0.01);

        assert_eq!(bar.tick(start + ms(1500)), Some(TickStatus::Finished));
        assert_eq!(bar.value(), 900.0);
        assert!((bar.bar().unwrap().width() - 270.0).abs() < 1e-3);
        assert!(!bar.is_animating());
        assert_eq!(bar.tick(start + ms(1600)), None);
    }

    #[test]
    fn test_animate_clamps_endpoints() {
        let mut bar = sized_bar(0.0, 100.0);
        let start = Instant::now();
        bar.animate_at(-50.0, 250.0, ms(100), start);
        assert_eq!(bar.value(), 0.0);
        bar.tick(start + ms(100));
        assert_eq!(bar.value(), 100.0);
    }

    #[test]
    fn test_animate_up_starts_at_min() {
        let mut bar = sized_bar(10.0, 1000.0);
        bar.set_value(600.0);
        let start = Instant::now();
        bar.animate_up_at(800.0, ms(1500), start);
        assert_eq!(bar.value(), 10.0);
        let session = *bar.animation().session().unwrap();
        assert_eq!(session.mode, AnimationMode::Up);
        assert_eq!((session.from, session.to), (10.0, 800.0));
        bar.tick(start + ms(1500));
        assert_eq!(bar.value(), 800.0);
    }

    #[test]
    fn test_animate_up_clamps_target() {
        let mut bar = sized_bar(0.0, 1000.0);
        let start = Instant::now();
        bar.animate_up_at(5000.0, ms(10), start);
        bar.tick(start + ms(10));
        assert_eq!(bar.value(), 1000.0);
    }

    #[test]
    fn test_animate_down_starts_at_current_value() {
        let mut bar = sized_bar(0.0, 1000.0);
        bar.set_value(900.0);
        let start = Instant::now();
        bar.animate_down_at(-100.0, ms(1500), start);
        assert_eq!(bar.value(), 900.0);

        let mut last = bar.value();
        for frame in 1..=10 {
            bar.tick(start + ms(frame * 150));
            assert!(bar.value() <= last);
            last = bar.value();
        }
        assert_eq!(bar.value(), 0.0);
    }

    #[test]
    fn test_new_animation_supersedes_old() {
        let mut bar = sized_bar(0.0, 1000.0);
        let start = Instant::now();
        bar.animate_at(0.0, 900.0, ms(1500), start);
        bar.tick(start + ms(500));
        let midway = bar.value();

        bar.animate_down_at(0.0, ms(200), start + ms(500));
        assert_eq!(bar.value(), midway);
        bar.tick(start + ms(700));
        assert_eq!(bar.value(), 0.0);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_set_value_clamps_and_requests_redraw() {
        let mut bar = ValueBar::new();
        bar.take_redraw_request();
        bar.set_value(500.0);
        assert_eq!(bar.value(), 100.0);
        assert!(bar.take_redraw_request());
        assert!(!bar.take_redraw_request());
    }

    #[test]
    fn test_set_min_max_rejects_inverted() {
        let mut bar = ValueBar::new();
        assert!(bar.set_min_max(10.0, 0.0).is_err());
        assert_eq!((bar.min(), bar.max()), (0.0, 100.0));
    }

    #[test]
    fn test_color_formatter_reset_is_idempotent() {
        let mut bar = ValueBar::new();
        bar.set_color_formatter(ColorFormatter::color(RedToGreen));
        bar.set_value(100.0);
        assert_ne!(bar.current_color(), Color::from_rgb8(39, 140, 230));

        bar.set_color_formatter(Formatter::Default);
        let once = bar.current_color();
        bar.set_color_formatter(Formatter::Default);
        assert_eq!(bar.current_color(), once);
        assert_eq!(once, Color::from_rgb8(39, 140, 230));
    }

    #[test]
    fn test_set_color_replaces_formatter() {
        let mut bar = ValueBar::new();
        bar.set_color_formatter(ColorFormatter::color(RedToGreen));
        bar.set_color(Color::BLACK);
        assert_eq!(bar.current_color(), Color::BLACK);
    }

    #[test]
    fn test_text_formatter_reset() {
        struct Percent;
        impl ValueTextFormatter for Percent {
            fn value_text(&self, value: f32, max: f32, min: f32) -> String {
                format!("{:.0}%", (value - min) / (max - min) * 100.0)
            }
            fn min_text(&self, _min: f32) -> String {
                "0%".to_string()
            }
            fn max_text(&self, _max: f32) -> String {
                "100%".to_string()
            }
        }

        let mut bar = sized_bar(0.0, 200.0);
        bar.set_value(50.0);
        bar.set_value_text_formatter(TextFormatter::text(Percent));
        let mut canvas = RecordingCanvas::default();
        bar.render(&mut canvas, bar.size());
        assert_eq!(canvas.texts(), vec!["100%", "25%"]);

        bar.set_value_text_formatter(Formatter::Default);
        let mut canvas = RecordingCanvas::default();
        bar.render(&mut canvas, bar.size());
        assert_eq!(canvas.texts(), vec!["200.00", "50.00"]);
    }

    #[test]
    fn test_pointer_drag_updates_value_and_notifies_listener() {
        #[derive(Default)]
        struct Log(Rc<RefCell<Vec<(u64, f32, bool)>>>);
        impl SelectionListener for Log {
            fn on_selection_update(&mut self, selection: &Selection) {
                self.0.borrow_mut().push((selection.bar_id, selection.value, false));
            }
            fn on_value_selected(&mut self, selection: &Selection) {
                self.0.borrow_mut().push((selection.bar_id, selection.value, true));
            }
        }

        let mut bar = sized_bar(0.0, 100.0);
        bar.set_interval(10.0);
        let events = Rc::new(RefCell::new(Vec::new()));
        bar.set_selection_listener(Some(Box::new(Log(Rc::clone(&events)))));

        bar.take_redraw_request();
        bar.handle_pointer(PointerEvent::down(162.0, 20.0));
        assert!(bar.is_dragging());
        assert!(bar.take_redraw_request());
        bar.handle_pointer(PointerEvent::up(165.0, 20.0));

        let id = bar.id();
        // 162px → 54 → 50, 165px → 55 → 60
        assert_eq!(*events.borrow(), vec![(id, 50.0, false), (id, 60.0, true)]);
        assert_eq!(bar.value(), 60.0);
    }

    #[test]
    fn test_touch_disabled_passes_through() {
        let mut bar = sized_bar(0.0, 100.0);
        bar.set_touch_enabled(false);
        let outcome = bar.handle_pointer(PointerEvent::down(30.0, 0.0));
        assert_eq!(outcome, GestureOutcome::PassThrough);
        assert_eq!(bar.value(), 75.0);
    }

    #[test]
    fn test_value_for_position() {
        let mut bar = sized_bar(0.0, 1000.0);
        assert_eq!(bar.value_for_position(150.0).unwrap(), 500.0);
        assert_eq!(bar.value_for_position(-1.0).unwrap(), 0.0);
        assert_eq!(bar.value_for_position(301.0).unwrap(), 1000.0);

        bar.set_offset(10.0);
        assert_eq!(bar.value_for_position(10.0).unwrap(), 0.0);
        assert_eq!(bar.value_for_position(150.0).unwrap(), 500.0);
    }

    #[test]
    fn test_negative_offset_is_reset() {
        let mut bar = ValueBar::new();
        bar.set_offset(-4.0);
        assert_eq!(bar.offset(), 0.0);
    }

    #[test]
    fn test_selection_during_animation_wins() {
        let mut bar = sized_bar(0.0, 1000.0);
        let start = Instant::now();
        bar.animate_at(0.0, 900.0, ms(1500), start);

        bar.handle_pointer(PointerEvent::down(30.0, 20.0));
        assert!(!bar.is_animating());
        let outcome = bar.handle_pointer(PointerEvent::up(30.0, 20.0));
        assert_eq!(outcome.selection().map(|s| s.value), Some(100.0));

        assert_eq!(bar.tick(start + ms(1500)), None);
        assert_eq!(bar.value(), 100.0);
    }

    #[test]
    fn test_ignored_press_keeps_animation() {
        let mut bar = sized_bar(0.0, 1000.0);
        bar.set_offset(10.0);
        let start = Instant::now();
        bar.animate_at(0.0, 900.0, ms(1500), start);

        let outcome = bar.handle_pointer(PointerEvent::down(5.0, 20.0));
        assert_eq!(outcome, GestureOutcome::Ignored);
        assert!(bar.is_animating());
    }

    #[test]
    fn test_render_records_size() {
        let mut bar = ValueBar::new();
        bar.set_min_max(0.0, 1000.0).unwrap();
        bar.set_value(900.0);
        assert!(bar.bar().is_err());

        let mut canvas = RecordingCanvas::default();
        let drawn = bar.render(&mut canvas, Size::new(300.0, 40.0)).unwrap();
        assert_eq!(bar.size(), Size::new(300.0, 40.0));
        assert_eq!(bar.bar().unwrap(), drawn);
        assert_eq!(bar.value_for_position(150.0).unwrap(), 500.0);
    }

    #[test]
    fn test_bar_without_size_is_error() {
        let bar = ValueBar::new();
        assert!(matches!(bar.bar(), Err(GeometryError::EmptySpan { .. })));
    }

    #[test]
    fn test_render_reports_drawn_bar() {
        let mut bar = sized_bar(0.0, 1000.0);
        bar.set_value(900.0);
        let mut canvas = RecordingCanvas::default();
        let drawn = bar.render(&mut canvas, Size::new(300.0, 40.0)).unwrap();
        assert!((drawn.right - 270.0).abs() < 1e-3);

        let mut canvas = RecordingCanvas::default();
        assert!(bar.render(&mut canvas, Size::ZERO).is_none());
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = ValueBarConfig {
            min: 0.0,
            max: 1000.0,
            value: 250.0,
            interval: 5.0,
            color_preset: ColorPreset::RedToGreen,
            border: BorderConfig {
                enabled: false,
                ..Default::default()
            },
            offset: 3.0,
            touch_enabled: false,
            ..Default::default()
        };
        let bar = ValueBar::from_config(&config);
        assert_eq!((bar.min(), bar.max(), bar.value()), (0.0, 1000.0, 250.0));
        assert_eq!(bar.interval(), 5.0);
        assert_eq!(bar.offset(), 3.0);
        assert!(!bar.appearance().draw_border);
        assert!(!bar.is_touch_enabled());
        assert!((bar.current_color().hue() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_from_config_with_inverted_range_keeps_defaults() {
        let config = ValueBarConfig {
            min: 50.0,
            max: 10.0,
            ..Default::default()
        };
        let bar = ValueBar::from_config(&config);
        assert_eq!((bar.min(), bar.max()), (0.0, 100.0));
    }
}
