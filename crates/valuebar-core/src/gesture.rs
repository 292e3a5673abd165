//! Pointer gestures → value selection
//!
//! States: `Idle ↔ Dragging`. A press inside the touch band starts a drag,
//! moves update the value continuously and the release commits it. Every
//! mapped position is snapped to the interval before it is written.
//!
//! Notifications go to at most one [`SelectionListener`] and are also
//! returned as a [`GestureOutcome`], so message-driven hosts can route them
//! without registering a listener.

use crate::geometry::GeometryMapper;
use crate::range::RangeModel;

/// Kind of pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    /// Gesture aborted by the host (pointer left the window, focus lost)
    Cancel,
}

/// Pointer event in widget-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, x, y)
    }

    pub fn cancel() -> Self {
        Self::new(PointerAction::Cancel, 0.0, 0.0)
    }
}

/// External recognizer that may claim events before the bar maps them
pub trait GestureDetector {
    /// Return `true` to consume the event
    fn on_touch_event(&mut self, event: &PointerEvent) -> bool;
}

impl<F> GestureDetector for F
where
    F: FnMut(&PointerEvent) -> bool,
{
    fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        self(event)
    }
}

/// Snapshot passed to selection callbacks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Id of the bar that produced the selection
    pub bar_id: u64,
    pub value: f32,
    pub max: f32,
    pub min: f32,
}

/// Receives value selections made by touch
pub trait SelectionListener {
    /// Called for every press/move while dragging
    fn on_selection_update(&mut self, selection: &Selection);

    /// Called once when the pointer is released
    fn on_value_selected(&mut self, selection: &Selection);
}

/// What the controller did with an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Touch is disabled; the host should handle the event itself
    PassThrough,
    /// Event not used (outside the touch band, no drag in progress, or no
    /// valid geometry)
    Ignored,
    /// Event claimed without changing the value (external detector, cancel)
    Consumed,
    /// Value changed during a drag
    SelectionUpdate(Selection),
    /// Drag finished with this value
    ValueSelected(Selection),
}

impl GestureOutcome {
    /// The selection carried by this outcome, if any
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Self::SelectionUpdate(selection) | Self::ValueSelected(selection) => Some(selection),
            _ => None,
        }
    }

    /// Whether the bar value was written
    pub fn changed_value(&self) -> bool {
        self.selection().is_some()
    }
}

/// Transient per-gesture data
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureState {
    pub active: bool,
    pub last_x: f32,
    pub last_y: f32,
}

/// Maps pointer events to value selections
pub struct GestureController {
    enabled: bool,
    state: GestureState,
    detector: Option<Box<dyn GestureDetector>>,
    listener: Option<Box<dyn SelectionListener>>,
}

impl Default for GestureController {
    fn default() -> Self {
        Self {
            enabled: true,
            state: GestureState::default(),
            detector: None,
            listener: None,
        }
    }
}

impl std::fmt::Debug for GestureController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureController")
            .field("enabled", &self.enabled)
            .field("state", &self.state)
            .field("has_detector", &self.detector.is_some())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl GestureController {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable touch handling; disabling aborts a running drag
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.state = GestureState::default();
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.active
    }

    pub fn set_detector(&mut self, detector: Option<Box<dyn GestureDetector>>) {
        self.detector = detector;
    }

    /// Register the selection listener (last registration wins)
    pub fn set_listener(&mut self, listener: Option<Box<dyn SelectionListener>>) {
        self.listener = listener;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Process one pointer event against the bar's range and layout
    pub fn handle(
        &mut self,
        event: PointerEvent,
        range: &mut RangeModel,
        mapper: &GeometryMapper,
        bar_id: u64,
    ) -> GestureOutcome {
        if !self.enabled {
            return GestureOutcome::PassThrough;
        }

        if let Some(detector) = self.detector.as_mut() {
            if detector.on_touch_event(&event) {
                return GestureOutcome::Consumed;
            }
        }

        match event.action {
            PointerAction::Down => {
                if !mapper.in_touch_band(event.x) {
                    log::debug!("handle: press at x={} outside touch band", event.x);
                    return GestureOutcome::Ignored;
                }
                if self.listener.is_none() {
                    log::info!(
                        "handle: no selection listener on bar {}, selections are only returned",
                        bar_id
                    );
                }
                match self.select(event, range, mapper, bar_id) {
                    Some(selection) => {
                        self.state.active = true;
                        self.notify_update(&selection);
                        GestureOutcome::SelectionUpdate(selection)
                    }
                    None => GestureOutcome::Ignored,
                }
            }
            PointerAction::Move => {
                if !self.state.active {
                    return GestureOutcome::Ignored;
                }
                match self.select(event, range, mapper, bar_id) {
                    Some(selection) => {
                        self.notify_update(&selection);
                        GestureOutcome::SelectionUpdate(selection)
                    }
                    None => GestureOutcome::Ignored,
                }
            }
            PointerAction::Up => {
                if !self.state.active {
                    return GestureOutcome::Ignored;
                }
                let selection = self.select(event, range, mapper, bar_id);
                self.state = GestureState::default();
                match selection {
                    Some(selection) => {
                        if let Some(listener) = self.listener.as_mut() {
                            listener.on_value_selected(&selection);
                        }
                        GestureOutcome::ValueSelected(selection)
                    }
                    None => GestureOutcome::Ignored,
                }
            }
            PointerAction::Cancel => {
                if !self.state.active {
                    return GestureOutcome::Ignored;
                }
                self.state = GestureState::default();
                GestureOutcome::Consumed
            }
        }
    }

    /// Map, snap and store the value under the pointer
    fn select(
        &mut self,
        event: PointerEvent,
        range: &mut RangeModel,
        mapper: &GeometryMapper,
        bar_id: u64,
    ) -> Option<Selection> {
        let raw = match mapper.inverse(range, event.x) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("select: cannot map pointer on bar {}: {}", bar_id, e);
                return None;
            }
        };

        let value = range.set_value(range.quantize(raw));
        self.state.last_x = event.x;
        self.state.last_y = event.y;

        Some(Selection {
            bar_id,
            value,
            max: range.max(),
            min: range.min(),
        })
    }

    fn notify_update(&mut self, selection: &Selection) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_selection_update(selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Size;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        updates: Vec<f32>,
        selected: Vec<f32>,
    }

    struct RecordingListener(Rc<RefCell<Recorded>>);

    impl SelectionListener for RecordingListener {
        fn on_selection_update(&mut self, selection: &Selection) {
            self.0.borrow_mut().updates.push(selection.value);
        }

        fn on_value_selected(&mut self, selection: &Selection) {
            self.0.borrow_mut().selected.push(selection.value);
        }
    }

    fn setup(interval: f32, offset: f32) -> (GestureController, RangeModel, GeometryMapper) {
        let mut range = RangeModel::new(0.0, 100.0).unwrap();
        range.set_interval(interval);
        let mapper = GeometryMapper::new(Size::new(200.0 + 2.0 * offset, 40.0), offset);
        (GestureController::default(), range, mapper)
    }

    fn with_listener(controller: &mut GestureController) -> Rc<RefCell<Recorded>> {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        controller.set_listener(Some(Box::new(RecordingListener(Rc::clone(&recorded)))));
        recorded
    }

    #[test]
    fn test_drag_sequence_emits_updates_then_selection() {
        let (mut controller, mut range, mapper) = setup(0.0, 0.0);
        let recorded = with_listener(&mut controller);

        let down = controller.handle(PointerEvent::down(50.0, 10.0), &mut range, &mapper, 1);
        assert!(matches!(down, GestureOutcome::SelectionUpdate(s) if s.value == 25.0));
        assert!(controller.is_dragging());

        controller.handle(PointerEvent::moved(100.0, 10.0), &mut range, &mapper, 1);
        let up = controller.handle(PointerEvent::up(150.0, 10.0), &mut range, &mapper, 1);
        assert!(matches!(up, GestureOutcome::ValueSelected(s) if s.value == 75.0));
        assert!(!controller.is_dragging());

        let recorded = recorded.borrow();
        assert_eq!(recorded.updates, vec![25.0, 50.0]);
        assert_eq!(recorded.selected, vec![75.0]);
        assert_eq!(range.value(), 75.0);
    }

    #[test]
    fn test_interval_snapping() {
        let (mut controller, mut range, mapper) = setup(10.0, 0.0);

        // 108px of 200px → raw 54 → 50
        controller.handle(PointerEvent::down(108.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(range.value(), 50.0);

        // 110px → raw 55 → tie rounds up to 60
        controller.handle(PointerEvent::moved(110.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(range.value(), 60.0);
    }

    #[test]
    fn test_positions_beyond_edges_clamp() {
        let (mut controller, mut range, mapper) = setup(1.0, 0.0);
        controller.handle(PointerEvent::down(20.0, 0.0), &mut range, &mapper, 1);
        controller.handle(PointerEvent::moved(-40.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(range.value(), 0.0);
        controller.handle(PointerEvent::moved(900.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(range.value(), 100.0);
    }

    #[test]
    fn test_press_outside_band_is_ignored() {
        let (mut controller, mut range, mapper) = setup(0.0, 10.0);
        range.set_value(30.0);

        let outcome = controller.handle(PointerEvent::down(5.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(outcome, GestureOutcome::Ignored);
        assert!(!controller.is_dragging());
        assert_eq!(range.value(), 30.0);

        // Moves without a drag are ignored too
        let outcome = controller.handle(PointerEvent::moved(100.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(outcome, GestureOutcome::Ignored);
        assert_eq!(range.value(), 30.0);
    }

    #[test]
    fn test_drag_may_leave_band_once_started() {
        let (mut controller, mut range, mapper) = setup(0.0, 10.0);
        controller.handle(PointerEvent::down(110.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(range.value(), 50.0);
        controller.handle(PointerEvent::moved(2.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(range.value(), 0.0);
    }

    #[test]
    fn test_disabled_passes_through() {
        let (mut controller, mut range, mapper) = setup(0.0, 0.0);
        let recorded = with_listener(&mut controller);
        controller.set_enabled(false);

        let outcome = controller.handle(PointerEvent::down(50.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(outcome, GestureOutcome::PassThrough);
        assert_eq!(range.value(), 0.0);
        assert!(recorded.borrow().updates.is_empty());
    }

    #[test]
    fn test_detector_claims_events() {
        let (mut controller, mut range, mapper) = setup(0.0, 0.0);
        let recorded = with_listener(&mut controller);
        controller.set_detector(Some(Box::new(|event: &PointerEvent| {
            event.action == PointerAction::Down
        })));

        let outcome = controller.handle(PointerEvent::down(50.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(outcome, GestureOutcome::Consumed);
        assert_eq!(range.value(), 0.0);
        assert!(!controller.is_dragging());
        assert!(recorded.borrow().updates.is_empty());
    }

    #[test]
    fn test_cancel_ends_drag_without_selection() {
        let (mut controller, mut range, mapper) = setup(0.0, 0.0);
        let recorded = with_listener(&mut controller);

        controller.handle(PointerEvent::down(50.0, 0.0), &mut range, &mapper, 1);
        let outcome = controller.handle(PointerEvent::cancel(), &mut range, &mapper, 1);
        assert_eq!(outcome, GestureOutcome::Consumed);
        assert!(!controller.is_dragging());

        let up = controller.handle(PointerEvent::up(150.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(up, GestureOutcome::Ignored);
        assert!(recorded.borrow().selected.is_empty());
        assert_eq!(range.value(), 25.0);
    }

    #[test]
    fn test_missing_listener_still_selects() {
        let (mut controller, mut range, mapper) = setup(0.0, 0.0);
        assert!(!controller.has_listener());
        controller.handle(PointerEvent::down(80.0, 0.0), &mut range, &mapper, 7);
        let up = controller.handle(PointerEvent::up(80.0, 0.0), &mut range, &mapper, 7);
        assert_eq!(
            up.selection().map(|s| (s.bar_id, s.value)),
            Some((7, 40.0))
        );
    }

    #[test]
    fn test_unsized_layout_is_ignored() {
        let mut controller = GestureController::default();
        let mut range = RangeModel::default();
        let mapper = GeometryMapper::new(Size::ZERO, 0.0);
        let outcome = controller.handle(PointerEvent::down(10.0, 0.0), &mut range, &mapper, 1);
        assert_eq!(outcome, GestureOutcome::Ignored);
        assert_eq!(range.value(), 75.0);
    }

    #[test]
    fn test_gesture_state_tracks_last_position() {
        let (mut controller, mut range, mapper) = setup(0.0, 0.0);
        controller.handle(PointerEvent::down(30.0, 12.0), &mut range, &mapper, 1);
        assert_eq!(controller.state().last_x, 30.0);
        assert_eq!(controller.state().last_y, 12.0);
        controller.handle(PointerEvent::up(30.0, 12.0), &mut range, &mapper, 1);
        assert_eq!(*controller.state(), GestureState::default());
    }
}
