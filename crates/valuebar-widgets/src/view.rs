//! Value bar view function
//!
//! ## Usage
//!
//! ```ignore
//! fn view(&self) -> Element<Message> {
//!     column![
//!         value_bar(&self.bar, 48.0, Message::BarInput),
//!         /* other widgets */
//!     ]
//!     .into()
//! }
//!
//! fn update(&mut self, message: Message) {
//!     match message {
//!         Message::BarInput(input) => {
//!             apply_input(&mut self.bar, input);
//!         }
//!     }
//! }
//! ```

use super::canvas::{BarInput, ValueBarCanvas};
use iced::widget::Canvas;
use iced::{Element, Length};
use valuebar_core::{GestureOutcome, ValueBar};

/// Create a value bar element filling the available width
///
/// # Arguments
///
/// * `bar` - The bar to draw
/// * `height` - Height of the bar in pixels
/// * `on_input` - Callback wrapping pointer input into a message
pub fn value_bar<'a, Message>(
    bar: &'a ValueBar,
    height: f32,
    on_input: impl Fn(BarInput) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(ValueBarCanvas { bar, on_input })
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

/// Feed canvas input back into the bar
///
/// Updates the bar's size from the canvas bounds before handling the
/// pointer so value mapping matches what was drawn.
pub fn apply_input(bar: &mut ValueBar, input: BarInput) -> GestureOutcome {
    bar.set_size(input.width, input.height);
    let outcome = bar.handle_pointer(input.pointer);
    if outcome == GestureOutcome::Ignored {
        log::debug!(
            "apply_input: bar {} ignored {:?} at x={}",
            bar.id(),
            input.pointer.action,
            input.pointer.x
        );
    }
    outcome
}
