//! iced widgets for the ValueBar gauge
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State**: the application owns its [`ValueBar`](valuebar_core::ValueBar)s
//! - **View functions**: take a bar + callback, return `Element<Message>`
//! - **Canvas Program**: draws the bar and turns mouse/touch events into
//!   widget-local pointer events
//!
//! Animation frames come from [`animation_frames`], which only ticks while
//! a bar is animating.

pub mod canvas;
pub mod subscription;
pub mod theme;
pub mod view;

pub use canvas::{translate_event, BarInput, BarInteraction, FrameCanvas, ValueBarCanvas};
pub use subscription::{animation_frames, FRAME_INTERVAL};
pub use theme::{from_iced_color, to_iced_color, to_iced_font};
pub use view::{apply_input, value_bar};
