//! ValueBar Core - Engine for an animated, touch-selectable bar gauge
//!
//! A bar fills a horizontal track in proportion to its value within
//! `min..=max`, can animate between values with an ease-in-out curve, and
//! lets the user pick a value by pressing or dragging on it.
//!
//! The crate is toolkit-agnostic: hosts feed pointer events and clock ticks
//! in, and receive draw calls through the [`render::Canvas`] trait.
//!
//! ## Modules
//!
//! - `range`: bounds, value, snapping interval
//! - `geometry`: value ⇄ pixel mapping
//! - `format`: bar color and label text strategies
//! - `animation`: timed value transitions
//! - `gesture`: pointer handling and selection callbacks
//! - `render`: per-frame drawing
//! - `units`: dp ⇄ px conversion from global display metrics
//! - `config`: YAML bar settings

pub mod animation;
pub mod config;
pub mod format;
pub mod geometry;
pub mod gesture;
pub mod range;
pub mod render;
pub mod types;
pub mod units;

mod bar;

pub use bar::ValueBar;
pub use types::{BarRect, Color, Size};

pub use animation::{AnimationController, AnimationMode, TickStatus};
pub use format::{
    BarColorFormatter, ColorFormatter, ColorPreset, Formatter, TextFormatter, ValueTextFormatter,
};
pub use geometry::{GeometryError, GeometryMapper};
pub use gesture::{
    GestureDetector, GestureOutcome, PointerAction, PointerEvent, Selection, SelectionListener,
};
pub use range::{RangeError, RangeModel};
pub use render::{Appearance, Canvas, TextExtent, TextStyle, Typeface};
