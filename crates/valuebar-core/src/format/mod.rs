//! Pluggable color and label strategies
//!
//! Strategies are stored behind `Rc<dyn ..>` so several bars can share one
//! instance. Setters take a [`Formatter`] instead of an optional value:
//! `Formatter::Default` restores the built-in strategy.

mod color;
mod number;
mod text;

use std::rc::Rc;

pub use color::{
    default_bar_color, BarColorFormatter, ColorPreset, GreenToRed, RedToGreen,
    RedToGreenByMax, SolidColor,
};
pub use number::{NumberFormat, PatternError, DEFAULT_PATTERN};
pub use text::{DecimalTextFormatter, ValueTextFormatter};

/// Either the built-in strategy or a custom one
pub enum Formatter<F: ?Sized> {
    Default,
    Custom(Rc<F>),
}

impl<F: ?Sized> Clone for Formatter<F> {
    fn clone(&self) -> Self {
        match self {
            Self::Default => Self::Default,
            Self::Custom(inner) => Self::Custom(Rc::clone(inner)),
        }
    }
}

impl<F: ?Sized> std::fmt::Debug for Formatter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("Formatter::Default"),
            Self::Custom(_) => f.write_str("Formatter::Custom(..)"),
        }
    }
}

impl<F: ?Sized> Formatter<F> {
    /// Whether this selects the built-in strategy
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl Formatter<dyn BarColorFormatter> {
    /// Wrap a color strategy
    pub fn color(formatter: impl BarColorFormatter + 'static) -> Self {
        Self::Custom(Rc::new(formatter))
    }

    /// Strategy for a configuration preset
    pub fn from_preset(preset: ColorPreset, solid: crate::types::Color) -> Self {
        match preset {
            ColorPreset::Solid => Self::color(SolidColor(solid)),
            ColorPreset::RedToGreen => Self::color(RedToGreen),
            ColorPreset::GreenToRed => Self::color(GreenToRed),
            ColorPreset::RedToGreenByMax => Self::color(RedToGreenByMax),
        }
    }

    /// Resolve to a concrete strategy
    pub(crate) fn resolve(self) -> Rc<dyn BarColorFormatter> {
        match self {
            Self::Default => Rc::new(SolidColor::default()),
            Self::Custom(inner) => inner,
        }
    }
}

impl Formatter<dyn ValueTextFormatter> {
    /// Wrap a text strategy
    pub fn text(formatter: impl ValueTextFormatter + 'static) -> Self {
        Self::Custom(Rc::new(formatter))
    }

    /// Resolve to a concrete strategy
    pub(crate) fn resolve(self) -> Rc<dyn ValueTextFormatter> {
        match self {
            Self::Default => Rc::new(DecimalTextFormatter::default()),
            Self::Custom(inner) => inner,
        }
    }
}

/// Color strategy selector
pub type ColorFormatter = Formatter<dyn BarColorFormatter>;

/// Text strategy selector
pub type TextFormatter = Formatter<dyn ValueTextFormatter>;
