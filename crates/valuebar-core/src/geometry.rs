//! Value ⇄ pixel mapping
//!
//! One inset model is used everywhere: the bar occupies the widget minus an
//! `offset` margin on every side. With `offset == 0` the bar spans the full
//! widget, so `length = width / (max - min) * (value - min)`.

use thiserror::Error;

use crate::range::RangeModel;
use crate::types::{BarRect, Size};

/// Precondition violations that would otherwise produce NaN/infinite geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Range is degenerate (min: {min}, max: {max}), max must exceed min")]
    DegenerateRange { min: f32, max: f32 },

    #[error("No drawable span: width {width} with offset {offset}")]
    EmptySpan { width: f32, offset: f32 },
}

/// Maps between a [`RangeModel`] and pixel positions for a given layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryMapper {
    size: Size,
    offset: f32,
}

impl GeometryMapper {
    /// Create a mapper for a widget of `size` with an `offset` inset
    ///
    /// Negative offsets are treated as zero.
    pub fn new(size: Size, offset: f32) -> Self {
        Self {
            size,
            offset: offset.max(0.0),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Width available to the bar (`width - 2 * offset`)
    pub fn drawable_width(&self) -> f32 {
        self.size.width - 2.0 * self.offset
    }

    /// Whether `x` lies strictly inside the touch band
    ///
    /// Without an offset every position is inside.
    pub fn in_touch_band(&self, x: f32) -> bool {
        if self.offset <= 0.0 {
            return true;
        }
        x > self.offset && x < self.size.width - self.offset
    }

    fn check(&self, range: &RangeModel) -> Result<(), GeometryError> {
        if range.max() <= range.min() {
            return Err(GeometryError::DegenerateRange {
                min: range.min(),
                max: range.max(),
            });
        }
        if self.drawable_width() <= 0.0 {
            return Err(GeometryError::EmptySpan {
                width: self.size.width,
                offset: self.offset,
            });
        }
        Ok(())
    }

    /// Bar length in pixels for `value`
    pub fn bar_length(&self, range: &RangeModel, value: f32) -> Result<f32, GeometryError> {
        self.check(range)?;
        let value = range.clamp(value);
        Ok(self.drawable_width() / range.span() * (value - range.min()))
    }

    /// Right edge of the bar for `value` (`offset + length`)
    pub fn forward(&self, range: &RangeModel, value: f32) -> Result<f32, GeometryError> {
        Ok(self.offset + self.bar_length(range, value)?)
    }

    /// Rectangle for the model's current value
    pub fn bar_rect(&self, range: &RangeModel) -> Result<BarRect, GeometryError> {
        let right = self.forward(range, range.value())?;
        Ok(BarRect::new(
            self.offset,
            self.offset,
            right,
            (self.size.height - self.offset).max(self.offset),
        ))
    }

    /// Rectangle around the whole drawable area (used for the border)
    pub fn frame_rect(&self) -> BarRect {
        BarRect::new(
            self.offset,
            self.offset,
            (self.size.width - self.offset).max(self.offset),
            (self.size.height - self.offset).max(self.offset),
        )
    }

    /// Value at horizontal pixel position `x`
    ///
    /// Positions at or left of the inset map to exactly `min`, at or right
    /// of `width - offset` to exactly `max`.
    pub fn inverse(&self, range: &RangeModel, x: f32) -> Result<f32, GeometryError> {
        self.check(range)?;

        if x <= self.offset {
            return Ok(range.min());
        }
        if x >= self.size.width - self.offset {
            return Ok(range.max());
        }

        let factor = (x - self.offset) / self.drawable_width();
        Ok(range.clamp(factor * range.span() + range.min()))
    }
}
