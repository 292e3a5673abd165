//! Numeric domain of a value bar
//!
//! Holds the `min..=max` bounds, the current value and the snapping
//! interval. Every write keeps `min <= value <= max`.

use thiserror::Error;

/// Default lower bound
pub const DEFAULT_MIN: f32 = 0.0;
/// Default upper bound
pub const DEFAULT_MAX: f32 = 100.0;
/// Default value shown by a freshly created bar
pub const DEFAULT_VALUE: f32 = 75.0;
/// Default snapping interval
pub const DEFAULT_INTERVAL: f32 = 1.0;

/// Rejected range updates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("Range bounds must be finite (min: {min}, max: {max})")]
    NonFinite { min: f32, max: f32 },

    #[error("Range maximum {max} is below minimum {min}")]
    Inverted { min: f32, max: f32 },
}

/// Bounds, value and interval of a bar
#[derive(Debug, Clone, PartialEq)]
pub struct RangeModel {
    min: f32,
    max: f32,
    value: f32,
    interval: f32,
}

impl Default for RangeModel {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            value: DEFAULT_VALUE,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl RangeModel {
    /// Create a model with explicit bounds; the value starts at `min`
    pub fn new(min: f32, max: f32) -> Result<Self, RangeError> {
        let mut model = Self::default();
        model.set_min_max(min, max)?;
        model.value = min;
        Ok(model)
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Span covered by the bounds (`max - min`)
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Replace both bounds
    ///
    /// The current value is re-clamped into the new bounds. Inverted or
    /// non-finite bounds leave the model untouched.
    pub fn set_min_max(&mut self, min: f32, max: f32) -> Result<(), RangeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NonFinite { min, max });
        }
        if max < min {
            return Err(RangeError::Inverted { min, max });
        }

        self.min = min;
        self.max = max;
        self.value = self.clamp(self.value);
        Ok(())
    }

    /// Store a value, clamped into `[min, max]`
    ///
    /// Returns the value actually stored. NaN is ignored and the previous
    /// value kept.
    pub fn set_value(&mut self, value: f32) -> f32 {
        if value.is_nan() {
            log::warn!("set_value: ignoring NaN value");
            return self.value;
        }
        self.value = self.clamp(value);
        self.value
    }

    /// Set the snapping interval; `<= 0` disables snapping
    pub fn set_interval(&mut self, interval: f32) {
        self.interval = interval;
    }

    /// Whether values are snapped to the interval
    pub fn is_quantized(&self) -> bool {
        self.interval > 0.0
    }

    /// Clamp a value into `[min, max]`
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Snap a value to the nearest `min + n * interval`
    ///
    /// Ties (exactly half an interval) go to the upper step. The result is
    /// clamped into range, so a top step beyond `max` collapses onto `max`.
    pub fn quantize(&self, value: f32) -> f32 {
        if !self.is_quantized() {
            return self.clamp(value);
        }

        let interval = self.interval;
        let offset = value - self.min;
        let lower = (offset / interval).floor();
        let remainder = offset - lower * interval;

        let steps = if remainder < interval / 2.0 {
            lower
        } else {
            lower + 1.0
        };

        self.clamp(self.min + steps * interval)
    }
}
