//! Density-independent pixel conversion
//!
//! Sizes in configuration (text sizes, border width) are given in dp and
//! converted with `px = dp * dpi / 160`. The display metrics are process
//! wide and must be set once with [`init`] before the first conversion;
//! until then conversions log a warning and return their input unchanged.

use std::sync::OnceLock;

/// Reference density at which 1 dp == 1 px
pub const BASELINE_DPI: f32 = 160.0;

/// Global display metrics (initialized once at startup)
static METRICS: OnceLock<DisplayMetrics> = OnceLock::new();

/// Screen density information supplied by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub density_dpi: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            density_dpi: BASELINE_DPI,
        }
    }
}

impl DisplayMetrics {
    pub fn new(density_dpi: f32) -> Self {
        Self { density_dpi }
    }

    /// Pixels per dp
    pub fn scale(&self) -> f32 {
        self.density_dpi / BASELINE_DPI
    }

    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.scale()
    }

    pub fn px_to_dp(&self, px: f32) -> f32 {
        px / self.scale()
    }
}

/// Converter over optional metrics; missing metrics pass values through
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DensityConverter {
    metrics: Option<DisplayMetrics>,
}

impl DensityConverter {
    pub fn new(metrics: Option<DisplayMetrics>) -> Self {
        Self { metrics }
    }

    pub fn dp_to_px(&self, dp: f32) -> f32 {
        match self.metrics {
            Some(metrics) => metrics.dp_to_px(dp),
            None => {
                log::warn!(
                    "dp_to_px: display metrics not initialized, call units::init first; \
                     returning {} unconverted",
                    dp
                );
                dp
            }
        }
    }

    pub fn px_to_dp(&self, px: f32) -> f32 {
        match self.metrics {
            Some(metrics) => metrics.px_to_dp(px),
            None => {
                log::warn!(
                    "px_to_dp: display metrics not initialized, call units::init first; \
                     returning {} unconverted",
                    px
                );
                px
            }
        }
    }
}

/// Set the process-wide display metrics
///
/// Only the first call has an effect; later calls are logged and ignored.
/// Returns `true` if these metrics were installed.
pub fn init(metrics: DisplayMetrics) -> bool {
    match METRICS.set(metrics) {
        Ok(()) => {
            log::info!("units::init: density {} dpi", metrics.density_dpi);
            true
        }
        Err(_) => {
            log::debug!("units::init: already initialized, ignoring {:?}", metrics);
            false
        }
    }
}

/// Whether [`init`] has been called
pub fn is_initialized() -> bool {
    METRICS.get().is_some()
}

/// Converter backed by the global metrics
pub fn converter() -> DensityConverter {
    DensityConverter::new(METRICS.get().copied())
}

/// Convert dp to px using the global metrics
pub fn dp_to_px(dp: f32) -> f32 {
    converter().dp_to_px(dp)
}

/// Convert px to dp using the global metrics
pub fn px_to_dp(px: f32) -> f32 {
    converter().px_to_dp(px)
}
