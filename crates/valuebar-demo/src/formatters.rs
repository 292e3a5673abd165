//! Custom formatters and the selection logger used by the demo

use valuebar_core::format::NumberFormat;
use valuebar_core::{BarColorFormatter, Color, Selection, SelectionListener, ValueTextFormatter};

/// Green above the middle of the range, red at or below it
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointColor;

impl BarColorFormatter for MidpointColor {
    fn color(&self, value: f32, max: f32, min: f32) -> Color {
        let mid = (max + min) / 2.0;
        if value > mid {
            Color::GREEN
        } else {
            Color::RED
        }
    }
}

/// Plain value label, bounds as whole dollars (`"1,000 $"`)
#[derive(Debug, Clone)]
pub struct CurrencyText {
    bounds: NumberFormat,
}

impl Default for CurrencyText {
    fn default() -> Self {
        let bounds = NumberFormat::from_pattern("###,###,###")
            .unwrap_or_default()
            .with_suffix(" $");
        Self { bounds }
    }
}

impl ValueTextFormatter for CurrencyText {
    fn value_text(&self, value: f32, _max: f32, _min: f32) -> String {
        format!("{:.1}", value)
    }

    fn min_text(&self, min: f32) -> String {
        self.bounds.format(min)
    }

    fn max_text(&self, max: f32) -> String {
        self.bounds.format(max)
    }
}

/// Listener that logs every selection
#[derive(Debug, Default)]
pub struct SelectionLogger;

impl SelectionListener for SelectionLogger {
    fn on_selection_update(&mut self, selection: &Selection) {
        log::info!(
            "Value selection update: {} (bar {})",
            selection.value,
            selection.bar_id
        );
    }

    fn on_value_selected(&mut self, selection: &Selection) {
        log::info!("Value selected: {} (bar {})", selection.value, selection.bar_id);
    }
}
