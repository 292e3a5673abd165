//! Demo configuration
//!
//! Stored as YAML in the user's config directory.
//! Default location: ~/.config/valuebar/demo.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use valuebar_core::config::{self, BorderConfig, ValueBarConfig};
use valuebar_core::ColorPreset;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Screen density used for dp sizes
    pub density_dpi: f32,
    /// Number of bars shown
    pub bar_count: usize,
    /// Height of each bar in pixels
    pub bar_height: f32,
    /// Value every bar animates to on startup
    pub intro_target: f32,
    /// Duration of all demo animations
    pub animation_ms: u64,
    /// Settings shared by every bar
    pub bar: ValueBarConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            density_dpi: 160.0,
            bar_count: 5,
            bar_height: 48.0,
            intro_target: 900.0,
            animation_ms: 1500,
            bar: ValueBarConfig {
                max: 1000.0,
                value: 0.0,
                color_preset: ColorPreset::RedToGreen,
                border: BorderConfig {
                    enabled: false,
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }
}

/// Get the default config file path
pub fn default_config_path() -> PathBuf {
    config::default_config_path("demo.yaml")
}

/// Write the default configuration so it can be edited
pub fn write_default_config(path: &Path) -> Result<()> {
    config::save_config(&DemoConfig::default(), path)
        .with_context(|| format!("Failed to write default demo config to {:?}", path))
}
