//! Bar configuration
//!
//! - Generic YAML config loading/saving
//! - [`ValueBarConfig`], the declarative form of a bar's settings
//! - Default config file location
//!
//! # Usage
//!
//! ```ignore
//! use valuebar_core::config::{default_config_path, load_config, ValueBarConfig};
//!
//! let config: ValueBarConfig = load_config(&default_config_path("bar.yaml"));
//! let bar = ValueBar::from_config(&config);
//! ```

mod bar;
mod io;

use std::path::PathBuf;

pub use bar::{
    parse_color, BorderConfig, TextConfig, ValueBarConfig, DEFAULT_BORDER_WIDTH_DP,
    DEFAULT_TEXT_SIZE_DP,
};
pub use io::{load_config, save_config};

/// Get the default config file path
///
/// Returns: `~/.config/valuebar/{filename}`
pub fn default_config_path(filename: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("valuebar")
        .join(filename)
}
