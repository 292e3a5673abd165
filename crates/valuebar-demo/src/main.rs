//! ValueBar demo - five animated, selectable bars
//!
//! Bars animate from 0 to 900 on startup. Press or drag on a bar to select
//! a value; selections are logged.
//!
//! ## Command line flags
//!
//! - `--write-config`: write the default config to
//!   `~/.config/valuebar/demo.yaml` and exit

mod app;
mod config;
mod formatters;

use iced::Size;
use valuebar_core::config::load_config;
use valuebar_core::units::{self, DisplayMetrics};

use app::DemoApp;

fn main() -> iced::Result {
    let args: Vec<String> = std::env::args().collect();

    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config_path = config::default_config_path();

    if args.iter().any(|arg| arg == "--write-config") {
        match config::write_default_config(&config_path) {
            Ok(()) => log::info!("Wrote default config to {:?}", config_path),
            Err(e) => log::error!("{:#}", e),
        }
        return Ok(());
    }

    log::info!("valuebar-demo starting up");

    let demo_config: config::DemoConfig = load_config(&config_path);

    // Density must be known before bars convert their dp sizes
    units::init(DisplayMetrics::new(demo_config.density_dpi));

    iced::application(
        move || DemoApp::new(demo_config.clone()),
        DemoApp::update,
        DemoApp::view,
    )
    .subscription(DemoApp::subscription)
    .theme(DemoApp::theme)
    .title("ValueBar Demo")
    .window_size(Size::new(640.0, 480.0))
    .run()
}
