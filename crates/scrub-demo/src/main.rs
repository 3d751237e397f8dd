//! Scrub demo - one timeline with a playhead and selectable samples
//!
//! Reads `timeline.yaml` from the user config directory (defaults when
//! missing). Set `RUST_LOG=debug` to trace layout and pointer handling.
//!
//! ## Command line flags
//!
//! - `--save-config`: write the effective configuration back before starting

mod app;

use iced::Size;
use scrub_core::config::{default_config_path, TimelineConfig};

use app::{DemoApp, Message};

const CONFIG_FILE: &str = "timeline.yaml";

fn main() -> iced::Result {
    let args: Vec<String> = std::env::args().collect();
    let save = args.iter().any(|arg| arg == "--save-config");

    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("scrub-demo starting up");

    let config_path = default_config_path(CONFIG_FILE);
    let config = TimelineConfig::load(&config_path);
    if save {
        if let Err(e) = config.save(&config_path) {
            log::error!("Failed to save config: {:#}", e);
        }
    }

    iced::application(move || DemoApp::new(config.clone()), update, view)
        .title("Scrub Demo")
        .window_size(Size::new(800.0, 320.0))
        .theme(theme)
        .run()
}

/// Update function for iced
fn update(app: &mut DemoApp, message: Message) {
    app.update(message)
}

/// View function for iced
fn view(app: &DemoApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Theme function for iced
fn theme(_app: &DemoApp) -> iced::Theme {
    iced::Theme::Dark
}
