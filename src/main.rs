//! Feather - update banner demo host
//! Built with iced

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // Initialize tracing for logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(420.0, 720.0))
        .antialiasing(true)
        .run()
}
