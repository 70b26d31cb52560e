//! Guardian - a desktop console for text content moderation
//! Built with iced for a sleek, dark mode UI

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod features;
mod ui;
mod utils;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window(iced::window::Settings {
            size: app::INITIAL_WINDOW_SIZE,
            min_size: Some(iced::Size::new(720.0, 560.0)),
            ..Default::default()
        })
        .antialiasing(true)
        .run()
}
