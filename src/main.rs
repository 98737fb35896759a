//! Milk Tea Pup - a puppy that begs for a milk tea until you say yes
//! Built with iced

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;
mod utils;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    // A broken settings file is a setup mistake, not something to paper over
    let settings = match features::Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    let window_size = iced::Size::new(
        settings.display.window_width,
        settings.display.window_height,
    );

    iced::application(
        move || app::App::new(settings.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .subscription(app::App::subscription)
    .window_size(window_size)
    .centered()
    .antialiasing(true)
    .run()
}
