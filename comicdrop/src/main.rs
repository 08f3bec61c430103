#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cache;
mod config;
mod error;
mod macros;
mod prelude;
mod reader;
mod ui;

use crate::prelude::*;

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();

    info!("{NAME} starting");

    let settings = Settings::load();
    let path = std::env::args().nth(1).map(PathBuf::from);

    // Decode and extraction tasks run on this runtime; entering it here
    // keeps spawn_blocking available for the whole UI lifetime.
    let runtime = tokio::runtime::Runtime::new().expect("failed to start the tokio runtime");
    let _enter = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WIN_WIDTH, WIN_HEIGHT])
            .with_title(NAME)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let result = eframe::run_native(
        NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(ComicDropApp::new(cc, path, settings)))),
    );
    if let Err(e) = result {
        log::error!("eframe exited with error: {e}");
    }
}
