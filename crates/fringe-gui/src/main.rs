//! Desktop front end for the double-slit simulator.

mod app;
mod panels;

use eframe::egui::ViewportBuilder;

const WINDOW_TITLE: &str = "Young's Double Slit";

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting {} v{}", WINDOW_TITLE, env!("CARGO_PKG_VERSION"));

    let viewport = ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_app_id("fringe-gui")
        .with_inner_size([1280.0, 820.0])
        .with_min_inner_size([900.0, 600.0]);

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(app::FringeApp::new(cc)))),
    )
}
