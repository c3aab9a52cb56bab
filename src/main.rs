#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use scribble::CanvasApp;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "scribble",
        native_options,
        Box::new(|cc| Ok(Box::new(CanvasApp::new(cc)?))),
    )
}
