#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use eframe::NativeOptions;
use tshirt_designer::app::DesignerApp;
use tshirt_designer::config::{load_or_create_config, Config};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = load_or_create_config().unwrap_or_else(|e| {
        log::warn!("Could not load settings, using defaults: {e}");
        Config::default()
    });

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([760.0, 560.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "T-Shirt Designer",
        options,
        Box::new(move |cc| Ok(Box::new(DesignerApp::with_config(&cc.egui_ctx, config)))),
    )
}
