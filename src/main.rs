mod app;
mod color;
mod config;
mod data;
mod session;
mod state;
mod ui;

use app::PlantenDrillApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let (config, config_error) = AppConfig::load();
    let config_error = config_error.map(|e| format!("Fout in configuratie: {e:#}"));
    log::info!("Workbook: {}", config.workbook.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Planten Driller",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can fetch and render the plant photos.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PlantenDrillApp::new(config, config_error)))
        }),
    )
}
