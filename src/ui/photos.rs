use eframe::egui::{self, Ui};

use crate::config::AppConfig;
use crate::data::model::Plant;

const PHOTO_WIDTH: f32 = 300.0;

/// Show the photos of a plant, fetched over HTTP by egui's image loaders.
pub fn show(ui: &mut Ui, config: &AppConfig, plant: &Plant) {
    let urls: Vec<String> = plant
        .photos
        .iter()
        .filter_map(|name| config.photo_url(name))
        .collect();
    if urls.is_empty() {
        return;
    }
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for url in urls {
            ui.add(
                egui::Image::from_uri(url)
                    .max_width(PHOTO_WIDTH)
                    .show_loading_spinner(true),
            );
        }
    });
}
