use eframe::egui::{self, Color32, RichText, Ui};

pub mod panels;
pub mod photos;
pub mod views;

/// Heading colour of scientific names and family names.
pub const TEAL: Color32 = Color32::from_rgb(0x2b, 0x7a, 0x78);
/// Dutch names and the progress bar.
pub const GREEN: Color32 = Color32::from_rgb(0x00, 0x65, 0x2d);

// ---------------------------------------------------------------------------
// Message boxes
// ---------------------------------------------------------------------------

fn message_box(ui: &mut Ui, fill: Color32, text: RichText) {
    egui::Frame::group(ui.style())
        .fill(fill)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(text);
        });
}

pub fn error_box(ui: &mut Ui, text: &str) {
    message_box(
        ui,
        Color32::from_rgb(0xfd, 0xe2, 0xe2),
        RichText::new(text).color(Color32::from_rgb(0x9b, 0x1c, 0x1c)),
    );
}

pub fn warning_box(ui: &mut Ui, text: &str) {
    message_box(
        ui,
        Color32::from_rgb(0xff, 0xf4, 0xd6),
        RichText::new(text).color(Color32::from_rgb(0x8a, 0x5a, 0x00)),
    );
}

pub fn success_box(ui: &mut Ui, text: &str) {
    message_box(
        ui,
        Color32::from_rgb(0xde, 0xf7, 0xe5),
        RichText::new(text).color(GREEN),
    );
}

pub fn info_box(ui: &mut Ui, text: &str) {
    message_box(
        ui,
        Color32::from_rgb(0xe3, 0xee, 0xfa),
        RichText::new(text).color(Color32::from_rgb(0x0b, 0x45, 0x7a)),
    );
}
