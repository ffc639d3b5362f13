use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` distinct, dark enough text colours with evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Start near the green of the headings.
            let hue = (150.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl: Hsl = Hsl::new(hue, 0.55, 0.38);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Family colours
// ---------------------------------------------------------------------------

/// Assigns each plant family its own label colour.
#[derive(Debug, Clone, Default)]
pub struct FamilyColors {
    mapping: BTreeMap<String, Color32>,
}

impl FamilyColors {
    /// Build the mapping from the sorted family names.
    pub fn new(families: &[String]) -> Self {
        let mapping = families
            .iter()
            .cloned()
            .zip(generate_palette(families.len()))
            .collect();
        FamilyColors { mapping }
    }

    /// Colour for a family, gray for unknown or missing families.
    pub fn color_for(&self, family: Option<&str>) -> Color32 {
        family
            .and_then(|f| self.mapping.get(f))
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}
