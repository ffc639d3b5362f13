use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::Category;
use crate::state::{AppState, Mode, Page};

const ALL_PLANTS: &str = "Alle planten";
const ALL: &str = "Alle";
const ALL_FAMILIES: &str = "Alle families";

// ---------------------------------------------------------------------------
// Left side panel – navigation and filter widgets
// ---------------------------------------------------------------------------

/// Render the left sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Planten Driller");
    ui.separator();

    ui.strong("Navigatie");
    let mut page = state.page;
    for p in Page::ALL {
        ui.radio_value(&mut page, p, p.label());
    }
    state.page = page;
    ui.separator();

    if state.catalog.is_none() {
        ui.label("Geen werkboek geladen.");
        return;
    }

    match state.page {
        Page::Driller => driller_controls(ui, state),
        Page::Families => family_controls(ui, state),
    }
}

fn driller_controls(ui: &mut Ui, state: &mut AppState) {
    let families = match &state.catalog {
        Some(catalog) => catalog.plant_families.clone(),
        None => return,
    };
    let width = ui.available_width();

    // ---- Plant list ----
    ui.strong("Kies een plantenlijst");
    let mut list = state.filter.list;
    egui::ComboBox::from_id_salt("plant_list")
        .width(width)
        .selected_text(list.map_or(ALL_PLANTS, Category::column))
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut list, None, ALL_PLANTS);
            for cat in Category::ALL {
                ui.selectable_value(&mut list, Some(cat), cat.column());
            }
        });
    state.set_list_filter(list);
    ui.add_space(4.0);

    // ---- Family ----
    ui.strong("Kies een familie");
    let mut family = state.filter.family.clone();
    let selected = family.clone().unwrap_or_else(|| ALL.to_string());
    egui::ComboBox::from_id_salt("plant_family")
        .width(width)
        .selected_text(selected)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut family, None, ALL);
            for f in &families {
                let color = state.family_colors.color_for(Some(f));
                ui.selectable_value(&mut family, Some(f.clone()), RichText::new(f).color(color));
            }
        });
    state.set_family_filter(family);
    ui.add_space(4.0);

    // ---- Number range ----
    let total = state.filtered.len();
    if total > 0 {
        let mut start = state.range.start;
        let mut end = state.range.end;
        ui.strong("Start bij plantnummer:");
        ui.add(egui::DragValue::new(&mut start).range(1..=total).speed(0.2));
        ui.strong("Eindig bij plantnummer:");
        ui.add(egui::DragValue::new(&mut end).range(start..=total).speed(0.2));
        state.set_range(start, end);
        ui.add_space(4.0);
    }

    ui.separator();

    // ---- Mode ----
    ui.strong("Maak uw keuze");
    let mut mode = state.mode;
    egui::ComboBox::from_id_salt("mode")
        .width(width)
        .selected_text(mode.label())
        .show_ui(ui, |ui: &mut Ui| {
            for m in Mode::ALL {
                ui.selectable_value(&mut mode, m, m.label());
            }
        });
    state.set_mode(mode);
}

fn family_controls(ui: &mut Ui, state: &mut AppState) {
    let names: Vec<String> = match &state.catalog {
        Some(catalog) => catalog.family_names().into_iter().map(str::to_string).collect(),
        None => return,
    };

    ui.strong("Kies een familie");
    let mut selected = state.families.selected.clone();
    let text = selected.clone().unwrap_or_else(|| ALL_FAMILIES.to_string());
    egui::ComboBox::from_id_salt("family_page_family")
        .width(ui.available_width())
        .selected_text(text)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut selected, None, ALL_FAMILIES);
            for name in &names {
                ui.selectable_value(&mut selected, Some(name.clone()), name);
            }
        });
    state.families.select(selected);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Bestand", |ui: &mut Ui| {
            if ui.button("Openen…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Opnieuw laden").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} planten geladen, {} geselecteerd",
                catalog.len(),
                state.active_rows().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open plantenwerkboek")
        .add_filter("Werkboeken", &["xlsx", "xlsm", "xls", "ods"])
        .add_filter("Excel", &["xlsx", "xlsm", "xls"])
        .add_filter("OpenDocument", &["ods"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}
