use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{panels, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlantenDrillApp {
    pub state: AppState,
}

impl PlantenDrillApp {
    /// Create the app and read the configured workbook once.
    ///
    /// `config_error` describes a config file that was ignored.
    pub fn new(config: AppConfig, config_error: Option<String>) -> Self {
        let mut state = AppState::new(config);
        let workbook = state.config.workbook.clone();
        state.load(&workbook);
        if let Some(msg) = config_error {
            state.add_status(msg);
        }
        Self { state }
    }
}

impl eframe::App for PlantenDrillApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation and filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected mode ----
        egui::CentralPanel::default().show(ctx, |ui| {
            views::central_panel(ui, &mut self.state);
        });
    }
}
