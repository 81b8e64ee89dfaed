use super::panels::{LeftPanel, MainPanel};
use super::state::AppState;
use crate::config::AppConfig;

pub struct ColumnBuilderApp {
    state: AppState,
    left_panel: LeftPanel,
    main_panel: MainPanel,
}

impl Default for ColumnBuilderApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl ColumnBuilderApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            state: AppState::from_config(&config.columns),
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
        }
    }
}

impl eframe::App for ColumnBuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Column Builder");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} columns", self.state.builder.len()));
                });
            });
        });

        // Left Panel - Draft form
        egui::SidePanel::left("left_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, &mut self.state);
                });
            });

        // Central Panel - Accepted columns
        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &mut self.state);
        });
    }
}
