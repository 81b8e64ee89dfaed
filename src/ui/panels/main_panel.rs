use crate::ui::state::AppState;
use crate::ui::widgets::ColumnTable;

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Columns");
        ui.label(&state.status_message);
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("columns_scroll")
            .max_height(ui.available_height() * 0.5)
            .show(ui, |ui| {
                ColumnTable::show(ui, state);
            });

        if state.builder.is_empty() {
            return;
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.strong("Backend payload");
            if ui.button("Copy JSON").clicked() {
                match state.builder.to_json() {
                    Ok(json) => {
                        ui.ctx().copy_text(json);
                        state.status_message = "Column list copied".to_string();
                    }
                    Err(e) => {
                        state.status_message = format!("Error serializing columns: {}", e);
                    }
                }
            }
        });

        let json = state
            .builder
            .to_json()
            .unwrap_or_else(|e| format!("Error serializing columns: {}", e));
        egui::ScrollArea::vertical()
            .id_salt("json_scroll")
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut json.as_str())
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
    }
}
