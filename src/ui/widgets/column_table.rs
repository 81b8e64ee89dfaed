use crate::ui::state::AppState;

/// Accepted columns in definition order.
pub struct ColumnTable;

impl ColumnTable {
    pub fn show(ui: &mut egui::Ui, state: &AppState) {
        if state.builder.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No columns yet. Fill in the form and click 'Add Column'.");
            });
            return;
        }

        egui::Grid::new("column_table")
            .striped(true)
            .show(ui, |ui| {
                // Header
                ui.strong("#");
                ui.strong("Tag");
                ui.strong("Name");
                ui.strong("Definition");
                ui.end_row();

                for (idx, column) in state.builder.columns().iter().enumerate() {
                    ui.label(format!("{}", idx + 1));
                    ui.monospace(column.kind().tag().to_string());
                    ui.label(column.col_name());
                    ui.label(column.describe());
                    ui.end_row();
                }
            });
    }
}
