use crate::ui::state::AppState;
use crate::ui::widgets::ColumnForm;

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Column Definition");
        ui.separator();

        ColumnForm::show(ui, state);

        ui.separator();

        ui.vertical_centered(|ui| {
            if ui.button("+ Add Column").clicked() {
                state.add_active_column();
            }
        });
    }
}
