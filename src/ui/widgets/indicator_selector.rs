use crate::ui::state::AppState;

pub struct IndicatorSelector;

impl IndicatorSelector {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label("Indicator:");
            let selected = state.selected_indicator.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("indicator")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for indicator in &state.indicators {
                        ui.selectable_value(
                            &mut state.selected_indicator,
                            Some(indicator.clone()),
                            indicator.as_str(),
                        );
                    }
                });
        });

        ui.colored_label(
            egui::Color32::GRAY,
            "Indicator columns cannot be added yet.",
        );
    }
}
