use crate::columns::Draft;
use crate::types::{ColumnKind, LagAdjustment, RollingFunction};
use crate::ui::state::AppState;
use crate::ui::widgets::IndicatorSelector;

/// Draft editor: kind selector plus the fields the active kind uses.
pub struct ColumnForm;

impl ColumnForm {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        Self::show_kind_selector(ui, state);
        ui.separator();

        let kind = state.builder.active_kind();
        if kind == ColumnKind::Indicator {
            IndicatorSelector::show(ui, state);
            return;
        }

        let draft = &mut state.builder.draft;

        match kind {
            ColumnKind::Lag => {
                Self::show_name(ui, draft, "auto");
                Self::show_source(ui, draft, &state.source_columns);
                Self::show_period(ui, draft, "Lag:");
            }
            ColumnKind::PercentChange => {
                Self::show_name(ui, draft, "auto");
                Self::show_source(ui, draft, &state.source_columns);
                Self::show_period(ui, draft, "Period:");
                Self::show_lag_adjustment(ui, draft);
            }
            ColumnKind::Rolling => {
                Self::show_name(ui, draft, "auto");
                Self::show_source(ui, draft, &state.source_columns);
                Self::show_period(ui, draft, "Window:");
                Self::show_function(ui, draft);
                Self::show_lag_adjustment(ui, draft);
            }
            ColumnKind::Formula => {
                Self::show_name(ui, draft, "required");
                Self::show_formula(ui, draft);
            }
            ColumnKind::Indicator => {}
        }
    }

    fn show_kind_selector(ui: &mut egui::Ui, state: &mut AppState) {
        ui.label("Column Type:");
        for kind in ColumnKind::ALL {
            if ui.radio(state.builder.is_active(kind), kind.label()).clicked() {
                state.builder.set_active_kind(kind);
            }
        }
    }

    fn show_name(ui: &mut egui::Ui, draft: &mut Draft, hint: &str) {
        ui.horizontal(|ui| {
            ui.label("Column Name:");
            Self::optional_text(ui, &mut draft.column_name, hint);
        });
    }

    fn show_source(ui: &mut egui::Ui, draft: &mut Draft, source_columns: &[String]) {
        ui.horizontal(|ui| {
            ui.label("On:");
            egui::ComboBox::from_id_salt("column_on")
                .selected_text(draft.on.as_str())
                .show_ui(ui, |ui| {
                    for column in source_columns {
                        ui.selectable_value(&mut draft.on, column.clone(), column.as_str());
                    }
                });
        });
    }

    fn show_period(ui: &mut egui::Ui, draft: &mut Draft, label: &str) {
        ui.horizontal(|ui| {
            let mut has_period = draft.period.is_some();
            if ui.checkbox(&mut has_period, label).changed() {
                draft.period = has_period.then_some(1);
            }
            if let Some(period) = &mut draft.period {
                ui.add(egui::DragValue::new(period).range(-10_000..=10_000));
            }
        });
    }

    fn show_function(ui: &mut egui::Ui, draft: &mut Draft) {
        ui.horizontal(|ui| {
            ui.label("Function:");
            egui::ComboBox::from_id_salt("rolling_function")
                .selected_text(draft.function.as_str())
                .show_ui(ui, |ui| {
                    for func in RollingFunction::ALL {
                        ui.selectable_value(&mut draft.function, func, func.as_str());
                    }
                });
        });
    }

    fn show_lag_adjustment(ui: &mut egui::Ui, draft: &mut Draft) {
        let mode = match draft.lag {
            None => "None",
            Some(LagAdjustment::Periods(_)) => "Bars",
            Some(LagAdjustment::Flag(_)) => "Flag",
        };

        ui.horizontal(|ui| {
            ui.label("Lag:");
            egui::ComboBox::from_id_salt("lag_mode")
                .selected_text(mode)
                .show_ui(ui, |ui| {
                    if ui.selectable_label(draft.lag.is_none(), "None").clicked() {
                        draft.lag = None;
                    }
                    let is_periods = matches!(draft.lag, Some(LagAdjustment::Periods(_)));
                    if ui.selectable_label(is_periods, "Bars").clicked() && !is_periods {
                        draft.lag = Some(LagAdjustment::Periods(1));
                    }
                    let is_flag = matches!(draft.lag, Some(LagAdjustment::Flag(_)));
                    if ui.selectable_label(is_flag, "Flag").clicked() && !is_flag {
                        draft.lag = Some(LagAdjustment::Flag(true));
                    }
                });

            match &mut draft.lag {
                None => {}
                Some(LagAdjustment::Periods(periods)) => {
                    ui.add(egui::DragValue::new(periods).range(-10_000..=10_000));
                }
                Some(LagAdjustment::Flag(flag)) => {
                    ui.checkbox(flag, "");
                }
            }
        });
    }

    fn show_formula(ui: &mut egui::Ui, draft: &mut Draft) {
        ui.label("Formula:");
        Self::optional_text(ui, &mut draft.formula, "e.g. close/open");
    }

    /// Text input bound to an optional value; blank text unsets it.
    fn optional_text(ui: &mut egui::Ui, value: &mut Option<String>, hint: &str) {
        let mut text = value.clone().unwrap_or_default();
        let response = ui.add(egui::TextEdit::singleline(&mut text).hint_text(hint));
        if response.changed() {
            *value = if text.trim().is_empty() { None } else { Some(text) };
        }
    }
}
