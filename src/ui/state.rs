use crate::columns::ColumnBuilder;
use crate::config::BuilderConfig;

/// Central application state for the UI
pub struct AppState {
    pub builder: ColumnBuilder,

    // Selector options
    pub source_columns: Vec<String>,
    pub indicators: Vec<String>,
    pub selected_indicator: Option<String>,

    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&BuilderConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &BuilderConfig) -> Self {
        Self {
            builder: super::services::ConfigBridge::to_column_builder(config),
            source_columns: config.source_columns.clone(),
            indicators: config.indicators.clone(),
            selected_indicator: config.indicators.first().cloned(),
            status_message: "Ready".to_string(),
        }
    }

    /// Add the draft as the active kind and report the outcome in the status line.
    pub fn add_active_column(&mut self) {
        let kind = self.builder.active_kind();
        self.status_message = match self.builder.add_active_column() {
            Some(column) => format!("Added column '{}'", column.col_name()),
            None => format!("{} column not added", kind.label()),
        };
    }
}
