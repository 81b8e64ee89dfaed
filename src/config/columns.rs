use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::columns::Draft;
use crate::error::ColbuilderError;
use crate::types::{ColumnKind, RollingFunction};
use serde::{Deserialize, Serialize};

/// Selector options and draft defaults for the column form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub source_columns: Vec<String>,
    pub indicators: Vec<String>,
    pub default_kind: ColumnKind,
    pub default_on: String,
    pub default_period: i64,
    pub default_function: RollingFunction,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            source_columns: ["open", "high", "low", "close", "volume"]
                .into_iter()
                .map(String::from)
                .collect(),
            indicators: vec!["SMA".to_string(), "EMA".to_string()],
            default_kind: ColumnKind::Lag,
            default_on: "close".to_string(),
            default_period: 1,
            default_function: RollingFunction::Mean,
        }
    }
}

impl BuilderConfig {
    /// A fresh draft seeded from these defaults.
    pub fn draft(&self) -> Draft {
        Draft {
            on: self.default_on.clone(),
            period: Some(self.default_period),
            function: self.default_function,
            ..Draft::default()
        }
    }
}

impl ConfigSection for BuilderConfig {
    fn section_name() -> &'static str {
        "columns"
    }

    fn validate(&self) -> Result<(), ColbuilderError> {
        if self.source_columns.is_empty() {
            return Err(ColbuilderError::Configuration(
                "At least one source column is required".to_string()
            ));
        }
        if !self.source_columns.contains(&self.default_on) {
            return Err(ColbuilderError::Configuration(format!(
                "Default source column '{}' is not one of {:?}",
                self.default_on, self.source_columns
            )));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Columns".to_string(),
            fields: vec![
                FieldManifest::new(
                    "source_columns",
                    "list",
                    &defaults.source_columns,
                    "Data columns a new column can be computed on",
                )
                .with_min(1.0),
                FieldManifest::new(
                    "indicators",
                    "list",
                    &defaults.indicators,
                    "Indicator names offered in the selector",
                ),
                FieldManifest::new(
                    "default_kind",
                    "enum",
                    defaults.default_kind,
                    "Column kind selected on startup",
                ),
                FieldManifest::new(
                    "default_on",
                    "string",
                    &defaults.default_on,
                    "Source column preselected in the form",
                ),
                FieldManifest::new(
                    "default_period",
                    "integer",
                    defaults.default_period,
                    "Initial lag, change period or window size",
                ),
                FieldManifest::new(
                    "default_function",
                    "enum",
                    defaults.default_function,
                    "Rolling window aggregation preselected in the form",
                ),
            ],
        }
    }
}
