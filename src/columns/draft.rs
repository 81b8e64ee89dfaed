use crate::types::{LagAdjustment, RollingFunction};

/// Name substituted when a non-formula column is added without one.
pub const AUTO_NAME: &str = "auto";

/// The column definition currently being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub column_name: Option<String>,
    pub on: String,
    /// Lag offset, percent change period or rolling window size.
    pub period: Option<i64>,
    pub lag: Option<LagAdjustment>,
    pub function: RollingFunction,
    pub formula: Option<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            column_name: None,
            on: "close".to_string(),
            period: Some(1),
            lag: None,
            function: RollingFunction::Mean,
            formula: None,
        }
    }
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the per-column inputs. Source column, period, lag and function
    /// carry over to the next column.
    pub fn clear(&mut self) {
        self.formula = None;
        self.column_name = None;
    }
}
