use super::draft::Draft;
use super::evaluators::evaluate;
use crate::error::Result;
use crate::types::{ColumnConfig, ColumnKind};

/// Owns the draft, the active kind, and the accepted column list.
///
/// The accepted list is append-only: only evaluations that succeed are pushed,
/// in call order, and nothing is ever reordered or deduplicated.
#[derive(Debug, Clone, Default)]
pub struct ColumnBuilder {
    pub draft: Draft,
    active_kind: ColumnKind,
    columns: Vec<ColumnConfig>,
}

impl ColumnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: Draft, active_kind: ColumnKind) -> Self {
        Self {
            draft,
            active_kind,
            columns: Vec::new(),
        }
    }

    pub fn active_kind(&self) -> ColumnKind {
        self.active_kind
    }

    pub fn is_active(&self, kind: ColumnKind) -> bool {
        self.active_kind == kind
    }

    pub fn set_active_kind(&mut self, kind: ColumnKind) {
        self.active_kind = kind;
    }

    /// Evaluate the draft as `kind` and append the result if it is accepted.
    ///
    /// The draft's name and formula are cleared whatever the outcome.
    pub fn add_column(&mut self, kind: ColumnKind) -> Option<&ColumnConfig> {
        let outcome = evaluate(kind, &mut self.draft);
        self.draft.clear();

        match outcome {
            Ok(column) => {
                log::info!("Added {} column '{}'", kind, column.col_name());
                self.columns.push(column);
                self.columns.last()
            }
            Err(reason) => {
                log::debug!("Draft rejected as {}: {}", kind, reason);
                None
            }
        }
    }

    pub fn add_active_column(&mut self) -> Option<&ColumnConfig> {
        self.add_column(self.active_kind)
    }

    pub fn columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The accepted list as the JSON array handed to the backend.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.columns)?)
    }

    pub fn into_columns(self) -> Vec<ColumnConfig> {
        self.columns
    }
}
