use crate::columns::ColumnBuilder;
use crate::config::BuilderConfig;

pub struct ConfigBridge;

impl ConfigBridge {
    /// Convert BuilderConfig to a ColumnBuilder with a seeded draft
    pub fn to_column_builder(config: &BuilderConfig) -> ColumnBuilder {
        ColumnBuilder::with_draft(config.draft(), config.default_kind)
    }
}
