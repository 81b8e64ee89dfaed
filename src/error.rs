use crate::types::ColumnKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColbuilderError {
    #[error("Column rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Why a draft did not produce a column.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("period is not set")]
    MissingPeriod,

    #[error("period must not be zero")]
    ZeroPeriod,

    #[error("lag adjustment must not be zero")]
    ZeroLag,

    #[error("column name is required")]
    MissingColumnName,

    #[error("formula is required")]
    MissingFormula,

    #[error("{0} columns have no evaluator")]
    Unsupported(ColumnKind),
}

pub type Result<T> = std::result::Result<T, ColbuilderError>;
