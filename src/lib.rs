pub mod columns;
pub mod config;
pub mod error;
pub mod types;
pub mod ui;

pub use columns::{ColumnBuilder, Draft};
pub use error::{ColbuilderError, Rejection, Result};
pub use types::{ColumnConfig, ColumnKind, LagAdjustment, RollingFunction};
