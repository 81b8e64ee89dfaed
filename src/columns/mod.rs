pub mod builder;
pub mod draft;
pub mod evaluators;

pub use builder::ColumnBuilder;
pub use draft::{Draft, AUTO_NAME};
pub use evaluators::{
    evaluate, evaluate_formula, evaluate_lag, evaluate_percent_change, evaluate_rolling,
};
