pub mod column_form;
pub mod column_table;
pub mod indicator_selector;

pub use column_form::ColumnForm;
pub use column_table::ColumnTable;
pub use indicator_selector::IndicatorSelector;
