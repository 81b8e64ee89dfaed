mod app;
mod panels;
mod services;
mod state;
mod widgets;

pub use app::ColumnBuilderApp;
pub use services::ConfigBridge;
pub use state::AppState;
