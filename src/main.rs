use colbuilder::config::ConfigManager;
use colbuilder::ui::ColumnBuilderApp;
use eframe::NativeOptions;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = "colbuilder.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => manager.load_from_file(&path)?,
        None if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() => {
            manager.load_from_file(DEFAULT_CONFIG_FILE)?
        }
        None => {
            log::warn!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
            manager.load_from_env()?
        }
    }
    let config = manager.get();

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 650.0])
            .with_min_inner_size([700.0, 450.0])
            .with_title("Column Builder"),
        ..Default::default()
    };

    eframe::run_native(
        "Column Builder",
        native_options,
        Box::new(move |cc| Ok(Box::new(ColumnBuilderApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run UI: {}", e))
}
