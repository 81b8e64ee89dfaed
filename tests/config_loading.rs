use colbuilder::config::{BuilderConfig, ConfigManager, ConfigSection};
use colbuilder::types::{ColumnKind, RollingFunction};
use colbuilder::ui::ConfigBridge;
use config::FileFormat;

// Each test uses its own prefix so environment overrides never leak between them.

#[test]
fn test_defaults_match_form() {
    let manager = ConfigManager::with_env_prefix("COLBUILDER_TEST_DEFAULTS");
    manager.load_from_env().unwrap();

    let config = manager.get().columns;
    assert_eq!(config, BuilderConfig::default());
    assert_eq!(config.source_columns, vec!["open", "high", "low", "close", "volume"]);
    assert_eq!(config.indicators, vec!["SMA", "EMA"]);

    let builder = ConfigBridge::to_column_builder(&config);
    assert_eq!(builder.active_kind(), ColumnKind::Lag);
    assert_eq!(builder.draft.on, "close");
    assert_eq!(builder.draft.period, Some(1));
    assert_eq!(builder.draft.function, RollingFunction::Mean);
    assert_eq!(builder.draft.column_name, None);
    assert_eq!(builder.draft.lag, None);
}

#[test]
fn test_load_toml() {
    let manager = ConfigManager::with_env_prefix("COLBUILDER_TEST_TOML");
    manager
        .load_from_str(
            r#"
            [columns]
            source_columns = ["close", "volume"]
            default_kind = "rolling"
            default_on = "volume"
            default_period = 20
            default_function = "zscore"
            "#,
            FileFormat::Toml,
        )
        .unwrap();

    let config = manager.get().columns;
    assert_eq!(config.source_columns, vec!["close", "volume"]);
    assert_eq!(config.indicators, vec!["SMA", "EMA"]);
    assert_eq!(config.default_kind, ColumnKind::Rolling);

    let draft = config.draft();
    assert_eq!(draft.on, "volume");
    assert_eq!(draft.period, Some(20));
    assert_eq!(draft.function, RollingFunction::Zscore);
}

#[test]
fn test_load_json() {
    let manager = ConfigManager::with_env_prefix("COLBUILDER_TEST_JSON");
    manager
        .load_from_str(r#"{ "columns": { "indicators": ["RSI"] } }"#, FileFormat::Json)
        .unwrap();

    assert_eq!(manager.get().columns.indicators, vec!["RSI"]);
}

#[test]
fn test_env_overrides_file() {
    std::env::set_var("COLBUILDER_TEST_ENV__COLUMNS__DEFAULT_PERIOD", "7");
    let manager = ConfigManager::with_env_prefix("COLBUILDER_TEST_ENV");
    manager
        .load_from_str("[columns]\ndefault_period = 3\n", FileFormat::Toml)
        .unwrap();

    assert_eq!(manager.get().columns.default_period, 7);
}

#[test]
fn test_invalid_default_source_rejected() {
    let manager = ConfigManager::with_env_prefix("COLBUILDER_TEST_INVALID");
    let result = manager.load_from_str(
        "[columns]\nsource_columns = [\"open\"]\ndefault_on = \"close\"\n",
        FileFormat::Toml,
    );

    assert!(result.is_err());
    assert_eq!(manager.get().columns, BuilderConfig::default());
}

#[test]
fn test_update_validates() {
    let manager = ConfigManager::new();

    assert!(manager.update(|c| c.columns.source_columns.clear()).is_err());
    assert_eq!(manager.get().columns, BuilderConfig::default());

    manager.update(|c| c.columns.default_on = "open".to_string()).unwrap();
    assert_eq!(manager.get().columns.default_on, "open");
}

#[test]
fn test_manifest_lists_every_field() {
    let manifest = BuilderConfig::default().to_manifest();
    let names: Vec<&str> = manifest.fields.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(BuilderConfig::section_name(), "columns");
    assert_eq!(
        names,
        vec!["source_columns", "indicators", "default_kind", "default_on", "default_period", "default_function"]
    );
}

#[test]
fn test_save_writes_toml() {
    let manager = ConfigManager::new();
    manager.update(|c| c.columns.default_period = 12).unwrap();

    let path = std::env::temp_dir().join(format!("colbuilder-save-{}.toml", std::process::id()));
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::with_env_prefix("COLBUILDER_TEST_SAVE");
    reloaded.load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(reloaded.get(), manager.get());
}
