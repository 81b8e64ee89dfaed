use super::{columns::BuilderConfig, traits::ConfigSection};
use crate::error::ColbuilderError;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Environment variables with this prefix override file settings,
/// e.g. `COLBUILDER__COLUMNS__DEFAULT_ON=open`.
pub const ENV_PREFIX: &str = "COLBUILDER";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub columns: BuilderConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ColbuilderError> {
        self.columns.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
    env_prefix: String,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_env_prefix(ENV_PREFIX)
    }

    pub fn with_env_prefix(prefix: &str) -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
            env_prefix: prefix.to_string(),
        }
    }

    /// Defaults overlaid with environment variables only.
    pub fn load_from_env(&self) -> Result<(), ColbuilderError> {
        self.load(Config::builder())
    }

    /// Load a TOML or JSON file (format taken from the extension), then
    /// environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ColbuilderError> {
        let path = path.as_ref();
        log::info!("Loading configuration from {}", path.display());
        self.load(Config::builder().add_source(File::from(path)))
    }

    pub fn load_from_str(&self, contents: &str, format: FileFormat) -> Result<(), ColbuilderError> {
        self.load(Config::builder().add_source(File::from_str(contents, format)))
    }

    fn load(&self, builder: ConfigBuilder<DefaultState>) -> Result<(), ColbuilderError> {
        let config: AppConfig = builder
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("columns.source_columns")
                    .with_list_parse_key("columns.indicators")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ColbuilderError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| ColbuilderError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn update<F>(&self, f: F) -> Result<(), ColbuilderError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut updated = self.get();
        f(&mut updated);
        updated.validate()?;
        *self.config.write().unwrap_or_else(|e| e.into_inner()) = updated;
        Ok(())
    }
}
