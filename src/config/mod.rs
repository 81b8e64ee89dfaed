pub mod columns;
pub mod manager;
pub mod traits;

pub use columns::BuilderConfig;
pub use manager::{AppConfig, ConfigManager, ENV_PREFIX};
pub use traits::{ConfigManifest, ConfigSection, FieldManifest};
