use crate::error::ColbuilderError;
use serde::{Deserialize, Serialize};

/// A named block of settings that can check itself and describe its fields.
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), ColbuilderError>;
    fn to_manifest(&self) -> ConfigManifest;
}

/// Field descriptions used to render a settings form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigManifest {
    pub section: String,
    pub fields: Vec<FieldManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldManifest {
    pub name: String,
    pub field_type: String,
    pub default: serde_json::Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: String,
}

impl FieldManifest {
    pub fn new<T: Serialize>(name: &str, field_type: &str, default: T, description: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            default: serde_json::to_value(default).unwrap_or(serde_json::Value::Null),
            min: None,
            max: None,
            description: description.to_string(),
        }
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }
}
