//! Binding descriptors for scripting-layer code generators.
//!
//! A descriptor lists one read-only property per model. Generators turn
//! it into an accessor object whose attributes return the UUID strings.

use serde::{Deserialize, Serialize};

use matmodel_registry::ModelUuids;
use matmodel_types::{MatModelError, MatModelResult};

use crate::config::{ExportConfig, ExportFormat};

/// A read-only property on the generated accessor object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyBinding {
    /// Attribute name, identical to the model name.
    pub name: String,
    /// Value returned by the getter.
    pub value: String,
    /// Always true. There are no setters.
    pub read_only: bool,
    pub doc: String,
}

/// Everything a generator needs to emit the accessor class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingDescriptor {
    pub class_name: String,
    pub properties: Vec<PropertyBinding>,
}

impl BindingDescriptor {
    /// Builds a descriptor from the registry, honoring the category filter.
    pub fn from_registry(registry: &ModelUuids, config: &ExportConfig) -> MatModelResult<Self> {
        config.validate()?;
        let properties = registry
            .iter()
            .filter(|(kind, _)| config.includes(kind.category()))
            .map(|(kind, value)| PropertyBinding {
                name: kind.name().to_string(),
                value: value.to_string(),
                read_only: true,
                doc: format!("UUID for model '{}'. {}", kind.name(), kind.doc()),
            })
            .collect();

        Ok(Self {
            class_name: config.class_name.clone(),
            properties,
        })
    }

    /// Finds a property by attribute name.
    pub fn property(&self, name: &str) -> Option<&PropertyBinding> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Serializes the descriptor in the requested format.
    pub fn render(&self, format: ExportFormat) -> MatModelResult<String> {
        let text = match format {
            ExportFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            ExportFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
        };
        text.map_err(MatModelError::Serialization)
    }
}
