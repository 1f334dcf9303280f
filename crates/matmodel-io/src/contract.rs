//! Registry export contract types.
//!
//! These types are serializable for file export and for the binding
//! generator.

use serde::{Deserialize, Serialize};

use matmodel_registry::{ModelKind, ModelUuids};
use matmodel_types::{MatModelError, MatModelResult, ModelCategory};

use crate::config::{ExportConfig, ExportFormat};

/// Current export document version.
pub const EXPORT_VERSION: u32 = 1;

/// One registry entry as written to an export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Scripting attribute name.
    pub name: String,
    /// Lowercase hyphenated UUID.
    pub uuid: String,
    pub category: ModelCategory,
    /// Documentation string. Omitted when the export excludes docs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl ModelEntry {
    /// Builds the entry for a declared model.
    pub fn from_kind(kind: ModelKind, include_doc: bool) -> Self {
        Self {
            name: kind.name().to_string(),
            uuid: kind.uuid_str().to_string(),
            category: kind.category(),
            doc: include_doc.then(|| kind.doc().to_string()),
        }
    }
}

/// A full or filtered snapshot of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryExport {
    /// Document format version.
    pub version: u32,
    /// Entries in declaration order.
    pub entries: Vec<ModelEntry>,
}

impl RegistryExport {
    /// Snapshots `registry`, honoring the config's category filter and
    /// doc setting. Rejects an invalid config.
    pub fn from_registry(registry: &ModelUuids, config: &ExportConfig) -> MatModelResult<Self> {
        config.validate()?;
        let entries: Vec<ModelEntry> = registry
            .iter()
            .filter(|(kind, _)| config.includes(kind.category()))
            .map(|(kind, _)| ModelEntry::from_kind(kind, config.include_docs))
            .collect();

        tracing::info!(entries = entries.len(), "registry export built");
        Ok(Self {
            version: EXPORT_VERSION,
            entries,
        })
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the export has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the export in the requested format.
    pub fn render(&self, format: ExportFormat) -> MatModelResult<String> {
        match format {
            ExportFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| MatModelError::Serialization(e.to_string())),
            ExportFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| MatModelError::Serialization(e.to_string()))
            }
        }
    }

    /// Parses an export document in the given format.
    pub fn parse(content: &str, format: ExportFormat) -> MatModelResult<Self> {
        match format {
            ExportFormat::Json => {
                serde_json::from_str(content).map_err(|e| MatModelError::Serialization(e.to_string()))
            }
            ExportFormat::Toml => {
                toml::from_str(content).map_err(|e| MatModelError::Serialization(e.to_string()))
            }
        }
    }

    /// Reads an export file, picking the format from its extension.
    pub fn load(path: &std::path::Path) -> MatModelResult<Self> {
        let format = ExportFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }
}
