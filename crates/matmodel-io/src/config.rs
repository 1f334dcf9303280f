//! Export configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! format = "json"
//! include_docs = true
//! categories = ["mechanical", "thermal"]
//! class_name = "ModelUUIDs"
//! ```
//!
//! Every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use matmodel_types::{MatModelError, MatModelResult, ModelCategory};

/// Output format for exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
}

impl ExportFormat {
    /// Picks the format from a file extension (`.json` or `.toml`).
    pub fn from_path(path: &Path) -> MatModelResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(MatModelError::InvalidConfig(format!(
                "Unsupported file format: {}. Use .json or .toml",
                path.display()
            ))),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = MatModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(MatModelError::InvalidConfig(format!(
                "Unknown format: '{other}'. Available: json, toml"
            ))),
        }
    }
}

/// Settings for registry exports and binding descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Output format. Unset means "decide from context", see
    /// [`ExportConfig::resolve_format`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ExportFormat>,
    /// Include per-model documentation strings.
    pub include_docs: bool,
    /// Categories to export. Empty means all.
    pub categories: Vec<ModelCategory>,
    /// Name of the scripting-facing class in binding descriptors.
    pub class_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: None,
            include_docs: true,
            categories: Vec::new(),
            class_name: "ModelUUIDs".to_string(),
        }
    }
}

impl ExportConfig {
    /// Parses and validates a TOML config.
    pub fn from_toml_str(content: &str) -> MatModelResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| MatModelError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML config file.
    pub fn load(path: &Path) -> MatModelResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks that the config is usable.
    pub fn validate(&self) -> MatModelResult<()> {
        let name = self.class_name.as_str();
        if name.is_empty() {
            return Err(MatModelError::InvalidConfig("class_name must not be empty".into()));
        }
        if !is_identifier(name) {
            return Err(MatModelError::InvalidConfig(format!(
                "class_name '{name}' is not a valid identifier"
            )));
        }
        Ok(())
    }

    /// Picks the output format.
    ///
    /// Precedence: explicit `requested` format, then the config's
    /// `format`, then the extension of `output`, then JSON.
    pub fn resolve_format(
        &self,
        requested: Option<ExportFormat>,
        output: Option<&Path>,
    ) -> ExportFormat {
        requested
            .or(self.format)
            .or_else(|| output.and_then(|p| ExportFormat::from_path(p).ok()))
            .unwrap_or_default()
    }

    /// Returns true if models of `category` pass the filter.
    pub fn includes(&self, category: ModelCategory) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
