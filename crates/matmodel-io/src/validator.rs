//! Registry and export validation.
//!
//! Catches data-level errors in the built-in table or in an export file
//! with clear diagnostics.

use std::collections::{HashMap, HashSet};

use matmodel_registry::ModelUuids;
use matmodel_types::{MatModelError, MatModelResult, ModelUuid};

use crate::contract::{RegistryExport, EXPORT_VERSION};

/// Validates the built-in registry.
///
/// Checks:
/// - Every name is non-empty and unique
/// - Every value is a non-empty, well-formed, non-nil UUID
/// - UUIDs are pairwise distinct
pub fn validate_registry(registry: &ModelUuids) -> MatModelResult<()> {
    let mut names = HashSet::new();
    let mut seen: HashMap<ModelUuid, &str> = HashMap::new();

    for (kind, value) in registry.iter() {
        let name = kind.name();
        if name.is_empty() {
            return Err(MatModelError::InvalidConfig("Model with empty name".into()));
        }
        if !names.insert(name) {
            return Err(MatModelError::DuplicateEntry(format!("name '{name}'")));
        }

        let id = parse_entry_uuid(name, value)?;
        if let Some(other) = seen.insert(id, name) {
            return Err(MatModelError::DuplicateEntry(format!(
                "UUID {value} used by both '{other}' and '{name}'"
            )));
        }
    }

    tracing::info!(models = names.len(), "registry validated");
    Ok(())
}

/// Validates an export document against the built-in registry.
///
/// Checks:
/// - The document version is [`EXPORT_VERSION`]
/// - Every entry names a declared model
/// - Every entry's UUID matches the declared one (any UUID spelling)
/// - No name or UUID appears twice
pub fn validate_export(export: &RegistryExport, registry: &ModelUuids) -> MatModelResult<()> {
    if export.version != EXPORT_VERSION {
        return Err(MatModelError::InvalidConfig(format!(
            "Unsupported export version {} (expected {EXPORT_VERSION})",
            export.version
        )));
    }

    let mut names = HashSet::new();
    let mut ids = HashSet::new();

    for entry in &export.entries {
        let expected = registry.get(&entry.name)?;
        if !names.insert(entry.name.as_str()) {
            return Err(MatModelError::DuplicateEntry(format!("name '{}'", entry.name)));
        }

        let found = parse_entry_uuid(&entry.name, &entry.uuid)?;
        if !ids.insert(found) {
            return Err(MatModelError::DuplicateEntry(format!("UUID {}", entry.uuid)));
        }
        if found.to_string() != expected {
            return Err(MatModelError::Mismatch {
                name: entry.name.clone(),
                expected: expected.to_string(),
                found: entry.uuid.clone(),
            });
        }
    }

    tracing::info!(entries = export.entries.len(), "export validated");
    Ok(())
}

fn parse_entry_uuid(name: &str, value: &str) -> MatModelResult<ModelUuid> {
    let id = ModelUuid::parse(value)
        .map_err(|e| MatModelError::InvalidUuid(format!("model '{name}': {e}")))?;
    if id.is_nil() {
        return Err(MatModelError::InvalidUuid(format!("model '{name}' has the nil UUID")));
    }
    Ok(id)
}
